use std::{future::Future, time::Duration};

use futures::channel::oneshot;
use leptos::{either::Either, ev, prelude::*, task::spawn_local};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::contact::{ContactForm, ContactService, Delay, Field, FormCell};
use crate::data::{CONTACT_DETAILS, SOCIAL_LINKS};
#[cfg(not(feature = "hydrate"))]
use crate::store::MemoryStore;
#[cfg(feature = "hydrate")]
use crate::store::{StorageError, SubmissionRecord, SubmissionStore, MESSAGES_KEY};

use super::toast::Toasts;

const INPUT_CLASS: &str = "w-full px-4 py-3 text-sm rounded-none border border-white/10 bg-[#0a0a0a] text-white placeholder:text-muted focus:outline-none focus:ring-1 focus:ring-accent focus:border-accent";

impl FormCell for RwSignal<ContactForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Browser timeout exposed as a future.
#[derive(Debug, Clone, Copy)]
struct TimeoutDelay;

impl Delay for TimeoutDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        async move {
            let _ = rx.await;
        }
    }
}

/// The message log in the browser's local storage. Unreadable contents come
/// back as the default (empty) log from `use_local_storage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
struct LocalStore {
    messages: Signal<Vec<SubmissionRecord>>,
    set_messages: WriteSignal<Vec<SubmissionRecord>>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn new() -> Self {
        let (messages, set_messages, _) =
            use_local_storage::<Vec<SubmissionRecord>, JsonSerdeWasmCodec>(MESSAGES_KEY);
        Self {
            messages,
            set_messages,
        }
    }
}

#[cfg(feature = "hydrate")]
impl SubmissionStore for LocalStore {
    fn read(&self) -> Vec<SubmissionRecord> {
        self.messages.try_get_untracked().unwrap_or_default()
    }

    fn write(&self, records: Vec<SubmissionRecord>) -> Result<(), StorageError> {
        match self.set_messages.try_set(records) {
            None => Ok(()),
            Some(_) => Err(StorageError::Unavailable(format!(
                "{MESSAGES_KEY} was disposed"
            ))),
        }
    }
}

#[cfg(feature = "hydrate")]
fn message_store() -> LocalStore {
    LocalStore::new()
}

// server render never submits
#[cfg(not(feature = "hydrate"))]
fn message_store() -> MemoryStore {
    MemoryStore::new()
}

#[component]
fn DraftInput(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.draft().get(field).to_string());
    let on_input = move |e: ev::Event| {
        form.update(|f| f.update_field(field, event_target_value(&e)));
    };
    let id = format!("contact-{}", field.as_str());
    let input_type = if field == Field::Email { "email" } else { "text" };

    view! {
        <div>
            <label for=id.clone() class="block text-sm mb-2 text-muted">
                {format!("// {}", field.as_str())}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            rows=5
                            placeholder=placeholder
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            type=input_type
                            placeholder=placeholder
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toasts = expect_context::<Toasts>();
    let service = ContactService::new(message_store(), toasts, TimeoutDelay);
    let sending = move || form.with(ContactForm::is_sending);

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        let service = service.clone();
        spawn_local(async move {
            if let Err(err) = service.submit(&form).await {
                log::debug!("contact submission not sent: {err}");
            }
        });
    };

    view! {
        <section id="contact" class="relative py-32 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-[7.6923%]">
                <div class="mb-16 section-content">
                    <p class="mb-3 text-sm text-accent">"// 004"</p>
                    <h2 class="font-bold text-white text-[clamp(32px,5vw,42px)]">
                        "Contact" <span class="text-accent">"."</span>
                    </h2>
                    <p class="mt-4 font-sans text-lg text-white/50">
                        "Interested in collaborating? Let's build something extraordinary."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div class="space-y-8">
                        {CONTACT_DETAILS
                            .iter()
                            .map(|d| {
                                view! {
                                    <div class="flex items-start gap-4">
                                        <div class="p-3 w-12 text-center bg-accent/10 text-accent" aria-hidden="true">
                                            {d.glyph}
                                        </div>
                                        <div>
                                            <p class="text-sm mb-1 text-muted">{d.label}</p>
                                            <p class="font-sans text-white">{d.value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="pt-4">
                            <p class="text-sm mb-4 text-muted">"// connect"</p>
                            <div class="flex flex-wrap gap-3">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|l| {
                                        view! {
                                            <a
                                                href=l.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                title=l.name
                                                class="px-4 py-3 flex items-center gap-2 text-sm text-white/60 bg-white/5 border border-white/10 hover:border-accent/40 hover:text-accent transition-colors"
                                            >
                                                <i class=l.icon aria-hidden="true"></i>
                                                <span>{l.name}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <form class="space-y-6" on:submit=on_submit>
                        <DraftInput form=form field=Field::Name placeholder="Enter your name" />
                        <DraftInput form=form field=Field::Email placeholder="Enter your email" />
                        <DraftInput
                            form=form
                            field=Field::Message
                            placeholder="Describe your project or idea..."
                            multiline=true
                        />
                        <button
                            type="submit"
                            disabled=sending
                            class="w-full px-8 py-4 min-h-14 font-medium flex items-center justify-center gap-3 bg-accent text-black disabled:opacity-50"
                        >
                            {move || if sending() { "Transmitting..." } else { "Send Message" }}
                            " ➤"
                        </button>
                        <p class="text-center text-xs text-muted">
                            "// messages saved locally (mock)"
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
