use std::time::Duration;

use leptos::prelude::*;

use crate::contact::Notifier;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    id: u64,
    kind: ToastKind,
    text: String,
}

/// Notices shown in the corner of the page, each dismissed after a few seconds.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, kind: ToastKind, text: &str) {
        let id = self.next_id.get_value();
        self.next_id.update_value(|n| *n += 1);
        self.items.update(|v| {
            v.push(Toast {
                id,
                kind,
                text: text.to_string(),
            })
        });

        let items = self.items;
        set_timeout(
            move || {
                items.try_update(|v| v.retain(|t| t.id != id));
            },
            TOAST_TTL,
        );
    }
}

impl Notifier for Toasts {
    fn success(&self, msg: &str) {
        self.push(ToastKind::Success, msg);
    }

    fn error(&self, msg: &str) {
        self.push(ToastKind::Error, msg);
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div
            class="fixed bottom-4 right-4 z-50 flex flex-col gap-2"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.items.get()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let class = match t.kind {
                        ToastKind::Success => "border-accent/40 text-accent",
                        ToastKind::Error => "border-red/40 text-red",
                    };
                    view! {
                        <div class=format!(
                            "px-4 py-3 text-sm bg-[#0a0a0a] border shadow-lg {class}",
                        )>{t.text}</div>
                    }
                }
            />
        </div>
    }
}
