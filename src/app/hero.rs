use std::time::Duration;

use leptos::{either::Either, prelude::*, web_sys::VisibilityState};
use leptos_meta::Script;
use leptos_use::use_document_visibility;

use crate::data::{PROFILE, ROLE_TIMING, SCENE_URL};
use crate::typewriter::{TickLoop, Timer, Timing, Typewriter, TypewriterCell, CARET};

const SPLINE_VIEWER_JS: &str = "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center overflow-hidden grid-bg"
        >
            <div class="relative z-10 w-full flex flex-col lg:flex-row items-center">
                <div class="flex-1 pt-28 lg:pt-0 px-[7.6923%]">
                    <p class="mb-6 text-sm text-muted">"// WELCOME TO MY TERMINAL"</p>
                    <h1 class="font-bold mb-4 text-white text-[clamp(52px,8vw,80px)] leading-none">
                        {PROFILE.name}
                    </h1>
                    <div class="mb-6 h-10 text-accent text-[clamp(18px,2.5vw,24px)]">
                        <TypeWriter phrases=PROFILE.roles timing=ROLE_TIMING />
                    </div>
                    <p class="text-lg mb-10 max-w-lg text-white/60 font-sans leading-relaxed">
                        {PROFILE.tagline}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#projects"
                            class="px-8 py-4 font-medium flex items-center gap-3 bg-accent text-black min-h-14"
                        >
                            "View Projects →"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 font-medium flex items-center gap-3 bg-white/10 text-white hover:bg-white hover:text-black min-h-14"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                    <div class="mt-12 lg:hidden">
                        <ProfileImage class="w-36 h-36" />
                    </div>
                </div>
                <div class="hidden lg:flex flex-1 relative items-center justify-center min-h-[650px]">
                    <div class="absolute z-20 top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 float-animation">
                        <ProfileImage class="w-44 h-44" />
                    </div>
                    <SceneEmbed scene=SCENE_URL />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileImage(class: &'static str) -> impl IntoView {
    view! {
        <img
            src=PROFILE.image
            alt="Profile"
            class=format!("relative object-cover rounded-full border-2 border-accent/40 {class}")
        />
    }
}

/// Browser timeouts, cleared through their handle.
#[derive(Debug, Clone, Copy)]
struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
        set_timeout_with_handle(f, delay)
            .map_err(|e| log::error!("couldn't schedule typewriter tick: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

impl TypewriterCell for RwSignal<Typewriter> {
    fn update_typewriter<R>(&self, f: impl FnOnce(&mut Typewriter) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Types out each phrase, holds it, deletes it, and moves on to the next,
/// forever. The pending timer is cleared when the view is torn down.
///
/// Background tabs throttle timers, so the loop stops while the page is
/// hidden and starts again from the first phrase when it comes back.
#[component]
pub fn TypeWriter(
    phrases: &'static [&'static str],
    #[prop(optional)] timing: Timing,
) -> impl IntoView {
    let tw = match Typewriter::new(phrases.iter().copied(), timing) {
        Ok(tw) => tw,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(());
        }
    };
    let state = RwSignal::new(tw);
    let ticker = TickLoop::new(state, BrowserTimer);

    Effect::new({
        let ticker = ticker.clone();
        move |_| ticker.start()
    });

    let visibility = use_document_visibility();
    Effect::watch(
        move || visibility.get(),
        {
            let ticker = ticker.clone();
            move |now, prev, _| match (prev, now) {
                (_, VisibilityState::Hidden) => ticker.stop(),
                (Some(VisibilityState::Hidden), VisibilityState::Visible) => ticker.restart(),
                _ => {}
            }
        },
        false,
    );

    on_cleanup(move || ticker.stop());

    Either::Left(view! {
        <span>
            {move || state.with(|tw| tw.displayed_text().to_string())}
            <span class="animate-pulse text-accent">{CARET}</span>
        </span>
    })
}

/// Third-party 3D scene. Only loaded in the browser once the page has mounted;
/// a placeholder is shown until then.
#[component]
pub fn SceneEmbed(scene: &'static str) -> impl IntoView {
    let (ready, set_ready) = signal(false);
    Effect::new(move |_| set_ready(true));

    view! {
        <Show
            when=move || ready.get()
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center w-full h-full">
                        <span class="text-muted text-sm">"Initializing 3D..."</span>
                    </div>
                }
            }
        >
            <Script type_="module" src=SPLINE_VIEWER_JS />
            <div class="relative w-[700px] h-[700px] overflow-visible">
                <spline-viewer url=scene></spline-viewer>
            </div>
        </Show>
    }
}
