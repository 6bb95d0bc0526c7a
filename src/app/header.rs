use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::data::{header_is_solid, NAV_LINKS, PROFILE};

const CTA_LABEL: &str = "Let's Build";
const CTA_CLASS: &str = "px-6 py-3 font-medium bg-accent text-black hover:bg-accent/15 hover:text-accent transition-colors duration-300";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let header_class = move || {
        let background = if header_is_solid(scroll_y.get()) {
            "bg-black/95 backdrop-blur-sm border-b border-white/10"
        } else {
            "bg-transparent border-b border-transparent"
        };
        format!("fixed top-0 w-full z-50 h-20 transition-colors duration-300 {background}")
    };

    let nav_items = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class=class
                        on:click=move |_| set_menu_open(false)
                    >
                        {link.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="w-full h-full flex items-center justify-between px-[7.6923%]">
                <a href="#hero" class="flex items-center gap-2 no-underline">
                    <span class="text-white font-semibold text-xl tracking-wider">
                        <span class="text-accent">"<"</span>
                        {PROFILE.handle}
                        <span class="text-accent">"/>"</span>
                    </span>
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {nav_items("text-white/60 hover:text-accent transition-colors duration-300")}
                    <a href="#contact" class=CTA_CLASS>
                        {CTA_LABEL}
                    </a>
                </nav>
                <button
                    class="md:hidden text-white"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col gap-4 px-[7.6923%] py-6 bg-black border-b border-white/10">
                    {nav_items("text-white/80 text-lg")}
                    <a
                        href="#contact"
                        class=format!("{CTA_CLASS} mt-2 w-full text-center")
                        on:click=move |_| set_menu_open(false)
                    >
                        {CTA_LABEL}
                    </a>
                </nav>
            </Show>
        </header>
    }
}
