mod contact;
mod header;
mod hero;
mod sections;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use header::Header;
use hero::Hero;
use sections::{About, Projects, Skills};
use toast::{provide_toasts, Toaster};

use crate::data::PROFILE;

const DEVICON_CSS: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link rel="stylesheet" href=DEVICON_CSS />
                <MetaTags />
            </head>
            <body class="font-mono bg-black min-h-screen">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <Toaster />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ContactSection />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 relative border-t border-white/5">
            <div class="max-w-6xl mx-auto px-[7.6923%]">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="flex items-center gap-2">
                        <span class="text-sm text-accent">"<" {PROFILE.name} "/>"</span>
                        <span class="text-xs text-muted">"// END_OF_TRANSMISSION"</span>
                    </div>
                    <p class="text-xs text-muted">
                        {format!("0x{} {} | All rights reserved", PROFILE.name, env!("BUILD_YEAR"))}
                    </p>
                    <a
                        href="#hero"
                        aria-label="Back to top"
                        class="p-3 text-white/60 border border-white/10 hover:border-accent/40 transition-colors"
                    >
                        "↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
