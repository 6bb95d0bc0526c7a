use leptos::prelude::*;

use crate::data::{ProjectStatus, HIGHLIGHTS, MARQUEE_WORDS, PROFILE, PROJECTS, SKILLS};
use crate::typewriter::CARET;

#[component]
fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="mb-16 section-content">
            <p class="mb-3 text-sm text-accent">{format!("// {number}")}</p>
            <h2 class="font-bold text-white text-[clamp(32px,5vw,42px)]">
                {title}
                <span class="text-accent">"."</span>
            </h2>
        </div>
    }
}

#[component]
fn Prompt(command: &'static str) -> impl IntoView {
    view! { <p class="pt-2 text-muted">{format!("$ {command}")}</p> }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative py-32 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-[7.6923%]">
                <SectionHeading number="001" title="About" />
                <div class="bg-[#0a0a0a] border border-white/10">
                    <div class="flex items-center gap-2 px-4 py-3 border-b border-white/10">
                        <div class="w-3 h-3 rounded-full bg-[#FF5F57]"></div>
                        <div class="w-3 h-3 rounded-full bg-[#FEBC2E]"></div>
                        <div class="w-3 h-3 rounded-full bg-[#28C840]"></div>
                        <span class="ml-4 text-sm text-muted">
                            {format!("{}@portfolio:~$", PROFILE.name.to_lowercase())}
                        </span>
                    </div>
                    <div class="p-6 space-y-4 text-[15px] leading-[1.8]">
                        <Prompt command="cat about.txt" />
                        {PROFILE
                            .bio
                            .iter()
                            .map(|line| {
                                view! {
                                    <p class="text-white/80">
                                        <span class="text-accent">"> "</span>
                                        {*line}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <Prompt command="ls interests/" />
                        <div class="flex flex-wrap gap-3">
                            {PROFILE
                                .topics
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="px-3 py-1 text-[13px] text-accent border border-accent/30">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Prompt command="echo $FUN_FACT" />
                        <p class="text-white/60">
                            <span class="text-accent">"> "</span>
                            {format!("\"{}\"", PROFILE.fun_fact)}
                        </p>
                        <p class="pt-2">
                            <span class="text-muted">"$ "</span>
                            <span class="animate-pulse text-accent">{CARET}</span>
                        </p>
                    </div>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-12">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="p-6 bg-[#0a0a0a] border border-white/[0.08] hover:border-accent/30 transition-colors duration-500">
                                    <p class="mb-4 text-2xl text-accent" aria-hidden="true">
                                        {h.glyph}
                                    </p>
                                    <p class="text-sm mb-1 text-muted">{h.label}</p>
                                    <p class="font-sans font-medium text-lg text-white">{h.value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-32 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-[7.6923%]">
                <SectionHeading number="002" title="Arsenal" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .map(|cat| {
                            view! {
                                <div class="p-6 bg-white/5 border border-white/10">
                                    <h3 class="mb-4 text-white font-semibold">{cat.name}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {cat
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="px-3 py-1 text-sm text-white/70 bg-black border border-white/10">
                                                        {*item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Marquee />
        </section>
    }
}

#[component]
fn MarqueeRow(reverse: bool) -> impl IntoView {
    let (track, word_class) = if reverse {
        ("marquee-reverse", "border-accent/15 text-accent")
    } else {
        ("marquee", "border-white/10 text-white/60")
    };
    // rendered twice so the scroll animation can loop seamlessly
    let words = move || {
        let ordered: Vec<&str> = if reverse {
            MARQUEE_WORDS.iter().rev().copied().collect()
        } else {
            MARQUEE_WORDS.to_vec()
        };
        ordered
            .into_iter()
            .map(|w| {
                view! {
                    <span class=format!("inline-block px-5 py-2 mr-4 text-sm border {word_class}")>
                        {w}
                    </span>
                }
            })
            .collect_view()
    };
    view! {
        <div class="overflow-hidden whitespace-nowrap">
            <div class=format!("inline-block {track}")>{words()} {words()}</div>
        </div>
    }
}

#[component]
fn Marquee() -> impl IntoView {
    view! {
        <div class="mt-24 space-y-4">
            <MarqueeRow reverse=false />
            <MarqueeRow reverse=true />
        </div>
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "text-green",
        ProjectStatus::InDevelopment => "text-yellow",
        ProjectStatus::Completed => "text-muted",
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative py-32 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-[7.6923%]">
                <SectionHeading number="003" title="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <article class="p-8 bg-white/5 border border-white/10 hover:border-accent/40 transition-colors duration-300">
                                    <div class="flex items-center justify-between mb-6 text-xs">
                                        <span class="text-accent">{p.category}</span>
                                        <span class=status_class(p.status)>{p.status.label()}</span>
                                    </div>
                                    <h3 class="mb-3 text-xl text-white font-semibold">{p.title}</h3>
                                    <p class="mb-6 font-sans text-white/60 leading-relaxed">
                                        {p.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mb-6">
                                        {p
                                            .tech
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="px-2 py-1 text-xs text-white/70 bg-black">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <p class="text-xs text-muted">{format!("tx: {}", p.hash)}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
