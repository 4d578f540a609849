use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{Button, ExternalLink, Footer, Icon, IconKind, Motion, NavBar, Reveal, Section};
use crate::config::{CONFIG, Run};
use crate::scroll_spy::{OverlapPolicy, ScrollSpy};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let spy = ScrollSpy::provide(CONFIG.nav, OverlapPolicy::LastWins);
    spy.listen();

    view! {
        <Title text=format!("{} \u{2013} Experimental Nuclear Physicist", CONFIG.name) />
        <Meta name="description" content=CONFIG.description />
        <main class="font-sans">
            <NavBar brand=CONFIG.name.replace(' ', "\u{00A0}") spy=spy />
            <HeroSection />
            <AboutSection />
            <ResearchSection />
            <PublicationsSection />
            <ContactSection />
            <Footer name=CONFIG.name />
        </main>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <Section
            id="hero"
            class="min-h-screen flex flex-col justify-center items-center bg-gradient-to-br from-black via-gray-900 to-gray-800 text-white"
        >
            <Reveal motion=Motion::FadeUp(50) amount=0.0 duration_ms=800 class="text-center px-4">
                <h1 class="text-5xl md:text-7xl font-bold leading-tight">{CONFIG.name}</h1>
                <p class="mt-4 text-lg md:text-xl text-gray-300">{CONFIG.tagline}</p>

                <Reveal motion=Motion::FadeUp(20) amount=0.0 delay_ms=500 class="mt-8 flex justify-center gap-4">
                    <Button as_child=true href="#publications" class="px-6 py-3 text-lg inline-flex items-center">
                        <Icon kind=IconKind::ArrowRight size=20 class="mr-2" />
                        "View Projects"
                    </Button>
                    <Button
                        as_child=true
                        href="#contact"
                        class="px-6 py-3 text-lg bg-transparent border border-white hover:bg-white/10"
                    >
                        "Contact Me"
                    </Button>
                </Reveal>
            </Reveal>
        </Section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section id="about" class="py-24 bg-white">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 flex flex-col md:flex-row items-center gap-10">
                <Reveal motion=Motion::ScaleIn amount=0.4>
                    <img
                        src=CONFIG.assets.portrait
                        alt=format!("{} portrait", CONFIG.name)
                        class="w-48 h-48 rounded-full object-cover shadow-lg"
                    />
                </Reveal>
                <Reveal motion=Motion::SlideLeft(40) amount=0.4 class="space-y-4 text-lg">
                    <h2 class="text-2xl font-semibold">"About\u{00A0}Me"</h2>
                    {CONFIG.about.iter().map(|paragraph| view! {
                        <p>
                            {paragraph.iter().map(|run| match *run {
                                Run::Plain(text) => text.into_any(),
                                Run::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
                            }).collect_view()}
                        </p>
                    }).collect_view()}
                </Reveal>
            </div>
        </Section>
    }
}

#[component]
fn SectionHeading(#[prop(into)] text: String, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Reveal motion=Motion::FadeUp(20) amount=0.2 duration_ms=500>
            <h2 class=format!("text-3xl font-semibold {}", class)>{text}</h2>
        </Reveal>
    }
}

#[component]
pub fn ResearchSection() -> impl IntoView {
    view! {
        <Section id="research" class="py-24 bg-slate-50">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Research\u{00A0}Interests" class="mb-8 text-center" />
                <div class="grid md:grid-cols-2 gap-8 text-lg">
                    {CONFIG.research.iter().map(|topic| view! {
                        <Reveal motion=Motion::FadeUp(20) amount=0.3 duration_ms=400 class="p-6 bg-white rounded-xl shadow-md">
                            <h3 class="text-xl font-medium mb-2">{topic.title}</h3>
                            <p class="text-sm text-slate-600">{topic.description}</p>
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn PublicationsSection() -> impl IntoView {
    view! {
        <Section id="publications" class="py-24 bg-white">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Selected\u{00A0}Publications" class="mb-8 text-center" />
                <ol class="space-y-6 list-decimal list-inside text-slate-700">
                    {CONFIG.publications.iter().map(|publication| view! {
                        <li>
                            <Reveal motion=Motion::FadeIn amount=0.3 duration_ms=400 class="inline">
                                <ExternalLink href=publication.link class="hover:text-sky-600 underline">
                                    {publication.title}
                                </ExternalLink>
                            </Reveal>
                        </li>
                    }).collect_view()}
                </ol>
            </div>
        </Section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section id="contact" class="py-24 bg-slate-50">
            <div class="max-w-xl mx-auto px-6 text-center space-y-6">
                <SectionHeading text="Contact\u{00A0}Me" />
                <p class="text-lg text-slate-600">{CONFIG.contact_blurb}</p>
                <div class="flex justify-center gap-6 text-slate-700">
                    <a href=CONFIG.contact.mailto() class="hover:text-sky-600" aria-label="Email">
                        <Icon kind=IconKind::Mail size=28 />
                    </a>
                    <ExternalLink href=CONFIG.contact.linkedin class="hover:text-sky-600" label="LinkedIn">
                        <Icon kind=IconKind::Linkedin size=28 />
                    </ExternalLink>
                    <ExternalLink href=CONFIG.contact.github class="hover:text-sky-600" label="GitHub">
                        <Icon kind=IconKind::Github size=28 />
                    </ExternalLink>
                    <ExternalLink href=CONFIG.assets.cv class="hover:text-sky-600 flex items-center" label="CV">
                        <Icon kind=IconKind::File size=28 />
                    </ExternalLink>
                </div>
            </div>
        </Section>
    }
}
