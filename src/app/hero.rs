use leptos::prelude::*;

use super::ui::Button;
use crate::{
    content::Hero,
    dom::scroll_to_section,
    links::{EXTERNAL_REL, EXTERNAL_TARGET},
    parallax::ParallaxValue,
    section::SectionId,
    styles::{ButtonSize, ButtonVariant},
};

#[component]
pub fn HeroSection(hero: Hero, resume: String, parallax: Memo<ParallaxValue>) -> impl IntoView {
    view! {
        <section
            id=SectionId::Home.as_str()
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50 opacity-60" />
            <div class="absolute inset-0">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-400/20 rounded-full blur-3xl" />
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-400/20 rounded-full blur-3xl" />
            </div>
            <div
                class="relative z-10 max-w-5xl mx-auto px-6 text-center"
                style=move || parallax.get().style()
            >
                <h1 class="text-6xl md:text-8xl font-extrabold mb-6 text-transparent bg-clip-text bg-[linear-gradient(90deg,#1e3a8a_0%,#1d4ed8_50%,#5b21b6_100%)]">
                    {hero.title}
                </h1>
                <p class="text-lg md:text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                    {hero.subtitle}
                </p>
                <div class="flex gap-4 justify-center">
                    <Button
                        size=ButtonSize::Lg
                        class="px-8 rounded-xl shadow-sm bg-[linear-gradient(90deg,#2563eb_0%,#7c3aed_100%)] hover:opacity-90"
                        on:click=move |_| scroll_to_section(SectionId::Projects)
                    >
                        "View My Projects"
                    </Button>
                    <a href=resume target=EXTERNAL_TARGET rel=EXTERNAL_REL>
                        <Button
                            size=ButtonSize::Lg
                            variant=ButtonVariant::Outline
                            class="px-8 rounded-xl bg-white border border-gray-200 hover:bg-gray-50"
                        >
                            "Download Resume"
                        </Button>
                    </a>
                </div>
                <div class="mt-20 animate-bounce text-gray-400 text-2xl" aria-hidden="true">
                    "↓"
                </div>
            </div>
        </section>
    }
}
