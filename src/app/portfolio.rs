use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{
    about::AboutSection,
    contact::{ContactSection, Footer},
    hero::HeroSection,
    hooks::{use_active_section, use_hero_parallax},
    nav::NavBar,
    projects::ProjectsSection,
};
use crate::{
    content::{site_content, SiteContent},
    section::SectionRegistry,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content=content.clone() /> }),
        Err(err) => {
            log::error!("couldn't load site content: {err}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex items-center justify-center text-gray-600">
                    <p>"This page is temporarily unavailable."</p>
                </main>
            })
        }
    }
}

#[component]
fn Portfolio(content: SiteContent) -> impl IntoView {
    let registry = SectionRegistry::default();
    let active = use_active_section(registry.clone());
    let parallax = use_hero_parallax();

    let SiteContent {
        owner,
        brand,
        email,
        resume,
        scheduling_url,
        github,
        linkedin,
        hero,
        projects,
        about,
        skills,
        contact,
    } = content;

    view! {
        <Title text=owner.clone() />
        <div class="min-h-screen bg-[#FAFAF9] text-gray-900">
            <NavBar registry active brand email=email.clone() />
            <HeroSection hero resume parallax />
            <ProjectsSection projects />
            <AboutSection about skills github linkedin />
            <ContactSection contact email scheduling_url />
            <Footer owner />
        </div>
    }
}
