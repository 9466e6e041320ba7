use leptos::{html, prelude::*};

use super::{hooks::use_revealed, ui::Reveal};
use crate::{
    content::{About, Skill},
    links::{EXTERNAL_REL, EXTERNAL_TARGET},
    section::SectionId,
    styles::{button_class, skill_bar_style, ButtonSize, ButtonVariant, RevealFrom},
};

#[component]
pub fn AboutSection(
    about: About,
    skills: Vec<Skill>,
    github: String,
    linkedin: String,
) -> impl IntoView {
    let icon_link = button_class(ButtonVariant::Outline, ButtonSize::Icon, "hover:bg-blue-50 text-xl");

    view! {
        <section id=SectionId::About.as_str() class="py-32 px-6 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <Reveal from=RevealFrom::Left>
                        <h2 class="text-5xl font-extrabold mb-6">{about.heading}</h2>
                        {about
                            .paragraphs
                            .into_iter()
                            .map(|p| view! { <p class="text-lg text-gray-600 mb-6">{p}</p> })
                            .collect_view()}
                        <div class="flex gap-4 mt-2">
                            <a
                                href=github
                                target=EXTERNAL_TARGET
                                rel=EXTERNAL_REL
                                aria-label="GitHub"
                                class=icon_link.clone()
                            >
                                <i class="devicon-github-original"></i>
                            </a>
                            <a
                                href=linkedin
                                target=EXTERNAL_TARGET
                                rel=EXTERNAL_REL
                                aria-label="LinkedIn"
                                class=icon_link
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </Reveal>
                    <Reveal from=RevealFrom::Right class="space-y-6">
                        {skills
                            .into_iter()
                            .enumerate()
                            .map(|(index, skill)| view! { <SkillBar skill index /> })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let level = skill.level;

    view! {
        <div>
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center gap-2">
                    <span class="w-5 h-5 text-blue-600" aria-hidden="true">
                        {skill.icon.glyph()}
                    </span>
                    <span class="font-medium">{skill.name}</span>
                </div>
                <span class="text-sm text-gray-500">{format!("{level}%")}</span>
            </div>
            <div node_ref=target class="h-2 bg-gray-100 rounded-full overflow-hidden">
                <div
                    class="h-full bg-[linear-gradient(90deg,#3b82f6_0%,#8b5cf6_100%)] rounded-full"
                    style=move || skill_bar_style(level, revealed.get(), index)
                />
            </div>
        </div>
    }
}
