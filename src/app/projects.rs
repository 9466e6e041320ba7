use leptos::prelude::*;

use super::ui::{Badge, Card, Reveal};
use crate::{
    content::{Project, Projects},
    links::{EXTERNAL_REL, EXTERNAL_TARGET},
    section::SectionId,
};

#[component]
pub fn ProjectsSection(projects: Projects) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-32 px-6">
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-5xl font-extrabold mb-4">{projects.heading}</h2>
                    <p class="text-xl text-gray-600">{projects.subheading}</p>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8 items-stretch">
                    {projects
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay_ms = i as u32 * 50;
                            view! {
                                <Reveal class="flex" delay_ms>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <a
            href=project.link
            target=EXTERNAL_TARGET
            rel=EXTERNAL_REL
            class="block w-full focus:outline-none focus:ring-0 focus-visible:ring-0"
        >
            <Card class="group flex flex-col h-full overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-500 border border-transparent">
                <div class="relative h-64 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title.clone()
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                    <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300 text-white text-6xl drop-shadow-lg">
                        "▶"
                    </div>
                </div>
                <div class="p-6 flex flex-col flex-grow">
                    <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
                    <p class="text-gray-600 mb-4 flex-grow">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mt-auto">
                        {project
                            .tags
                            .into_iter()
                            .map(|tag| view! { <Badge class="bg-blue-100 text-blue-800">{tag}</Badge> })
                            .collect_view()}
                    </div>
                </div>
            </Card>
        </a>
    }
}
