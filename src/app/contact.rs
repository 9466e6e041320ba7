use leptos::prelude::*;

use super::ui::{Button, Card, Reveal};
use crate::{
    content::Contact,
    dom::{navigate_to, open_external},
    links::mailto,
    section::SectionId,
    styles::{ButtonSize, ButtonVariant},
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn ContactSection(contact: Contact, email: String, scheduling_url: String) -> impl IntoView {
    let href = mailto(&email);

    view! {
        <section id=SectionId::Contact.as_str() class="py-32 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <Reveal>
                    <h2 class="text-5xl font-extrabold mb-6">{contact.heading}</h2>
                    <p class="text-xl text-gray-600 mb-12">{contact.subheading}</p>
                    <Card class="p-12 bg-white shadow-xl border border-gray-100">
                        <div class="space-y-6">
                            <div class="flex items-center justify-center gap-3 text-2xl font-medium">
                                <span class="text-blue-600">"✉"</span>
                                {email}
                            </div>
                            <div class="flex gap-4 justify-center">
                                <Button
                                    size=ButtonSize::Lg
                                    class="px-8 rounded-xl bg-[linear-gradient(90deg,#2563eb_0%,#7c3aed_100%)] hover:opacity-90"
                                    on:click=move |_| navigate_to(&href)
                                >
                                    <span class="mr-2">"✉"</span>
                                    "Send Email"
                                </Button>
                                <Button
                                    size=ButtonSize::Lg
                                    variant=ButtonVariant::Outline
                                    class="px-8 rounded-xl"
                                    on:click=move |_| open_external(&scheduling_url)
                                >
                                    "Schedule Call"
                                </Button>
                            </div>
                        </div>
                    </Card>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(owner: String) -> impl IntoView {
    view! {
        <footer class="py-12 px-6 bg-white border-t border-gray-100">
            <div class="max-w-7xl mx-auto text-center text-gray-500">
                <p>{format!("© {BUILD_YEAR} Crafted with passion by {owner} (ɔ◔‿◔)ɔ ♥")}</p>
            </div>
        </footer>
    }
}
