use leptos::prelude::*;

use super::ui::Button;
use crate::{
    dom::{navigate_to, scroll_to_section},
    links::mailto,
    section::{SectionId, SectionRegistry},
    styles::nav_item_class,
};

#[component]
pub fn NavBar(
    registry: SectionRegistry,
    active: ReadSignal<Option<SectionId>>,
    brand: String,
    email: String,
) -> impl IntoView {
    let href = mailto(&email);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-100">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        on:click=move |_| scroll_to_section(SectionId::Home)
                        class="cursor-pointer select-none text-2xl font-extrabold text-transparent bg-clip-text bg-[linear-gradient(90deg,#2563eb_0%,#7c3aed_100%)]"
                        aria-label="Portfolio home"
                    >
                        {brand}
                    </a>
                    <div class="flex gap-8">
                        {registry
                            .iter()
                            .map(|id| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || nav_item_class(active.get() == Some(id))
                                        on:click=move |_| scroll_to_section(id)
                                    >
                                        {id.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Button class="bg-blue-600 hover:bg-blue-700" on:click=move |_| navigate_to(&href)>
                        <span class="mr-2">"✉"</span>
                        "Get in Touch"
                    </Button>
                </div>
            </div>
        </nav>
    }
}
