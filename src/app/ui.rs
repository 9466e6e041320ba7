use leptos::{html, prelude::*};

use super::hooks::use_revealed;
use crate::styles::{
    badge_class, button_class, card_class, reveal_style, ButtonSize, ButtonVariant, RevealFrom,
};

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, &class)>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=card_class(&class)>{children()}</div> }
}

#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=badge_class(&class)>{children()}</span> }
}

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);

    view! {
        <div node_ref=target class=class style=move || reveal_style(revealed.get(), from, delay_ms)>
            {children()}
        </div>
    }
}
