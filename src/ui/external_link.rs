//! Links that would open a new tab, replaced by an explanatory alert.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::external::external_link_message;
use crate::ui::dom;

#[component]
pub fn ExternalLink(
    href: &'static str,
    label: &'static str,
    #[prop(default = "footer-link")]
    class: &'static str,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        dom::alert(&external_link_message(href, label));
    };

    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer" on:click=on_click>
            {label}
        </a>
    }
}
