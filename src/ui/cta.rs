//! Call-to-action buttons and the alert-based pseudo-modals.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::cta::{CTA_ATTRIBUTE, CtaAction, PricingButtonStyle};
use crate::ui::dom;

/// Present the pseudo-modal for an action.
pub fn present(action: CtaAction) {
    log!("CTA {} triggered", action.intent());
    dom::alert(action.message());
}

/// Button bound to a signup or demo pseudo-modal
///
/// The action is the declared `intent` if given, otherwise looked up from
/// the element `id`. A button with neither does nothing when clicked.
#[component]
pub fn CtaButton(
    /// Element id, also used to look up the action
    #[prop(optional)]
    id: Option<&'static str>,
    /// Explicit action; wins over the id table
    #[prop(optional)]
    intent: Option<CtaAction>,
    #[prop(default = "btn btn--primary")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let action = intent.or_else(|| id.and_then(CtaAction::from_element_id));
    if action.is_none() {
        warn!("CTA button {:?} has no bound action", id);
    }

    view! {
        <button
            type="button"
            id=id
            class=class
            data-cta=action.map(|a| a.intent())
            on:click=move |_| {
                if let Some(action) = action {
                    present(action);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Pricing card button resolved through the label compatibility table
#[component]
pub fn PricingButton(style: PricingButtonStyle, label: &'static str) -> impl IntoView {
    let class = match style {
        PricingButtonStyle::Outline => "btn btn--outline btn--full-width",
        PricingButtonStyle::Primary => "btn btn--primary btn--full-width",
    };
    let intent = CtaAction::from_pricing_label(style, label);

    match intent {
        Some(action) => view! {
            <CtaButton intent=action class=class>{label}</CtaButton>
        }
        .into_any(),
        None => {
            warn!("Pricing label {:?} has no {} mapping", label, CTA_ATTRIBUTE);
            view! { <button type="button" class=class>{label}</button> }.into_any()
        }
    }
}
