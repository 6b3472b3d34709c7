//! In-page anchor scrolling.
//!
//! Navigation links handle their own clicks through [`NavLink`]; every other
//! `href="#..."` link on the page goes through the delegated listener
//! installed by [`AnchorScroll`]. [`AnchorRoute`] keeps the two apart.

use leptos::ev::MouseEvent;
use leptos::logging::{debug_warn, warn};
use leptos::prelude::*;

use crate::core::scroll::{AnchorRoute, LinkOwner, NAV_LINK_CLASS, ScrollPlan};
use crate::ui::context::{use_interaction_config, use_menu_context};
use crate::ui::dom;

/// Carry out a routed anchor click and return what was done.
pub fn follow_anchor(ev: &MouseEvent, route: &AnchorRoute, clearance: f64) -> ScrollPlan {
    if matches!(route, AnchorRoute::Skip) {
        return route.plan(None, 0.0, clearance);
    }

    let target_top = route.selector().and_then(dom::element_top);
    let header_height = dom::header_height().unwrap_or_else(|e| {
        warn!("Scrolling without header offset: {}", e);
        0.0
    });
    let plan = route.plan(target_top, header_height, clearance);

    if plan.prevent_default {
        ev.prevent_default();
    }
    match plan.scroll_to {
        Some(top) => dom::smooth_scroll_to(top),
        None => debug_warn!("Anchor target {:?} not found", route.selector()),
    }
    plan
}

/// Primary navigation link: scrolls to its section and closes the mobile menu
#[component]
pub fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let menu = use_menu_context();
    let clearance = use_interaction_config().nav_offset;

    let on_click = move |ev: MouseEvent| {
        let route = AnchorRoute::classify(href, LinkOwner::Navigation);
        let plan = follow_anchor(&ev, &route, clearance);
        if plan.close_menu {
            menu.close();
        }
    };

    view! {
        <li>
            <a href=href class=NAV_LINK_CLASS on:click=on_click>
                {label}
            </a>
        </li>
    }
}

/// Installs the delegated smooth-scroll handler for non-navigation anchors
#[component]
pub fn AnchorScroll() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        let clearance = use_interaction_config().nav_offset;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
            else {
                return;
            };

            let href = anchor.get_attribute("href").unwrap_or_default();
            let owner = LinkOwner::from_class_list(&anchor.class_name());
            let route = AnchorRoute::classify(&href, owner);

            // Navigation links are already handled by NavLink
            if matches!(route, AnchorRoute::SmoothScroll { .. }) {
                follow_anchor(&ev, &route, clearance);
            }
        });

        on_cleanup(move || handle.remove());
    }
}
