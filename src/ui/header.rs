//! Sticky header with primary navigation and the mobile menu.

use leptos::html;
use leptos::prelude::*;

use crate::core::HeaderState;
use crate::ui::anchors::NavLink;
use crate::ui::context::{use_interaction_config, use_menu_context};
use crate::ui::cta::CtaButton;

/// Sections reachable from the primary navigation
const NAV_ITEMS: [(&str, &str); 5] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#pricing", "Pricing"),
    ("#impact", "Impact"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let config = use_interaction_config();
    let menu = use_menu_context();
    let header_state = RwSignal::new(HeaderState::Resting);

    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::core::header::StickyHeader;
        use crate::core::timing::{Debounce, TaskHandle, Throttle};
        use crate::ui::dom;
        use wasm_bindgen::JsCast;

        // Sticky header: recomputed on every scroll event unless a throttle is configured
        let sticky = Rc::new(RefCell::new(StickyHeader::new(config.header_threshold)));
        let throttle = Rc::new(RefCell::new(
            config.scroll_throttle_ms.map(|ms| Throttle::new(ms as f64)),
        ));
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let admitted = match throttle.borrow_mut().as_mut() {
                Some(t) => t.try_fire(dom::now_ms()),
                None => true,
            };
            if admitted {
                let next = sticky.borrow_mut().observe(dom::scroll_offset());
                if header_state.get_untracked() != next {
                    header_state.set(next);
                }
            }
        });

        // Close the menu on clicks outside the toggle and the menu
        let click_handle = window_event_listener(leptos::ev::click, move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            let inside_toggle = toggle_ref
                .get_untracked()
                .is_some_and(|el| el.contains(Some(&target)));
            let inside_menu = menu_ref
                .get_untracked()
                .is_some_and(|el| el.contains(Some(&target)));
            menu.apply(
                menu.state
                    .get_untracked()
                    .on_outside_click(inside_toggle, inside_menu),
            );
        });

        // Mobile menu closes past the breakpoint; a configured debounce waits
        // for the resize burst to settle and reads the width once
        let breakpoint = config.menu_breakpoint;
        let apply_resize = move || {
            menu.apply(
                menu.state
                    .get_untracked()
                    .on_resize_with_breakpoint(dom::viewport_width(), breakpoint),
            );
        };
        let debounce = Rc::new(RefCell::new(
            config.resize_debounce_ms.map(|ms| Debounce::new(ms as f64)),
        ));
        let resize_task = TaskHandle::new();
        let pending_task = resize_task.clone();
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            let Some((token, wait_ms)) = debounce
                .borrow_mut()
                .as_mut()
                .map(|d| (d.call(dom::now_ms()), d.wait_ms()))
            else {
                apply_resize();
                return;
            };
            let debounce = debounce.clone();
            let task = pending_task.clone();
            set_timeout(
                move || {
                    let latest = debounce
                        .borrow()
                        .as_ref()
                        .is_some_and(|d| d.is_latest(token));
                    if latest {
                        task.run_if_active(apply_resize);
                    }
                },
                std::time::Duration::from_millis(wait_ms as u64),
            );
        });

        on_cleanup(move || {
            resize_task.cancel();
            scroll_handle.remove();
            click_handle.remove();
            resize_handle.remove();
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = config;
    }

    view! {
        <header class="header" class:scrolled=move || header_state.get().is_scrolled()>
            <div class="container">
                <nav class="nav">
                    <a href="#" class="nav-brand">
                        <span class="logo-mark" aria-hidden="true">"🌱"</span>
                        <span class="logo-text">"Envirie"</span>
                    </a>

                    <ul
                        class="nav-menu"
                        class:active=move || menu.state.get().presentation().menu_active
                        node_ref=menu_ref
                    >
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(href, label)| view! { <NavLink href=href label=label /> })
                            .collect_view()}
                    </ul>

                    <div class="nav-actions">
                        <CtaButton id="signup-btn" class="btn btn--outline btn--sm">
                            "Sign Up Free"
                        </CtaButton>
                        <CtaButton id="demo-btn" class="btn btn--primary btn--sm">
                            "Book a Demo"
                        </CtaButton>
                    </div>

                    <button
                        class="nav-toggle"
                        class:active=move || menu.state.get().presentation().toggle_active
                        node_ref=toggle_ref
                        on:click=move |_| menu.toggle()
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.is_open().to_string()
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
