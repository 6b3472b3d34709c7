//! Viewport-entry animation for landing page cards.

use leptos::prelude::*;

use crate::ui::context::use_interaction_config;

/// Observes the animatable cards and marks them as they scroll into view.
///
/// Renders nothing and does nothing unless scroll animations are enabled in
/// the interaction settings.
#[component]
pub fn ScrollAnimations() -> impl IntoView {
    let enabled = use_interaction_config().scroll_animations;

    #[cfg(not(feature = "ssr"))]
    {
        if enabled {
            Effect::new(move |_| {
                if let Err(e) = observe_cards() {
                    leptos::logging::warn!("Scroll animations unavailable: {}", e);
                }
            });
        }
    }

    #[cfg(feature = "ssr")]
    {
        let _ = enabled;
    }
}

#[cfg(not(feature = "ssr"))]
fn observe_cards() -> crate::core::InteractionResult<()> {
    use crate::core::InteractionError;
    use crate::core::animate::{ANIMATABLE_SELECTORS, ANIMATE_CLASS, ObserverOptions, should_animate};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let dom_err = |e: wasm_bindgen::JsValue| InteractionError::Dom(format!("{:?}", e));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| InteractionError::MissingElement("document".to_string()))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let class_list = target.class_list();
                if should_animate(entry.is_intersecting(), class_list.contains(ANIMATE_CLASS)) {
                    let _ = class_list.add_1(ANIMATE_CLASS);
                }
            }
        },
    );

    let options = ObserverOptions::default();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom_err)?;

    let cards = document
        .query_selector_all(ANIMATABLE_SELECTORS)
        .map_err(dom_err)?;
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&card);
        }
    }

    // The observer lives for the whole page
    callback.forget();
    Ok(())
}
