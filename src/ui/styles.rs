use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::styles::{STYLE_ELEMENT_ID, SUPPLEMENTAL_CSS};
use crate::ui::dom;

/// Appends the supplemental marker styles to `<head>` once mounted.
///
/// Mounting it twice appends the block twice; the app mounts it once.
#[component]
pub fn SupplementalStyles() -> impl IntoView {
    Effect::new(move |_| {
        if let Err(e) = dom::append_style(STYLE_ELEMENT_ID, SUPPLEMENTAL_CSS) {
            warn!("Supplemental styles not injected: {}", e);
        }
    });
}
