//! Thin wrappers over the browser APIs the controllers need.
//!
//! Every function compiles for both targets; on the server they do nothing
//! (or return a neutral value), so components can call them unconditionally
//! from event handlers.

use crate::core::error::{InteractionError, InteractionResult};

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
    }
}

/// Smooth-scroll the window to a vertical document offset.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = top;
    }
}

/// `offsetTop` of the first element matching `selector`, if it exists.
pub fn element_top(selector: &str) -> Option<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        query_html_element(selector).map(|el| el.offset_top() as f64)
    }
    #[cfg(feature = "ssr")]
    {
        let _ = selector;
        None
    }
}

/// Rendered height of the page header.
pub fn header_height() -> InteractionResult<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        query_html_element(".header")
            .map(|el| el.offset_height() as f64)
            .ok_or_else(|| InteractionError::MissingElement(".header".to_string()))
    }
    #[cfg(feature = "ssr")]
    {
        Err(InteractionError::MissingElement(".header".to_string()))
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Current viewport width (`innerWidth`).
pub fn viewport_width() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Milliseconds timestamp for throttling.
pub fn now_ms() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::now()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Set or clear `document.body.style.overflow`.
pub fn set_body_overflow(value: Option<&str>) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(feature = "ssr")]
    {
        let _ = value;
    }
}

/// Append a `<style>` element with `css` to the document head.
///
/// Each call appends a new element.
pub fn append_style(id: &str, css: &str) -> InteractionResult<()> {
    #[cfg(not(feature = "ssr"))]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| InteractionError::MissingElement("document".to_string()))?;
        let head = document
            .head()
            .ok_or_else(|| InteractionError::MissingElement("head".to_string()))?;
        let style = document
            .create_element("style")
            .map_err(|e| InteractionError::Dom(format!("{:?}", e)))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| InteractionError::Dom(format!("{:?}", e)))?;
        Ok(())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (id, css);
        Ok(())
    }
}

/// Content of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", name)).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
    }
    #[cfg(feature = "ssr")]
    {
        let _ = name;
        None
    }
}

#[cfg(not(feature = "ssr"))]
fn query_html_element(selector: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
