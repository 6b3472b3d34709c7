//! Alert text for links that would open a new browsing context.

/// Selector for links intercepted by the external link handler
pub const EXTERNAL_LINK_SELECTOR: &str = "a[target=\"_blank\"]";

pub fn external_link_message(href: &str, link_text: &str) -> String {
    if href == "#" {
        format!("This would open the {} page in a new tab.", link_text.trim())
    } else {
        format!("This would open an external link: {}", href)
    }
}
