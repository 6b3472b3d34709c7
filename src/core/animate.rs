//! Settings for the viewport-entry card animation.
//!
//! The animation is optional and off unless
//! [`InteractionConfig::scroll_animations`](crate::core::config::InteractionConfig)
//! is set.

/// Cards that get the entry animation
pub const ANIMATABLE_SELECTORS: &str =
    ".feature-card, .step-card, .pricing-card, .stat-card, .testimonial";

/// Class added once a card becomes visible
pub const ANIMATE_CLASS: &str = "animate-in";

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Whether an observer entry should receive the animation class.
/// Cards are never un-animated when they leave the viewport.
pub fn should_animate(is_intersecting: bool, already_animated: bool) -> bool {
    is_intersecting && !already_animated
}
