//! Interaction state and message tables for the landing page.
//!
//! Everything here is plain data and pure transitions; the Leptos components
//! in [`crate::ui`] own the state in signals and render it.

pub mod animate;
pub mod config;
pub mod cta;
pub mod error;
pub mod external;
pub mod form;
pub mod header;
pub mod menu;
pub mod progress;
pub mod scroll;
pub mod styles;
pub mod tabs;
pub mod timing;
#[cfg(test)]
mod tests;

pub use config::InteractionConfig;
pub use cta::{CtaAction, PricingButtonStyle, SignupPlan};
pub use error::{InteractionError, InteractionResult};
pub use form::{FieldEntry, FormKind, SubmitOutcome, ValidationReport};
pub use header::{HeaderState, StickyHeader};
pub use menu::{MenuPresentation, MenuState};
pub use progress::ProgressAnimation;
pub use scroll::{AnchorRoute, LinkOwner, ScrollPlan};
pub use tabs::{Audience, TabGroup};
pub use timing::{Debounce, TaskHandle, Throttle};
