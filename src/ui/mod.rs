pub mod anchors;
pub mod context;
pub mod cta;
pub mod dom;
pub mod external_link;
pub mod form;
pub mod header;
pub mod pages;
pub mod progress;
pub mod scroll_animate;
pub mod styles;
pub mod tabs;

pub use context::{provide_interaction_config, provide_menu_context};
pub use pages::{LandingPage, NotFoundPage};
pub use styles::SupplementalStyles;
