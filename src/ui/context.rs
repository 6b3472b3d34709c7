//! Page-wide contexts: interaction settings and the mobile menu state.

use leptos::prelude::*;

use crate::core::{InteractionConfig, MenuState};
use crate::ui::dom;

/// Resolve the interaction settings and provide them to the tree.
///
/// On the server the settings come from the context the router was given;
/// in the browser they are read back from the meta tag the server rendered.
pub fn provide_interaction_config() -> InteractionConfig {
    #[cfg(feature = "ssr")]
    let config = use_context::<InteractionConfig>().unwrap_or_default();

    #[cfg(not(feature = "ssr"))]
    let config = match dom::meta_content(crate::core::config::CONFIG_META_NAME) {
        Some(raw) => InteractionConfig::from_json(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("Falling back to default interaction settings: {}", e);
            InteractionConfig::default()
        }),
        None => InteractionConfig::default(),
    };

    provide_context(config.clone());
    config
}

pub fn use_interaction_config() -> InteractionConfig {
    use_context::<InteractionConfig>().unwrap_or_default()
}

/// Shared mobile menu state
///
/// Navigation links close the menu, the header toggles it, and a single
/// effect mirrors it onto the body scroll lock.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub state: RwSignal<MenuState>,
}

impl MenuContext {
    pub fn toggle(&self) {
        self.state.update(|s| *s = s.toggle());
    }

    pub fn close(&self) {
        if self.state.get_untracked().is_open() {
            self.state.set(MenuState::Closed);
        }
    }

    pub fn apply(&self, next: MenuState) {
        if self.state.get_untracked() != next {
            self.state.set(next);
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }
}

pub fn provide_menu_context() -> MenuContext {
    let ctx = MenuContext {
        state: RwSignal::new(MenuState::Closed),
    };

    // Body scroll lock is rendered from the same state as the markers
    Effect::new(move |_| {
        let presentation = ctx.state.get().presentation();
        dom::set_body_overflow(presentation.body_overflow);
    });

    provide_context(ctx);
    ctx
}

pub fn use_menu_context() -> MenuContext {
    use_context::<MenuContext>().expect("MenuContext should be provided")
}
