//! Mobile menu state.
//!
//! The open marker on the menu, the active marker on the toggle and the body
//! scroll lock are all derived from one [`MenuState`] by
//! [`MenuState::presentation`], so they cannot drift apart.

/// Viewport width above which the mobile menu is force-closed
pub const MENU_BREAKPOINT: f64 = 768.0;

/// Marker class shared by the menu and the toggle
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Everything the page shows for a menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuPresentation {
    pub menu_active: bool,
    pub toggle_active: bool,
    /// Value for `body.style.overflow`; `None` clears the property
    pub body_overflow: Option<&'static str>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }

    /// Document-level click: close unless it landed on the toggle or the menu.
    pub fn on_outside_click(self, inside_toggle: bool, inside_menu: bool) -> Self {
        if inside_toggle || inside_menu {
            self
        } else {
            self.close()
        }
    }

    pub fn on_resize(self, viewport_width: f64) -> Self {
        self.on_resize_with_breakpoint(viewport_width, MENU_BREAKPOINT)
    }

    pub fn on_resize_with_breakpoint(self, viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width > breakpoint {
            self.close()
        } else {
            self
        }
    }

    pub fn presentation(&self) -> MenuPresentation {
        let open = self.is_open();
        MenuPresentation {
            menu_active: open,
            toggle_active: open,
            body_overflow: open.then_some("hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(state: MenuState) {
        let p = state.presentation();
        assert_eq!(p.menu_active, p.toggle_active);
        assert_eq!(p.menu_active, p.body_overflow.is_some());
    }

    #[test]
    fn test_toggle_flips_both_markers_and_lock() {
        let open = MenuState::Closed.toggle();
        assert_eq!(
            open.presentation(),
            MenuPresentation {
                menu_active: true,
                toggle_active: true,
                body_overflow: Some("hidden"),
            }
        );
        let closed = open.toggle();
        assert_eq!(closed.presentation().body_overflow, None);
    }

    #[test]
    fn test_outside_click() {
        let open = MenuState::Open;
        assert_eq!(open.on_outside_click(true, false), MenuState::Open);
        assert_eq!(open.on_outside_click(false, true), MenuState::Open);
        assert_eq!(open.on_outside_click(false, false), MenuState::Closed);
    }

    #[test]
    fn test_resize_above_breakpoint_force_closes() {
        assert_eq!(MenuState::Open.on_resize(768.0), MenuState::Open);
        assert_eq!(MenuState::Open.on_resize(769.0), MenuState::Closed);
        assert_eq!(MenuState::Closed.on_resize(1024.0), MenuState::Closed);
    }

    #[test]
    fn test_markers_and_lock_agree_after_any_transition() {
        let mut state = MenuState::default();
        let steps: [fn(MenuState) -> MenuState; 6] = [
            MenuState::toggle,
            |s| s.on_outside_click(false, true),
            |s| s.on_resize(500.0),
            |s| s.on_outside_click(false, false),
            MenuState::toggle,
            |s| s.on_resize(1200.0),
        ];
        for step in steps {
            state = step(state);
            assert_consistent(state);
        }
        assert_eq!(state, MenuState::Closed);
    }
}
