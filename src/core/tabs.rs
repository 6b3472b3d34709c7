//! Tab group state for the pricing audience switcher.

use derive_more::Display;

use crate::core::error::{InteractionError, InteractionResult};

/// The two pricing audiences shown on the landing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Audience {
    #[display("individual")]
    Individual,
    #[display("enterprise")]
    Enterprise,
}

impl Audience {
    pub const ALL: [Audience; 2] = [Audience::Individual, Audience::Enterprise];

    /// Panel id and `data-tab` value
    pub fn panel_id(&self) -> &'static str {
        match self {
            Audience::Individual => "individual",
            Audience::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::Individual => "For Individuals",
            Audience::Enterprise => "For Enterprises",
        }
    }
}

/// A tab button and the panel id it declares as its target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabButton {
    pub id: String,
    pub target: String,
}

impl TabButton {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }
}

/// Result of activating a button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    pub button: String,
    /// `None` when no panel matches the button's target
    pub panel: Option<String>,
}

/// A fixed set of buttons and panels with at most one active pair
#[derive(Clone, Debug, Default)]
pub struct TabGroup {
    buttons: Vec<TabButton>,
    panels: Vec<String>,
    active_button: Option<usize>,
    active_panel: Option<usize>,
}

impl TabGroup {
    pub fn new(buttons: Vec<TabButton>, panels: Vec<String>) -> Self {
        Self {
            buttons,
            panels,
            active_button: None,
            active_panel: None,
        }
    }

    /// The landing page's audience group, with the individual pair active
    pub fn audiences() -> Self {
        let buttons = Audience::ALL
            .iter()
            .map(|a| TabButton::new(a.panel_id(), a.panel_id()))
            .collect();
        let panels = Audience::ALL
            .iter()
            .map(|a| a.panel_id().to_string())
            .collect();
        let mut group = Self::new(buttons, panels);
        // Both ids exist in the group built above
        let _ = group.activate(Audience::Individual.panel_id());
        group
    }

    /// Clear every marker, then mark the clicked button and its panel.
    pub fn activate(&mut self, button_id: &str) -> InteractionResult<TabSelection> {
        let index = self
            .buttons
            .iter()
            .position(|b| b.id == button_id)
            .ok_or_else(|| InteractionError::UnknownTab(button_id.to_string()))?;

        self.active_button = None;
        self.active_panel = None;

        self.active_button = Some(index);
        let target = &self.buttons[index].target;
        self.active_panel = self.panels.iter().position(|p| p == target);

        Ok(TabSelection {
            button: button_id.to_string(),
            panel: self.active_panel.map(|i| self.panels[i].clone()),
        })
    }

    pub fn active_button(&self) -> Option<&str> {
        self.active_button.map(|i| self.buttons[i].id.as_str())
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.map(|i| self.panels[i].as_str())
    }

    pub fn is_button_active(&self, button_id: &str) -> bool {
        self.active_button() == Some(button_id)
    }

    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        self.active_panel() == Some(panel_id)
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }
}
