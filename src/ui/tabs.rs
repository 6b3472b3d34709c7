use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::tabs::{Audience, TabGroup};

/// Button row switching the active audience
#[component]
pub fn AudienceTabs(
    /// Shared tab group state
    group: RwSignal<TabGroup>,
    /// Additional CSS classes for the container
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let container_class = if class.is_empty() {
        "tab-buttons".to_string()
    } else {
        format!("tab-buttons {}", class)
    };

    view! {
        <div class=container_class role="tablist">
            {Audience::ALL.into_iter().map(|audience| {
                let id = audience.panel_id();
                let is_active = Signal::derive(move || group.with(|g| g.is_button_active(id)));

                let on_click = move |_| {
                    group.update(|g| {
                        if let Err(e) = g.activate(id) {
                            warn!("Tab switch ignored: {}", e);
                        }
                    });
                };

                view! {
                    <button
                        class="tab-btn"
                        class:active=move || is_active.get()
                        data-tab=id
                        role="tab"
                        aria-selected=move || is_active.get().to_string()
                        aria-controls=id
                        on:click=on_click
                    >
                        {audience.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Content panel shown while its audience is active
#[component]
pub fn AudiencePanel(
    audience: Audience,
    group: RwSignal<TabGroup>,
    children: Children,
) -> impl IntoView {
    let id = audience.panel_id();
    let is_active = Signal::derive(move || group.with(|g| g.is_panel_active(id)));

    view! {
        <div
            class="tab-panel"
            class:active=move || is_active.get()
            id=id
            role="tabpanel"
            aria-hidden=move || (!is_active.get()).to_string()
        >
            {children()}
        </div>
    }
}
