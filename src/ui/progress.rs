//! Decorative progress bar on the hero card.

use leptos::prelude::*;

use crate::core::timing::TaskHandle;

/// Progress bar that fills to 75% once mounted
///
/// The animation starts after a fixed delay and then advances one step per
/// animation frame. Unmounting cancels any pending frame.
#[component]
pub fn ProgressBar(#[prop(default = "Monthly goal")] label: &'static str) -> impl IntoView {
    let width = RwSignal::new(0.0_f64);
    let handle = TaskHandle::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::progress::{PROGRESS_START_DELAY_MS, ProgressAnimation};
        use std::time::Duration;

        let start_handle = handle.clone();
        // No tracked reads, so this runs once after mount
        Effect::new(move |_| {
            let frame_handle = start_handle.clone();
            set_timeout(
                move || run_frame(ProgressAnimation::new(), width, frame_handle),
                Duration::from_millis(PROGRESS_START_DELAY_MS as u64),
            );
        });
    }

    on_cleanup(move || handle.cancel());

    view! {
        <div class="progress">
            <div class="progress-header">
                <span>{label}</span>
                <span>{move || format!("{:.0}%", width.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", width.get())
                ></div>
            </div>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn run_frame(
    mut animation: crate::core::progress::ProgressAnimation,
    width: RwSignal<f64>,
    handle: TaskHandle,
) {
    if !handle.is_active() {
        return;
    }
    if let Some(next) = animation.step() {
        width.set(next);
        request_animation_frame(move || run_frame(animation, width, handle));
    }
}
