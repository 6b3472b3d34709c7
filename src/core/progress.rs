//! Frame-stepped progress bar animation.
//!
//! The bar grows from 0 to [`PROGRESS_CEILING`] percent. Each frame adds a
//! fixed increment sized for a 16ms frame so the ceiling is reached after
//! roughly [`PROGRESS_DURATION_MS`].

pub const PROGRESS_CEILING: f64 = 75.0;
pub const PROGRESS_DURATION_MS: f64 = 2000.0;
pub const FRAME_INTERVAL_MS: f64 = 16.0;
pub const PROGRESS_START_DELAY_MS: u32 = 1000;

/// Selector of the animated element
pub const PROGRESS_SELECTOR: &str = ".progress-fill";

/// Width added on every frame
pub fn frame_increment() -> f64 {
    PROGRESS_CEILING / (PROGRESS_DURATION_MS / FRAME_INTERVAL_MS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressAnimation {
    width: f64,
    ceiling: f64,
    increment: f64,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self {
            width: 0.0,
            ceiling: PROGRESS_CEILING,
            increment: frame_increment(),
        }
    }

    /// Advance one frame. Returns the width to render, or `None` once the
    /// ceiling was already reached and no further frame should be scheduled.
    pub fn step(&mut self) -> Option<f64> {
        if self.width < self.ceiling {
            self.width += self.increment;
            Some(self.rendered_width())
        } else {
            None
        }
    }

    /// Width clamped to the ceiling
    pub fn rendered_width(&self) -> f64 {
        self.width.min(self.ceiling)
    }

    pub fn is_finished(&self) -> bool {
        self.width >= self.ceiling
    }

    pub fn css_width(&self) -> String {
        format!("{}%", self.rendered_width())
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Rendered width after `elapsed_ms` since the animation was invoked,
    /// assuming one frame every [`FRAME_INTERVAL_MS`] after the start delay.
    pub fn width_at(elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - PROGRESS_START_DELAY_MS as f64;
        if running < 0.0 {
            return 0.0;
        }
        let frames = (running / FRAME_INTERVAL_MS).floor() as usize + 1;
        let mut animation = Self::new();
        for _ in 0..frames {
            if animation.step().is_none() {
                break;
            }
        }
        animation.rendered_width()
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new()
    }
}
