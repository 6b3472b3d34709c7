//! Rate limiting helpers and cancellable task handles
//!
//! # Overview
//!
//! - [`Throttle`]: admit at most one call per `limit` window
//! - [`Debounce`]: run only the last call of a burst, after `wait` of quiet
//! - [`TaskHandle`]: shared flag that lets a pending timer or animation frame
//!   find out its owner is gone
//!
//! Throttle and debounce take timestamps in milliseconds from the caller
//! (`performance.now()` in the browser, anything monotonic in tests) instead
//! of reading a clock themselves, so they behave identically under wasm.
//!
//! Neither throttle nor debounce is wired by default; the sticky header uses
//! a [`Throttle`] only when a throttle interval is configured, and the mobile
//! menu debounces resizes only when a debounce interval is configured.
//!
//! # Usage Example
//!
//! ```rust
//! use envirie_landing::core::timing::Throttle;
//!
//! let mut throttle = Throttle::new(100.0);
//! assert!(throttle.try_fire(0.0));
//! assert!(!throttle.try_fire(50.0));
//! assert!(throttle.try_fire(100.0));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Leading-edge throttle
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            blocked_until: None,
        }
    }

    /// Returns `true` if the call at `now` should run.
    ///
    /// The first call always runs; later calls are dropped until `limit`
    /// has elapsed since the last admitted one.
    pub fn try_fire(&mut self, now: f64) -> bool {
        match self.blocked_until {
            Some(until) if now < until => false,
            _ => {
                self.blocked_until = Some(now + self.limit_ms);
                true
            }
        }
    }

    /// Reset the throttle state
    pub fn reset(&mut self) {
        self.blocked_until = None;
    }

    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }
}

/// Trailing-edge debounce
///
/// Each [`call`](Debounce::call) returns a token. The scheduled callback
/// checks [`is_due`](Debounce::is_due) with its token when its timer fires;
/// only the most recent token is ever due.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    generation: u64,
    last_call: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            generation: 0,
            last_call: None,
        }
    }

    /// Register a call at `now`, superseding any earlier pending call.
    pub fn call(&mut self, now: f64) -> u64 {
        self.generation += 1;
        self.last_call = Some(now);
        self.generation
    }

    pub fn is_due(&self, token: u64, now: f64) -> bool {
        token == self.generation
            && self
                .last_call
                .is_some_and(|last| now - last >= self.wait_ms)
    }

    /// Whether `token` belongs to the most recent call.
    ///
    /// For callers whose timer already waited the full period.
    pub fn is_latest(&self, token: u64) -> bool {
        token == self.generation
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

/// Cancellation flag shared between a scheduled callback and its owner
#[derive(Debug, Clone)]
pub struct TaskHandle {
    active: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Run `f` only if the handle has not been cancelled.
    pub fn run_if_active<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_active().then(f)
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}
