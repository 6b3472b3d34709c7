//! Interaction settings and server configuration.
//!
//! [`InteractionConfig`] is shared by server and browser: the server loads it
//! from environment variables (after `dotenvy::dotenv()`) and embeds it in the
//! page as JSON under a `<meta name="envirie-interactions">` tag, and the
//! hydrated client parses it back with [`InteractionConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::core::error::{InteractionError, InteractionResult};
use crate::core::header::SCROLL_THRESHOLD;
use crate::core::menu::MENU_BREAKPOINT;
use crate::core::scroll::HEADER_CLEARANCE;

/// Name of the meta tag carrying the serialized config
pub const CONFIG_META_NAME: &str = "envirie-interactions";

pub const ENV_SCROLL_ANIMATIONS: &str = "ENVIRIE_SCROLL_ANIMATIONS";
pub const ENV_SCROLL_THROTTLE_MS: &str = "ENVIRIE_SCROLL_THROTTLE_MS";
pub const ENV_RESIZE_DEBOUNCE_MS: &str = "ENVIRIE_RESIZE_DEBOUNCE_MS";
pub const ENV_HEADER_THRESHOLD: &str = "ENVIRIE_HEADER_THRESHOLD";
pub const ENV_MENU_BREAKPOINT: &str = "ENVIRIE_MENU_BREAKPOINT";
pub const ENV_NAV_OFFSET: &str = "ENVIRIE_NAV_OFFSET";

/// Behavior switches for the landing page controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Animate cards as they enter the viewport
    pub scroll_animations: bool,
    /// Throttle window for the sticky header scroll handler; `None` handles every event
    pub scroll_throttle_ms: Option<u32>,
    /// Quiet period before the mobile menu reacts to a resize; `None` reacts immediately
    pub resize_debounce_ms: Option<u32>,
    /// Scroll offset in px past which the header is marked scrolled
    pub header_threshold: f64,
    /// Viewport width in px above which the mobile menu closes itself
    pub menu_breakpoint: f64,
    /// Gap in px left between the header and a scrolled-to section
    pub nav_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_animations: false,
            scroll_throttle_ms: None,
            resize_debounce_ms: None,
            header_threshold: SCROLL_THRESHOLD,
            menu_breakpoint: MENU_BREAKPOINT,
            nav_offset: HEADER_CLEARANCE,
        }
    }
}

impl InteractionConfig {
    /// Build from a variable lookup.
    ///
    /// Unset variables keep their defaults. A malformed variable also keeps
    /// its default and is reported in the returned list; the other keys are
    /// unaffected.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<InteractionError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        let read = |key: &'static str| lookup(key).map(|raw| (key, raw));

        if let Some((key, raw)) = read(ENV_SCROLL_ANIMATIONS) {
            apply(parse_flag(key, &raw), &mut config.scroll_animations, &mut errors);
        }
        if let Some((key, raw)) = read(ENV_SCROLL_THROTTLE_MS) {
            apply(parse_interval(key, &raw), &mut config.scroll_throttle_ms, &mut errors);
        }
        if let Some((key, raw)) = read(ENV_RESIZE_DEBOUNCE_MS) {
            apply(parse_interval(key, &raw), &mut config.resize_debounce_ms, &mut errors);
        }
        if let Some((key, raw)) = read(ENV_HEADER_THRESHOLD) {
            apply(parse_pixels(key, &raw), &mut config.header_threshold, &mut errors);
        }
        if let Some((key, raw)) = read(ENV_MENU_BREAKPOINT) {
            apply(parse_pixels(key, &raw), &mut config.menu_breakpoint, &mut errors);
        }
        if let Some((key, raw)) = read(ENV_NAV_OFFSET) {
            apply(parse_pixels(key, &raw), &mut config.nav_offset, &mut errors);
        }

        (config, errors)
    }

    pub fn from_json(raw: &str) -> InteractionResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and bools; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Store a parsed value, or record the error and leave the default in place
fn apply<T>(parsed: InteractionResult<T>, slot: &mut T, errors: &mut Vec<InteractionError>) {
    match parsed {
        Ok(value) => *slot = value,
        Err(e) => errors.push(e),
    }
}

fn invalid(key: &str, reason: impl ToString) -> InteractionError {
    InteractionError::InvalidConfig {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_flag(key: &str, raw: &str) -> InteractionResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(invalid(key, format!("expected a boolean, got {:?}", other))),
    }
}

/// Milliseconds; zero turns the feature off
fn parse_interval(key: &str, raw: &str) -> InteractionResult<Option<u32>> {
    let ms = raw.trim().parse::<u32>().map_err(|e| invalid(key, e))?;
    Ok((ms > 0).then_some(ms))
}

fn parse_pixels(key: &str, raw: &str) -> InteractionResult<f64> {
    let px = raw.trim().parse::<f64>().map_err(|e| invalid(key, e))?;
    if px.is_finite() && px >= 0.0 {
        Ok(px)
    } else {
        Err(invalid(key, format!("expected a non-negative pixel value, got {}", px)))
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub interactions: InteractionConfig,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Each malformed value is logged and replaced by its own default.
    pub fn from_env() -> Self {
        let (interactions, errors) =
            InteractionConfig::from_lookup(|key| std::env::var(key).ok());
        for e in errors {
            tracing::warn!("Ignoring interaction setting: {}", e);
        }
        Self { interactions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn load(pairs: &[(&str, &str)]) -> InteractionConfig {
        let (config, errors) = InteractionConfig::from_lookup(lookup_from(pairs));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        config
    }

    #[test]
    fn test_defaults_keep_optional_features_off() {
        let config = load(&[]);
        assert_eq!(config, InteractionConfig::default());
        assert!(!config.scroll_animations);
        assert_eq!(config.scroll_throttle_ms, None);
        assert_eq!(config.resize_debounce_ms, None);
        assert_eq!(config.header_threshold, 50.0);
        assert_eq!(config.menu_breakpoint, 768.0);
        assert_eq!(config.nav_offset, 20.0);
    }

    #[test]
    fn test_env_values() {
        let config = load(&[
            (ENV_SCROLL_ANIMATIONS, "TRUE"),
            (ENV_SCROLL_THROTTLE_MS, "100"),
            (ENV_RESIZE_DEBOUNCE_MS, " 150 "),
        ]);
        assert!(config.scroll_animations);
        assert_eq!(config.scroll_throttle_ms, Some(100));
        assert_eq!(config.resize_debounce_ms, Some(150));

        let zero = load(&[(ENV_SCROLL_THROTTLE_MS, "0"), (ENV_RESIZE_DEBOUNCE_MS, "0")]);
        assert_eq!(zero.scroll_throttle_ms, None);
        assert_eq!(zero.resize_debounce_ms, None);
    }

    #[test]
    fn test_layout_values_from_env() {
        let config = load(&[
            (ENV_HEADER_THRESHOLD, "80"),
            (ENV_MENU_BREAKPOINT, "1024.5"),
            (ENV_NAV_OFFSET, "0"),
        ]);
        assert_eq!(config.header_threshold, 80.0);
        assert_eq!(config.menu_breakpoint, 1024.5);
        assert_eq!(config.nav_offset, 0.0);
    }

    #[test]
    fn test_malformed_value_only_resets_its_own_key() {
        let (config, errors) = InteractionConfig::from_lookup(lookup_from(&[
            (ENV_SCROLL_ANIMATIONS, "maybe"),
            (ENV_SCROLL_THROTTLE_MS, "100"),
            (ENV_MENU_BREAKPOINT, "900"),
        ]));

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            InteractionError::InvalidConfig { key, .. } if key == ENV_SCROLL_ANIMATIONS
        ));
        assert!(!config.scroll_animations);
        assert_eq!(config.scroll_throttle_ms, Some(100));
        assert_eq!(config.menu_breakpoint, 900.0);
    }

    #[test]
    fn test_malformed_numbers_are_reported_per_key() {
        let (config, errors) = InteractionConfig::from_lookup(lookup_from(&[
            (ENV_SCROLL_THROTTLE_MS, "-5"),
            (ENV_HEADER_THRESHOLD, "-1"),
            (ENV_NAV_OFFSET, "NaN"),
            (ENV_RESIZE_DEBOUNCE_MS, "200"),
        ]));

        let keys: Vec<_> = errors
            .iter()
            .map(|e| match e {
                InteractionError::InvalidConfig { key, .. } => key.as_str(),
                other => panic!("unexpected error {:?}", other),
            })
            .collect();
        assert_eq!(
            keys,
            vec![ENV_SCROLL_THROTTLE_MS, ENV_HEADER_THRESHOLD, ENV_NAV_OFFSET]
        );

        let defaults = InteractionConfig::default();
        assert_eq!(config.scroll_throttle_ms, defaults.scroll_throttle_ms);
        assert_eq!(config.header_threshold, defaults.header_threshold);
        assert_eq!(config.nav_offset, defaults.nav_offset);
        assert_eq!(config.resize_debounce_ms, Some(200));
    }

    #[test]
    fn test_json_meta_round_trip_and_partial_payload() {
        let config = InteractionConfig {
            scroll_animations: true,
            ..Default::default()
        };
        assert_eq!(InteractionConfig::from_json(&config.to_json()).unwrap(), config);

        let partial = InteractionConfig::from_json(r#"{"scroll_throttle_ms":250}"#).unwrap();
        assert_eq!(partial.scroll_throttle_ms, Some(250));
        assert!(!partial.scroll_animations);

        assert!(InteractionConfig::from_json("not json").is_err());
    }
}
