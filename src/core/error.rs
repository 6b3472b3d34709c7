//! Error type shared by the interaction controllers.
//!
//! None of these errors reach the visitor: a missing element is a silent
//! no-op and a bad config falls back to defaults. They exist so the failure
//! can be logged with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractionError {
    /// A tab button id that is not part of the group
    #[error("unknown tab button: {0}")]
    UnknownTab(String),

    /// An element the controller expected in the document is absent
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A configuration value could not be parsed
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// A browser API call returned an exception
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for InteractionError {
    fn from(err: serde_json::Error) -> Self {
        InteractionError::InvalidConfig {
            key: "envirie-interactions".to_string(),
            reason: err.to_string(),
        }
    }
}

pub type InteractionResult<T> = Result<T, InteractionError>;
