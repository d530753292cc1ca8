//! Error types for settings loading and validation
//!
//! The simulation itself has no error surface; only configuration can be rejected.

use thiserror::Error;

/// Errors produced while loading or validating [`crate::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings JSON could not be parsed or serialized
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
