//! Error types for the RoleLens core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the RoleLens domain layer.
///
/// This provides typed, structured error variants. Transport failures from
/// the generation service deliberately do not appear here: they are caught
/// at the response-generator boundary and converted to display text before
/// they can reach domain code.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RolelensError {
    /// A persona key outside the fixed registry set was supplied.
    ///
    /// This is a programmer or configuration error and should be
    /// propagated loudly rather than masked.
    #[error("Unknown persona: '{key}'")]
    UnknownPersona { key: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RolelensError {
    /// Creates an UnknownPersona error
    pub fn unknown_persona(key: impl Into<String>) -> Self {
        Self::UnknownPersona { key: key.into() }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an UnknownPersona error
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, Self::UnknownPersona { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// A type alias for `Result<T, RolelensError>`.
pub type Result<T> = std::result::Result<T, RolelensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_persona_message_names_the_key() {
        let err = RolelensError::unknown_persona("ceo");
        assert!(err.is_unknown_persona());
        assert_eq!(err.to_string(), "Unknown persona: 'ceo'");
    }

    #[test]
    fn predicates_discriminate_variants() {
        assert!(RolelensError::config("bad secret file").is_config());
        assert!(!RolelensError::internal("oops").is_config());
    }
}
