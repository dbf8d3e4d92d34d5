//! Error kinds raised by the environments
//!
//! Everything else (wall contact, captures, zero velocities) is ordinary
//! control flow inside `step` and never surfaces as an error.

use thiserror::Error;

/// Errors surfaced through `anyhow::Result` by constructors and `step`.
///
/// Use `err.downcast_ref::<EnvError>()` to tell the kinds apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The action batch has the wrong length or an index outside its
    /// enumerated range. Raised before any state is mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value cannot produce a playable world.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EnvError {
    /// Shorthand for an [`EnvError::InvalidArgument`] with a formatted message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for an [`EnvError::InvalidConfig`] with a formatted message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EnvError::invalid_argument("expected 2 actions, got 3");
        assert_eq!(err.to_string(), "invalid argument: expected 2 actions, got 3");

        let err = EnvError::invalid_config("num_preys must be positive");
        assert_eq!(err.to_string(), "invalid configuration: num_preys must be positive");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = EnvError::invalid_argument("bad").into();
        assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidArgument(_))));
    }
}
