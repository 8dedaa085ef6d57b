//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// None of them is transient: each one is a violation of the caller's side of
/// the contract and is reported immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Invalid configuration, raised when building an environment.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An action outside of the action space.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
