//! Error taxonomy for the engine.
//!
//! Three kinds, all local and recoverable:
//! - [`EngineError::Configuration`]: out-of-range construction parameters.
//!   The only fatal path — a session cannot start from a bad configuration.
//! - [`EngineError::InvalidOperation`]: a semantically illegal call for the
//!   current state (undo with an empty transcript, investigating yourself,
//!   looking outside the top 3, enacting a value the window doesn't hold).
//! - [`EngineError::Argument`]: wrong arity or an unparseable token for a
//!   command.
//!
//! Operations validate before they mutate, so a returned error never leaves
//! the engine partially updated. The command loop prints the error verbatim
//! and keeps reading.

use thiserror::Error;

/// Unified engine error type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Construction parameter outside the supported range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Semantically illegal call given the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Wrong arity or malformed argument for a command.
    #[error("bad argument: {0}")]
    Argument(String),
}

impl EngineError {
    /// Build a [`EngineError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Build an [`EngineError::InvalidOperation`].
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Build an [`EngineError::Argument`].
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
