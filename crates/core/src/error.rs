//! # Error Module
//!
//! Error types for closure-kit. Insufficient funds is NOT an error here:
//! a refused withdrawal is an ordinary [`Outcome`](crate::Outcome).

use thiserror::Error;

/// Core errors.
///
/// Raised only at the edges (constructing a handle, parsing an action).
/// Dispatch itself never fails. Configuration has its own
/// [`ConfigError`](crate::ConfigError).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this error came from an invalid (negative or malformed) amount
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, CoreError::InvalidAmount(_))
    }

    /// Whether this error came from an unrecognized action name
    pub fn is_unknown_action(&self) -> bool {
        matches!(self, CoreError::UnknownAction(_))
    }
}
