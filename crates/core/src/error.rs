//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of the state model: a mutation
/// target that is missing, a slot in the wrong state, or input that fails
/// validation before a mutation is attempted. None of these are fatal; a
/// failed mutation leaves the prior store snapshot fully intact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mutation target (slot, pallet, or product id) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The target exists but its state forbids the operation
    /// (e.g. assigning a pallet to an already-occupied slot).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Required input was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
