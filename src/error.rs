//! Error types for the gamification engine
//!
//! Nothing here is fatal to the process: every failure is per-call and
//! recoverable by retrying the user action. Unknown achievement/challenge ids
//! and already-completed guards are deliberately *not* errors; operations
//! treat them as silent no-ops.

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// No user context is available, or the caller does not own the profile.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The persistence collaborator failed. The in-memory profile passed to
    /// the operation is left at its pre-call value.
    #[error("Storage unavailable")]
    StorageUnavailable(#[source] anyhow::Error),

    /// Rejected input (negative award, non-positive delta, malformed
    /// challenge template).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// True when retrying the same user action may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::StorageUnavailable(_))
    }
}
