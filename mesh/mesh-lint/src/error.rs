//! Error types for lint analysis.

use thiserror::Error;

use crate::checks::CheckKind;

/// Result type for lint operations.
pub type LintResult<T> = Result<T, LintError>;

/// Errors that can occur while running lint checks.
///
/// Nothing here is fatal to the host: a precondition failure aborts the
/// requested action without mutating selection or stored watcher state, and
/// an adapter query failure degrades a single check to skipped for that run.
#[derive(Debug, Error)]
pub enum LintError {
    /// The action's preconditions do not hold (no editable mesh, wrong mode).
    #[error("precondition failed: {message}")]
    Precondition {
        /// Description of the failed precondition.
        message: String,
    },

    /// A check predicate could not complete its mesh queries.
    #[error("{check} check could not query the mesh: {message}")]
    AdapterQuery {
        /// Label of the check that failed.
        check: &'static str,
        /// Description of the failed query.
        message: String,
    },
}

impl LintError {
    /// Create a precondition failure.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create an adapter query failure for one check.
    #[must_use]
    pub fn adapter_query(check: CheckKind, message: impl Into<String>) -> Self {
        Self::AdapterQuery {
            check: check.label(),
            message: message.into(),
        }
    }
}
