//! Error types for CRUD operations.
//!
//! All errors propagate synchronously to the operation's caller. The core
//! never retries, and a statement that already executed is never rolled
//! back here; callers needing atomicity supply their own transaction scope.

use std::fmt;

/// Failure modes of a CRUD operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Update or delete attempted without a resolvable identity and no
    /// override. Fatal to the operation; no statement is issued.
    IdentityRequired,
    /// The model codec could not produce field data. Aborts before
    /// execution.
    Encode(String),
    /// A lifecycle hook failed. Remaining steps are skipped; a statement
    /// executed before the failing hook stays executed.
    Hook(String),
    /// The connection or driver reported an error while executing the
    /// statement. Terminal, propagated unchanged.
    Execution(String),
    /// A connection could not be acquired from the backend.
    Connection(String),
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::IdentityRequired => {
                write!(f, "No identity was set on the model, it is required for this operation")
            }
            OperationError::Encode(msg) => {
                write!(f, "Model encoding failed: {msg}")
            }
            OperationError::Hook(msg) => {
                write!(f, "Lifecycle hook failed: {msg}")
            }
            OperationError::Execution(msg) => {
                write!(f, "Statement execution failed: {msg}")
            }
            OperationError::Connection(msg) => {
                write!(f, "Connection error: {msg}")
            }
        }
    }
}

impl std::error::Error for OperationError {}
