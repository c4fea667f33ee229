//! Execution collaborators.
//!
//! The core never talks to a wire protocol. It compiles statements and
//! hands them to a [`Connection`], acquired from a [`Backend`] once per
//! CRUD operation and held for the full hook-and-execute sequence. The
//! connection is released on every exit path, including failure, by drop.
//!
//! `Backend` also hosts the database-wide lifecycle hook level; per-model
//! hooks live on [`crate::model::ModelBehavior`].

use crate::error::OperationError;
use crate::model::{Model, ModelEvent};
use crate::value::StructuredData;

/// A live connection capable of executing one compiled statement at a time.
///
/// Implementations wrap the actual driver. Driver failures surface as
/// [`OperationError::Execution`] and are propagated unchanged by the core.
pub trait Connection {
    /// Execute a `?`-placeholder statement with its bound parameters and
    /// return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Execution`] when the driver reports a
    /// failure.
    fn execute(
        &mut self,
        statement: &str,
        parameters: &[StructuredData],
    ) -> Result<u64, OperationError>;
}

/// Supplies connections and observes model lifecycle events.
///
/// One connection is acquired per top-level CRUD operation. The default
/// `model_event` is a pass-through; override it to observe or replace
/// models at the database-wide hook level.
pub trait Backend {
    /// Connection type handed to one CRUD operation.
    type Conn: Connection;

    /// Acquire a connection for the duration of one operation.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Connection`] when acquisition fails.
    fn connection(&self) -> Result<Self::Conn, OperationError>;

    /// Database-wide lifecycle hook.
    ///
    /// Receives the model by value and may return a replacement. Failures
    /// abort the operation's remaining steps.
    fn model_event<M: Model>(
        &self,
        _event: ModelEvent,
        model: M,
        _conn: &mut Self::Conn,
    ) -> Result<M, OperationError> {
        Ok(model)
    }
}
