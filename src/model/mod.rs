//! Model traits and optional capabilities.
//!
//! A [`Model`] is an in-memory row representation. It names its entity and
//! identity column, exposes its identity value, and encodes itself to the
//! ordered field mapping used by insert and update data clauses.
//!
//! Capabilities are opted into statically at the impl point, never through
//! runtime type tests: a model that keeps timestamps implements
//! [`Timestamps`] and overrides [`Model::timestamps`] to return itself;
//! likewise [`SoftDelete`] and [`Model::soft_delete`]. The orchestrator
//! only ever asks through these accessors.
//!
//! # Examples
//!
//! ```
//! use riptide::{DataMap, Model, OperationError, QueryField, StructuredData, Value};
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     id: Option<i64>,
//!     name: String,
//! }
//!
//! impl Model for User {
//!     fn entity() -> &'static str {
//!         "users"
//!     }
//!
//!     fn identity(&self) -> Option<StructuredData> {
//!         self.id.map(|id| id.structured_data())
//!     }
//!
//!     fn encode(&self) -> Result<DataMap, OperationError> {
//!         Ok(vec![(
//!             QueryField::new("name"),
//!             Some(self.name.as_str().structured_data()),
//!         )])
//!     }
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::OperationError;
use crate::executor::Connection;
use crate::query::DataMap;
use crate::value::StructuredData;

/// Lifecycle event delivered to the database-wide hook level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    WillCreate,
    DidCreate,
    WillUpdate,
    DidUpdate,
    WillDelete,
}

/// An in-memory row representation the orchestrator can persist.
pub trait Model: Clone + fmt::Debug + Sized {
    /// Table or collection name this model persists to.
    fn entity() -> &'static str;

    /// Identity column name.
    fn id_field() -> &'static str {
        "id"
    }

    /// The model's identity value, when one is set.
    fn identity(&self) -> Option<StructuredData>;

    /// Encode the model to the ordered field mapping used by insert and
    /// update data clauses.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Encode`] when field data cannot be
    /// produced; the operation aborts before any statement executes.
    fn encode(&self) -> Result<DataMap, OperationError>;

    /// Timestamp capability accessor; override to return `Some(self)` on
    /// types implementing [`Timestamps`].
    fn timestamps(&mut self) -> Option<&mut dyn Timestamps> {
        None
    }

    /// Soft-delete capability accessor; override to return `Some(self)` on
    /// types implementing [`SoftDelete`].
    fn soft_delete(&mut self) -> Option<&mut dyn SoftDelete> {
        None
    }
}

/// Automatic `created_at` / `updated_at` stamping.
pub trait Timestamps {
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);
}

/// Delete-as-update semantics: a deletion stamps `deleted_at` instead of
/// removing the row.
pub trait SoftDelete {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;
    fn set_deleted_at(&mut self, at: DateTime<Utc>);
}

/// Per-model lifecycle hooks.
///
/// Every hook consumes the current model and returns an owned, possibly
/// replaced, model, so pre- and post-hook instances never alias. All
/// defaults are pass-throughs; override only what you need.
///
/// Delete deliberately has no post-hook; the create/update pairs are the
/// only symmetric ones.
pub trait ModelBehavior: Model {
    /// Runs before the insert statement, after the database-wide hook.
    fn will_create(self, _conn: &mut dyn Connection) -> Result<Self, OperationError> {
        Ok(self)
    }

    /// Runs after a successful insert.
    fn did_create(self, _conn: &mut dyn Connection) -> Result<Self, OperationError> {
        Ok(self)
    }

    /// Runs before the update statement, after the database-wide hook.
    fn will_update(self, _conn: &mut dyn Connection) -> Result<Self, OperationError> {
        Ok(self)
    }

    /// Runs after a successful update.
    fn did_update(self, _conn: &mut dyn Connection) -> Result<Self, OperationError> {
        Ok(self)
    }

    /// Runs before a hard delete.
    fn will_delete(self, _conn: &mut dyn Connection) -> Result<Self, OperationError> {
        Ok(self)
    }
}
