//! # Riptide
//!
//! Query-compilation and CRUD-orchestration core for a SQL ORM.
//!
//! Riptide translates a structured, type-safe [`Query`] into SQL statement
//! text with an ordered positional parameter list, and sequences
//! create/update/delete operations through lifecycle hooks, timestamp
//! stamping, and soft-delete substitution. Transport, pooling, row
//! decoding, migrations, and relations are collaborator seams, not part of
//! this crate.
//!
//! ```
//! use riptide::{Comparison, Filter, Query, SqlSerializer, StructuredData};
//!
//! let query = Query::new("users").filter(Filter::compare(
//!     "age",
//!     Comparison::GreaterThan,
//!     18,
//! ));
//! let compiled = SqlSerializer::new(&query).compile();
//! assert_eq!(compiled.statement, "SELECT * FROM users WHERE age > ?;");
//! assert_eq!(compiled.parameters, vec![StructuredData::Integer(18)]);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod executor;
pub mod model;
pub mod query;
pub mod sql;
pub mod value;

pub use config::DatabaseConfig;
pub use database::{Database, OperationStage};
pub use error::OperationError;
pub use executor::{Backend, Connection};
pub use model::{Model, ModelBehavior, ModelEvent, SoftDelete, Timestamps};
pub use query::{
    Action, Comparison, DataMap, Direction, Filter, Limit, Offset, Operation, Query, QueryField,
    Scope, Sort, Union, UnionOperation,
};
pub use sql::{CompiledStatement, SqlSerializer};
pub use value::{StructuredData, Value};
