//! Query intermediate representation.
//!
//! A [`Query`] is pure data: an entity name, exactly one [`Action`], plus
//! ordered field, filter, sort, and union lists, optional pagination, and an
//! optional data mapping for inserts and updates. Nothing here renders SQL;
//! the [`crate::sql`] module compiles a populated query into statement text
//! and an ordered parameter list.
//!
//! # Examples
//!
//! ```
//! use riptide::{Comparison, Direction, Filter, Query};
//!
//! let query = Query::new("users")
//!     .filter(Filter::compare("age", Comparison::GreaterThan, 18))
//!     .sort("name", Direction::Ascending)
//!     .limit(10);
//!
//! assert_eq!(query.entity, "users");
//! assert_eq!(query.filters.len(), 1);
//! ```

use std::fmt;

use crate::value::StructuredData;

pub mod action;
pub mod filter;
pub mod page;
pub mod sort;
pub mod union;

#[doc(inline)]
pub use action::Action;
#[doc(inline)]
pub use filter::{Comparison, Filter, Operation, Scope};
#[doc(inline)]
pub use page::{Limit, Offset};
#[doc(inline)]
pub use sort::{Direction, Sort};
#[doc(inline)]
pub use union::{Union, UnionOperation};

/// A column reference: an optional owning entity plus the field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryField {
    /// Entity the field belongs to, when qualification is needed (joins).
    pub entity: Option<String>,
    /// The column name.
    pub name: String,
}

impl QueryField {
    /// An unqualified field.
    pub fn new(name: impl Into<String>) -> Self {
        QueryField {
            entity: None,
            name: name.into(),
        }
    }

    /// A field qualified by its entity, rendered as `entity.name`.
    pub fn qualified(entity: impl Into<String>, name: impl Into<String>) -> Self {
        QueryField {
            entity: Some(entity.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => write!(f, "{}.{}", entity, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for QueryField {
    fn from(name: &str) -> Self {
        QueryField::new(name)
    }
}

impl From<String> for QueryField {
    fn from(name: String) -> Self {
        QueryField::new(name)
    }
}

/// Ordered field-to-value mapping for insert and update data clauses.
///
/// Order is significant (it becomes column order in the rendered statement).
/// An entry with `None` is an explicit SQL `NULL`; a field absent from the
/// mapping is simply not written.
pub type DataMap = Vec<(QueryField, Option<StructuredData>)>;

/// A structured, self-describing query against one entity.
///
/// Holds exactly one [`Action`] at any time; setting a new action replaces
/// the previous one. Top-level filters are implicitly conjunctive regardless
/// of any group logic nested inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table or collection name the query targets.
    pub entity: String,
    /// The statement kind this query compiles to.
    pub action: Action,
    /// Ordered field selection; empty means `*` for selects.
    pub fields: Vec<QueryField>,
    /// Top-level predicates, always joined with `AND`.
    pub filters: Vec<Filter>,
    /// Ordered sort directives.
    pub sorts: Vec<Sort>,
    /// Join specifications.
    pub unions: Vec<Union>,
    /// Row cap; a count of 0 omits the clause.
    pub limit: Option<Limit>,
    /// Row skip; a count of 0 omits the clause.
    pub offset: Option<Offset>,
    /// Data mapping for insert/update actions.
    pub data: Option<DataMap>,
}

impl Query {
    /// A `SELECT * FROM entity` query to build on.
    pub fn new(entity: impl Into<String>) -> Self {
        Query {
            entity: entity.into(),
            action: Action::Select { distinct: false },
            fields: Vec::new(),
            filters: Vec::new(),
            sorts: Vec::new(),
            unions: Vec::new(),
            limit: None,
            offset: None,
            data: None,
        }
    }

    /// Replace the action. A query carries exactly one.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Append a field to the selection list.
    pub fn field(mut self, field: impl Into<QueryField>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append a top-level filter. Top-level filters are ANDed.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append a sort directive.
    pub fn sort(mut self, field: impl Into<QueryField>, direction: Direction) -> Self {
        self.sorts.push(Sort::new(field, direction));
        self
    }

    /// Append a join specification.
    pub fn join(mut self, union: Union) -> Self {
        self.unions.push(union);
        self
    }

    /// Cap the result set. A limit of 0 omits the clause entirely.
    pub fn limit(mut self, count: u64) -> Self {
        self.limit = Some(Limit::new(count));
        self
    }

    /// Skip leading rows. An offset of 0 omits the clause entirely.
    pub fn offset(mut self, count: u64) -> Self {
        self.offset = Some(Offset::new(count));
        self
    }

    /// Attach the data mapping for an insert or update.
    pub fn with_data(mut self, data: DataMap) -> Self {
        self.data = Some(data);
        self
    }
}
