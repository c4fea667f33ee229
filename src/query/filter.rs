//! Predicate nodes contributing to a WHERE clause.
//!
//! Filters form a recursive tree: leaf comparisons and set-membership tests,
//! plus boolean groups that nest arbitrarily. Rendering lives in
//! [`crate::sql`]; this module is pure data plus construction helpers.

use super::QueryField;
use crate::value::{StructuredData, Value};

/// Binary comparison operator for [`Filter::Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
}

/// Set-membership scope for [`Filter::Subset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    In,
    NotIn,
}

/// Boolean connective for [`Filter::Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    And,
    Or,
}

/// A predicate node.
///
/// Groups are rendered parenthesized at every depth. A group must carry at
/// least one child; construct through [`Filter::group`] which asserts this.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `field {=|!=|>|<} ?`
    Compare(QueryField, Comparison, StructuredData),
    /// `field {IN|NOT IN} (?, …)`
    Subset(QueryField, Scope, Vec<StructuredData>),
    /// `(child {AND|OR} child …)`
    Group(Operation, Vec<Filter>),
}

impl Filter {
    /// A comparison against a single value.
    ///
    /// # Example
    ///
    /// ```
    /// use riptide::{Comparison, Filter};
    ///
    /// let adult = Filter::compare("age", Comparison::GreaterThan, 18);
    /// ```
    pub fn compare(field: impl Into<QueryField>, comparison: Comparison, value: impl Value) -> Self {
        Filter::Compare(field.into(), comparison, value.structured_data())
    }

    /// A set-membership test over the given values, in order.
    pub fn subset<I>(field: impl Into<QueryField>, scope: Scope, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Value,
    {
        Filter::Subset(
            field.into(),
            scope,
            values
                .into_iter()
                .map(|value| value.structured_data())
                .collect(),
        )
    }

    /// A boolean group over one or more child filters.
    pub fn group(operation: Operation, children: Vec<Filter>) -> Self {
        debug_assert!(
            !children.is_empty(),
            "a filter group requires at least one child"
        );
        Filter::Group(operation, children)
    }
}
