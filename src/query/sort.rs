//! Sort directives.

use super::QueryField;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An ordering directive over one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: QueryField,
    pub direction: Direction,
}

impl Sort {
    pub fn new(field: impl Into<QueryField>, direction: Direction) -> Self {
        Sort {
            field: field.into(),
            direction,
        }
    }
}
