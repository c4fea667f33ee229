//! Join specifications.

use super::QueryField;

/// Join flavor; `Default` renders as `INNER JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionOperation {
    Default,
    Left,
    Right,
}

/// A join between the primary entity and another.
///
/// Renders as `{INNER|LEFT|RIGHT} JOIN entity ON foreign_key=other_key`.
/// Keys are usually entity-qualified fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub entity: String,
    pub operation: UnionOperation,
    pub foreign_key: QueryField,
    pub other_key: QueryField,
}

impl Union {
    pub fn new(
        entity: impl Into<String>,
        operation: UnionOperation,
        foreign_key: impl Into<QueryField>,
        other_key: impl Into<QueryField>,
    ) -> Self {
        Union {
            entity: entity.into(),
            operation,
            foreign_key: foreign_key.into(),
            other_key: other_key.into(),
        }
    }
}
