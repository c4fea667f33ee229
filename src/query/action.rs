//! The statement kind a query compiles to.

/// What shape of statement the query renders.
///
/// Aggregate variants carry no payload; they consume the first selected
/// field as the aggregate argument, falling back to `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `SELECT [DISTINCT] … FROM`
    Select { distinct: bool },
    /// `DELETE FROM`
    Delete,
    /// `INSERT INTO`
    Insert,
    /// `UPDATE`
    Update,
    /// `SELECT count(…) FROM`
    Count,
    /// `SELECT max(…) FROM`
    Maximum,
    /// `SELECT min(…) FROM`
    Minimum,
    /// `SELECT avg(…) FROM`
    Average,
    /// `SELECT sum(…) FROM`
    Sum,
}

impl Default for Action {
    fn default() -> Self {
        Action::Select { distinct: false }
    }
}
