//! Pagination clauses.
//!
//! A count of 0 means "omit this clause" rather than "return nothing".

/// Maximum number of rows to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub count: u64,
}

impl Limit {
    pub fn new(count: u64) -> Self {
        Limit { count }
    }
}

/// Number of leading rows to skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub count: u64,
}

impl Offset {
    pub fn new(count: u64) -> Self {
        Offset { count }
    }
}
