//! Value type system for Riptide
//!
//! This module provides the normalized representation for any bindable column
//! value ([`StructuredData`]) and the [`Value`] capability trait that lets
//! plain Rust primitives flow into filters and data mappings without the
//! caller naming a concrete variant.
//!
//! ## Types
//!
//! - **`StructuredData`** - Tagged union over null, bool, integer, double,
//!   string, array, and dictionary values
//! - **`Value`** - Capability trait mapping a Rust type to exactly one
//!   `StructuredData` variant, with typed accessors derived from the variant

pub mod structured;
pub mod traits;

pub use structured::StructuredData;
pub use traits::Value;
