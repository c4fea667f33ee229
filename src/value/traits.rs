//! The `Value` capability trait.
//!
//! Any primitive that can be bound to a statement parameter implements
//! `Value` by mapping itself to exactly one [`StructuredData`] variant. The
//! typed accessors are provided methods computed solely from that variant, so
//! callers never need to know the concrete source type.

use super::structured::StructuredData;

/// Capability for types that normalize to a single [`StructuredData`] variant.
///
/// # Example
///
/// ```
/// use riptide::Value;
///
/// assert_eq!(42i64.int(), Some(42));
/// assert_eq!(42i64.string(), None);
/// assert_eq!(true.fuzzy_string(), Some("true".to_string()));
/// ```
pub trait Value {
    /// The normalized representation of this value.
    fn structured_data(&self) -> StructuredData;

    /// The integer payload, when the normalized variant is `Integer`.
    fn int(&self) -> Option<i64> {
        self.structured_data().int()
    }

    /// The string payload, when the normalized variant is `String`.
    fn string(&self) -> Option<String> {
        match self.structured_data() {
            StructuredData::String(string) => Some(string),
            _ => None,
        }
    }

    /// The double payload, when the normalized variant is `Double`.
    fn double(&self) -> Option<f64> {
        self.structured_data().double()
    }

    /// Universal string fallback for scalar variants; `None` for null,
    /// arrays, and dictionaries.
    fn fuzzy_string(&self) -> Option<String> {
        self.structured_data().fuzzy_string()
    }
}

impl Value for bool {
    fn structured_data(&self) -> StructuredData {
        StructuredData::Bool(*self)
    }
}

impl Value for i32 {
    fn structured_data(&self) -> StructuredData {
        StructuredData::Integer(i64::from(*self))
    }
}

impl Value for i64 {
    fn structured_data(&self) -> StructuredData {
        StructuredData::Integer(*self)
    }
}

impl Value for f64 {
    fn structured_data(&self) -> StructuredData {
        StructuredData::Double(*self)
    }
}

impl Value for String {
    fn structured_data(&self) -> StructuredData {
        StructuredData::String(self.clone())
    }
}

impl Value for &str {
    fn structured_data(&self) -> StructuredData {
        StructuredData::String((*self).to_string())
    }
}

impl Value for StructuredData {
    fn structured_data(&self) -> StructuredData {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_map_to_one_variant() {
        assert_eq!(true.structured_data(), StructuredData::Bool(true));
        assert_eq!(7i32.structured_data(), StructuredData::Integer(7));
        assert_eq!(7i64.structured_data(), StructuredData::Integer(7));
        assert_eq!(1.5f64.structured_data(), StructuredData::Double(1.5));
        assert_eq!(
            "ok".structured_data(),
            StructuredData::String("ok".to_string())
        );
    }

    #[test]
    fn test_typed_reads_follow_variant() {
        assert_eq!("12".int(), None);
        assert_eq!(12i64.int(), Some(12));
        assert_eq!(12i64.double(), None);
        assert_eq!("hello".string(), Some("hello".to_string()));
    }

    #[test]
    fn test_fuzzy_string_via_trait() {
        assert_eq!(3.5f64.fuzzy_string(), Some("3.5".to_string()));
        assert_eq!(StructuredData::Null.fuzzy_string(), None);
    }
}
