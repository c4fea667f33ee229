//! The `StructuredData` tagged union.
//!
//! `StructuredData` is the single normalized representation for any value
//! that can be bound to a statement parameter or carried in a data mapping.
//! Exactly one variant is active at a time; all typed reads are derived from
//! the variant and never consult external state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalized representation of a bindable column value.
///
/// JSON support is always enabled: `StructuredData` serializes untagged (a
/// `Dictionary` becomes a JSON object, `Null` becomes JSON null, and so on),
/// and lossless conversions to and from `serde_json::Value` are provided.
///
/// # Example
///
/// ```
/// use riptide::StructuredData;
///
/// let age = StructuredData::Integer(30);
/// assert_eq!(age.int(), Some(30));
/// assert_eq!(age.string(), None);
/// assert_eq!(age.fuzzy_string(), Some("30".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuredData {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<StructuredData>),
    Dictionary(BTreeMap<String, StructuredData>),
}

impl StructuredData {
    /// The integer payload, for the `Integer` variant only.
    pub fn int(&self) -> Option<i64> {
        if let StructuredData::Integer(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    /// The string payload, for the `String` variant only.
    pub fn string(&self) -> Option<&str> {
        if let StructuredData::String(string) = self {
            Some(string)
        } else {
            None
        }
    }

    /// The double payload, for the `Double` variant only.
    pub fn double(&self) -> Option<f64> {
        if let StructuredData::Double(double) = self {
            Some(*double)
        } else {
            None
        }
    }

    /// The boolean payload, for the `Bool` variant only.
    pub fn bool_value(&self) -> Option<bool> {
        if let StructuredData::Bool(flag) = self {
            Some(*flag)
        } else {
            None
        }
    }

    /// Universal string fallback for scalar variants.
    ///
    /// Stringifies `Bool`, `Integer`, `Double`, and `String` payloads.
    /// `Null`, `Array`, and `Dictionary` yield `None`.
    pub fn fuzzy_string(&self) -> Option<String> {
        match self {
            StructuredData::Bool(flag) => Some(flag.to_string()),
            StructuredData::Integer(int) => Some(int.to_string()),
            StructuredData::Double(double) => Some(double.to_string()),
            StructuredData::String(string) => Some(string.clone()),
            _ => None,
        }
    }

}

impl From<serde_json::Value> for StructuredData {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StructuredData::Null,
            serde_json::Value::Bool(flag) => StructuredData::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    StructuredData::Integer(int)
                } else {
                    // u64 beyond i64::MAX or a fractional number
                    StructuredData::Double(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(string) => StructuredData::String(string),
            serde_json::Value::Array(items) => {
                StructuredData::Array(items.into_iter().map(StructuredData::from).collect())
            }
            serde_json::Value::Object(entries) => StructuredData::Dictionary(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, StructuredData::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<StructuredData> for serde_json::Value {
    fn from(data: StructuredData) -> Self {
        match data {
            StructuredData::Null => serde_json::Value::Null,
            StructuredData::Bool(flag) => serde_json::Value::Bool(flag),
            StructuredData::Integer(int) => serde_json::Value::Number(int.into()),
            StructuredData::Double(double) => serde_json::Number::from_f64(double)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            StructuredData::String(string) => serde_json::Value::String(string),
            StructuredData::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            StructuredData::Dictionary(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
