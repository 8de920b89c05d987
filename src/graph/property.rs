//! Attribute value types for nodes and edges
//!
//! Attribute maps are heterogeneous: one attribute may hold text, another a
//! number or a date. Values are kept as a tagged scalar so predicates can
//! compare them exactly, with no coercion between variants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scalar attribute value
///
/// Supports:
/// - Text
/// - Integer (i64)
/// - Real (f64)
/// - Date (calendar date, no time zone)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Date(NaiveDate),
}

impl PropertyValue {
    /// Get text value if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get real value if this is a real
    pub fn as_real(&self) -> Option<f64> {
        match self {
            PropertyValue::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Get date value if this is a date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            PropertyValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "Text",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Real(_) => "Real",
            PropertyValue::Date(_) => "Date",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Real(r) => write!(f, "{}", r),
            PropertyValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Real(f)
    }
}

impl From<NaiveDate> for PropertyValue {
    fn from(d: NaiveDate) -> Self {
        PropertyValue::Date(d)
    }
}

/// Attribute map for nodes and edges
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Conjunction of attribute equality conditions
///
/// A predicate holds for an attribute map when every condition's attribute is
/// present and equal to the expected value. An empty predicate holds for
/// every map; callers that give the empty predicate a special meaning check
/// `is_empty` first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    conditions: Vec<(String, PropertyValue)>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality condition. A later condition on the same attribute
    /// replaces the earlier one.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.conditions.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.conditions.push((key, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.conditions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check every condition against an attribute map
    pub fn matches(&self, attributes: &PropertyMap) -> bool {
        self.conditions
            .iter()
            .all(|(key, expected)| attributes.get(key) == Some(expected))
    }
}

impl<K, V> FromIterator<(K, V)> for Predicate
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Predicate::new(), |predicate, (k, v)| predicate.with(k, v))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, val)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, val)?;
        }
        write!(f, "}}")
    }
}
