//! Item Normalization
//!
//! Converts a heterogeneous list of workflow items into a uniform list of
//! strings. Text items are upper-cased; every other item is rendered in
//! its default textual form.
//!
//! # Example YAML Input
//!
//! ```yaml
//! items:
//!   - alpha
//!   - 42
//!   - 2.5
//!   - true
//! ```
//!
//! normalizes to `["ALPHA", "42", "2.5", "true"]`.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{value_kind, HelperError, Result};

/// A single value in an item list.
///
/// Text is kept apart from the other printable scalars so normalization
/// can treat it differently without inspecting types at runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Item {
    Text(String),
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
}

impl Item {
    /// Returns true for text items.
    pub fn is_text(&self) -> bool {
        matches!(self, Item::Text(_))
    }

    /// Normalized form of this item: upper-cased text, or the textual
    /// representation of any other value.
    pub fn normalize(&self) -> String {
        match self {
            Item::Text(s) => s.to_uppercase(),
            other => other.to_string(),
        }
    }

    /// Converts a JSON value found at `index` of an item list.
    ///
    /// `null`, arrays and objects have no textual form and are rejected.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Item::Text(s.clone())),
            Value::Bool(b) => Ok(Item::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Item::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Item::Unsigned(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Item::Float(f))
                } else {
                    Err(HelperError::UnconvertibleItem { index, kind: "number" })
                }
            }
            other => Err(HelperError::UnconvertibleItem {
                index,
                kind: value_kind(other),
            }),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Text(s) => write!(f, "{}", s),
            Item::Integer(i) => write!(f, "{}", i),
            Item::Unsigned(u) => write!(f, "{}", u),
            // JSON number formatting keeps the fractional part ("1.0", not "1")
            Item::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(n) => write!(f, "{}", n),
                None => write!(f, "{}", x),
            },
            Item::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Integer(value)
    }
}

impl From<u64> for Item {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Item::Integer(i),
            Err(_) => Item::Unsigned(value),
        }
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Item::Integer(value.into())
    }
}

impl From<f64> for Item {
    fn from(value: f64) -> Self {
        Item::Float(value)
    }
}

impl From<bool> for Item {
    fn from(value: bool) -> Self {
        Item::Boolean(value)
    }
}

/// Normalizes a list of items into strings, preserving order.
///
/// An absent or empty list yields an empty result.
///
/// # Example
///
/// ```
/// use workflow_helpers::helpers::{process_data, Item};
///
/// let items: Vec<Item> = vec!["a".into(), 1.into(), "b".into()];
/// assert_eq!(process_data(Some(&items)), vec!["A", "1", "B"]);
/// assert!(process_data(None).is_empty());
/// ```
pub fn process_data(items: Option<&[Item]>) -> Vec<String> {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return Vec::new();
    };

    let processed: Vec<String> = items.iter().map(Item::normalize).collect();
    debug!("Normalized {} items", processed.len());
    processed
}

/// Converts a JSON list into items, failing on the first element without
/// a textual form.
///
/// `null` is treated as an absent list.
pub fn items_from_value(value: &Value) -> Result<Vec<Item>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(index, v)| Item::from_value(index, v))
            .collect(),
        other => Err(HelperError::InvalidInput(format!(
            "'items' must be a list, found {}",
            value_kind(other)
        ))),
    }
}
