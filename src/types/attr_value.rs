//! Heterogeneous attribute values attached to nodes and edges.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute map of a node or edge, ordered by key.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value: numeric, text, or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
  Bool(bool),
  Number(f64),
  Text(String),
}

impl AttrValue {
  /// Infers a typed value from raw text (numbers, `true`/`false`, else text).
  pub fn infer(raw: &str) -> AttrValue {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<f64>()
      && n.is_finite()
    {
      return AttrValue::Number(n);
    }
    match trimmed {
      "true" => AttrValue::Bool(true),
      "false" => AttrValue::Bool(false),
      _ => AttrValue::Text(raw.to_string()),
    }
  }

  /// Numeric value, only for finite `Number`.
  pub fn as_number(&self) -> Option<f64> {
    match self {
      AttrValue::Number(n) if n.is_finite() => Some(*n),
      _ => None,
    }
  }

  /// Key used to group values into categories.
  pub fn category_key(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for AttrValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AttrValue::Bool(b) => write!(f, "{b}"),
      AttrValue::Number(n) => write!(f, "{n}"),
      AttrValue::Text(s) => f.write_str(s),
    }
  }
}

impl From<f64> for AttrValue {
  fn from(n: f64) -> Self {
    AttrValue::Number(n)
  }
}

impl From<i64> for AttrValue {
  fn from(n: i64) -> Self {
    AttrValue::Number(n as f64)
  }
}

impl From<bool> for AttrValue {
  fn from(b: bool) -> Self {
    AttrValue::Bool(b)
  }
}

impl From<&str> for AttrValue {
  fn from(s: &str) -> Self {
    AttrValue::Text(s.to_string())
  }
}

impl From<String> for AttrValue {
  fn from(s: String) -> Self {
    AttrValue::Text(s)
  }
}
