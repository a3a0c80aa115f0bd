//! Per-element style records held by the style state.

use serde::{Deserialize, Serialize};

use super::Color;

/// Complete style of one node. Every field is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
  pub size: f64,
  pub color: Color,
  pub label: Option<String>,
  pub visible: bool,
}

/// Complete style of one edge. Every field is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
  pub width: f64,
  pub color: Color,
  pub visible: bool,
}
