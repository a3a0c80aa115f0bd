//! 2D node coordinates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Node position in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

/// Positions keyed by node id, as produced by a layout.
pub type PositionMap = HashMap<String, Position>;
