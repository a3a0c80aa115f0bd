//! Layout seam. Real layout algorithms live outside this crate.

use std::f64::consts::PI;

use crate::types::{GraphSnapshot, Position, PositionMap};

/// Computes positions for (some of) the nodes of a graph.
pub trait Layout {
  fn layout(&self, graph: &GraphSnapshot) -> PositionMap;
}

/// Places every node on a circle, in node order, starting at angle 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
  pub radius: f64,
  pub center: Position,
}

impl Default for CircularLayout {
  fn default() -> Self {
    Self {
      radius: 100.0,
      center: Position::new(0.0, 0.0),
    }
  }
}

impl CircularLayout {
  /// Position of the `i`th of `n` slots.
  pub fn slot(&self, i: usize, n: usize) -> Position {
    if n <= 1 {
      return self.center;
    }
    let angle = (i as f64) * 2.0 * PI / n as f64;
    Position::new(
      self.center.x + self.radius * angle.cos(),
      self.center.y + self.radius * angle.sin(),
    )
  }
}

impl Layout for CircularLayout {
  fn layout(&self, graph: &GraphSnapshot) -> PositionMap {
    let n = graph.nodes().len();
    graph
      .nodes()
      .iter()
      .enumerate()
      .map(|(i, node)| (node.id.clone(), self.slot(i, n)))
      .collect()
  }
}
