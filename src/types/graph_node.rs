//! A node of the source graph.

use super::{AttrValue, Attributes, Position};

/// A node of the source graph: identity, attributes, optional position.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
  pub id: String,
  pub attributes: Attributes,
  pub position: Option<Position>,
}

impl GraphNode {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      attributes: Attributes::new(),
      position: None,
    }
  }

  /// Adds an attribute (builder style).
  pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
    self.attributes.insert(key.into(), value.into());
    self
  }

  /// Sets the position (builder style).
  pub fn at(mut self, x: f64, y: f64) -> Self {
    self.position = Some(Position::new(x, y));
    self
  }

  pub fn attr(&self, key: &str) -> Option<&AttrValue> {
    self.attributes.get(key)
  }
}
