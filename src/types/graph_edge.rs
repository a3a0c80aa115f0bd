//! An edge of the source graph.

use super::{AttrValue, Attributes};

/// An edge of the source graph.
///
/// `id` is empty until the edge enters a [GraphSnapshot](super::GraphSnapshot),
/// which derives `source->target#k` (or `source--target#k`) unless the adapter
/// set one explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
  pub id: String,
  pub source: String,
  pub target: String,
  pub attributes: Attributes,
}

impl GraphEdge {
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: String::new(),
      source: source.into(),
      target: target.into(),
      attributes: Attributes::new(),
    }
  }

  /// Sets an explicit id (builder style).
  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = id.into();
    self
  }

  /// Adds an attribute (builder style).
  pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
    self.attributes.insert(key.into(), value.into());
    self
  }

  pub fn attr(&self, key: &str) -> Option<&AttrValue> {
    self.attributes.get(key)
  }

  pub fn is_self_loop(&self) -> bool {
    self.source == self.target
  }
}
