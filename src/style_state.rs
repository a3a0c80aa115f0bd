//! Accumulated style of every node and edge plus the interaction mode.
//!
//! `StyleState` is copy-on-write: every public operation takes `&self` and
//! returns a new state. The graph is shared behind an `Arc`; only the style
//! vectors are copied. A state a caller still holds never changes underneath it.

use std::sync::Arc;

use tracing::instrument;

use crate::config::StyleDefaults;
use crate::error::{ReferenceError, VizError, VizResult};
use crate::types::{
  Color, EdgeStyle, GraphEdge, GraphNode, GraphSnapshot, InteractionMode, NodeStyle,
  PositionMap,
};

/// Which elements an operation writes to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Targets {
  #[default]
  All,
  Ids(Vec<String>),
}

impl Targets {
  pub fn ids<I, S>(ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Targets::Ids(ids.into_iter().map(Into::into).collect())
  }
}

/// Complete style state for one graph snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
  graph: Arc<GraphSnapshot>,
  defaults: StyleDefaults,
  nodes: Vec<NodeStyle>,
  edges: Vec<EdgeStyle>,
  interaction: InteractionMode,
}

impl StyleState {
  /// Baseline state: uniform size and color, no labels, everything visible.
  pub fn new(graph: GraphSnapshot) -> Self {
    Self::with_defaults(Arc::new(graph), StyleDefaults::default())
  }

  #[instrument(level = "trace", skip(graph, defaults))]
  pub fn with_defaults(graph: Arc<GraphSnapshot>, defaults: StyleDefaults) -> Self {
    let nodes = vec![
      NodeStyle {
        size: defaults.node_size,
        color: defaults.node_color,
        label: None,
        visible: true,
      };
      graph.nodes().len()
    ];
    let edges = vec![
      EdgeStyle {
        width: defaults.edge_width,
        color: defaults.edge_color,
        visible: true,
      };
      graph.edges().len()
    ];
    Self {
      graph,
      defaults,
      nodes,
      edges,
      interaction: InteractionMode::default(),
    }
  }

  pub fn graph(&self) -> &GraphSnapshot {
    &self.graph
  }

  pub fn defaults(&self) -> &StyleDefaults {
    &self.defaults
  }

  pub fn interaction(&self) -> InteractionMode {
    self.interaction
  }

  pub fn node_style(&self, id: &str) -> Option<&NodeStyle> {
    self.graph.node_index(id).and_then(|i| self.nodes.get(i))
  }

  pub fn edge_style(&self, id: &str) -> Option<&EdgeStyle> {
    self.graph.edge_index(id).and_then(|i| self.edges.get(i))
  }

  /// Nodes with their styles, in snapshot order.
  pub fn node_styles(&self) -> impl Iterator<Item = (&GraphNode, &NodeStyle)> {
    self.graph.nodes().iter().zip(self.nodes.iter())
  }

  /// Edges with their styles, in snapshot order.
  pub fn edge_styles(&self) -> impl Iterator<Item = (&GraphEdge, &EdgeStyle)> {
    self.graph.edges().iter().zip(self.edges.iter())
  }

  /// Returns a copy whose graph carries `positions`; styles are unchanged.
  pub fn with_positions(&self, positions: &PositionMap) -> VizResult<StyleState> {
    let mut next = self.clone();
    next.graph = Arc::new(self.graph.with_positions(positions)?);
    Ok(next)
  }

  /// Returns a copy with the interaction mode replaced.
  pub fn set_interaction(&self, mode: InteractionMode) -> StyleState {
    let mut next = self.clone();
    next.interaction = mode;
    next
  }

  /// Node indices selected by `targets`, in snapshot order for `All`, caller order otherwise.
  pub(crate) fn node_targets(&self, targets: &Targets) -> VizResult<Vec<usize>> {
    match targets {
      Targets::All => Ok((0..self.nodes.len()).collect()),
      Targets::Ids(ids) => ids
        .iter()
        .map(|id| {
          self
            .graph
            .node_index(id)
            .ok_or_else(|| VizError::from(ReferenceError::UnknownNode(id.clone())))
        })
        .collect(),
    }
  }

  /// Edge indices selected by `targets`.
  pub(crate) fn edge_targets(&self, targets: &Targets) -> VizResult<Vec<usize>> {
    match targets {
      Targets::All => Ok((0..self.edges.len()).collect()),
      Targets::Ids(ids) => ids
        .iter()
        .map(|id| {
          self
            .graph
            .edge_index(id)
            .ok_or_else(|| VizError::from(ReferenceError::UnknownEdge(id.clone())))
        })
        .collect(),
    }
  }

  // Field writers. Each touches exactly one field of the selected records.

  pub(crate) fn set_node_size(&mut self, i: usize, size: f64) {
    if let Some(s) = self.nodes.get_mut(i) {
      s.size = size;
    }
  }

  pub(crate) fn set_node_color(&mut self, i: usize, color: Color) {
    if let Some(s) = self.nodes.get_mut(i) {
      s.color = color;
    }
  }

  pub(crate) fn set_node_label(&mut self, i: usize, label: Option<String>) {
    if let Some(s) = self.nodes.get_mut(i) {
      s.label = label;
    }
  }

  pub(crate) fn set_node_visible(&mut self, i: usize, visible: bool) {
    if let Some(s) = self.nodes.get_mut(i) {
      s.visible = visible;
    }
  }

  pub(crate) fn set_edge_width(&mut self, i: usize, width: f64) {
    if let Some(s) = self.edges.get_mut(i) {
      s.width = width;
    }
  }

  pub(crate) fn set_edge_color(&mut self, i: usize, color: Color) {
    if let Some(s) = self.edges.get_mut(i) {
      s.color = color;
    }
  }

  pub(crate) fn set_edge_visible(&mut self, i: usize, visible: bool) {
    if let Some(s) = self.edges.get_mut(i) {
      s.visible = visible;
    }
  }
}
