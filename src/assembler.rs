//! Assemble a style state and its graph into a validated [RenderConfig].

use tracing::{info, instrument};

use crate::error::{ConfigurationError, VizResult};
use crate::layout::CircularLayout;
use crate::style_state::StyleState;
use crate::types::{
  CanvasSettings, EdgeRecord, NodeRecord, Position, RENDER_CONFIG_VERSION, RenderConfig,
  RenderSettings,
};

/// What to do with nodes that have no position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MissingPositions {
  /// Fail with [ConfigurationError::NonFiniteCoordinate].
  #[default]
  Reject,
  /// Place unpositioned nodes on a circle, in node order.
  Circle(CircularLayout),
}

/// Options of [assemble].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssembleOptions {
  pub canvas: CanvasSettings,
  pub missing_positions: MissingPositions,
}

/// Builds the render configuration.
///
/// Every node must end up with finite coordinates and every size and width must
/// be finite and positive; otherwise nothing is produced.
#[instrument(level = "trace", skip(state, options))]
pub fn assemble(state: &StyleState, options: &AssembleOptions) -> VizResult<RenderConfig> {
  let graph = state.graph();
  let unplaced = graph
    .nodes()
    .iter()
    .filter(|n| n.position.is_none())
    .count();
  let mut circle_slot = 0;

  let mut nodes = Vec::with_capacity(graph.nodes().len());
  for (node, style) in state.node_styles() {
    let position = match (node.position, options.missing_positions) {
      (Some(p), _) => p,
      (None, MissingPositions::Circle(layout)) => {
        circle_slot += 1;
        layout.slot(circle_slot - 1, unplaced)
      }
      (None, MissingPositions::Reject) => Position::new(f64::NAN, f64::NAN),
    };
    check_coordinate(&node.id, "x", position.x)?;
    check_coordinate(&node.id, "y", position.y)?;
    check_positive(&node.id, "size", style.size)?;
    nodes.push(NodeRecord {
      id: node.id.clone(),
      x: position.x,
      y: position.y,
      size: style.size,
      color: style.color,
      label: style.label.clone(),
      visible: style.visible,
    });
  }

  let mut edges = Vec::with_capacity(graph.edges().len());
  for (edge, style) in state.edge_styles() {
    check_positive(&edge.id, "width", style.width)?;
    edges.push(EdgeRecord {
      id: edge.id.clone(),
      source: edge.source.clone(),
      target: edge.target.clone(),
      width: style.width,
      color: style.color,
      visible: style.visible,
    });
  }

  info!(
    nodes = nodes.len(),
    edges = edges.len(),
    unplaced,
    "render config assembled"
  );
  Ok(RenderConfig {
    version: RENDER_CONFIG_VERSION,
    nodes,
    edges,
    settings: RenderSettings {
      directed: graph.is_directed(),
      interaction: state.interaction(),
      canvas: options.canvas.clone(),
    },
  })
}

fn check_coordinate(node: &str, field: &'static str, v: f64) -> Result<(), ConfigurationError> {
  if v.is_finite() {
    return Ok(());
  }
  Err(ConfigurationError::NonFiniteCoordinate {
    node: node.to_string(),
    field,
  })
}

fn check_positive(element: &str, field: &'static str, v: f64) -> Result<(), ConfigurationError> {
  if v.is_finite() && v > 0.0 {
    return Ok(());
  }
  Err(ConfigurationError::InvalidStyle {
    element: element.to_string(),
    field,
    value: v,
  })
}
