//! Show or hide nodes and edges.

use tracing::instrument;

use crate::error::VizResult;
use crate::style_state::{StyleState, Targets};

impl StyleState {
  /// Writes `visible` for every targeted node. Incident edges are left alone.
  #[instrument(level = "trace", skip(self, targets))]
  pub fn set_node_visibility(&self, targets: &Targets, visible: bool) -> VizResult<StyleState> {
    let targets = self.node_targets(targets)?;
    let mut next = self.clone();
    for i in targets {
      next.set_node_visible(i, visible);
    }
    Ok(next)
  }

  /// Writes `visible` for every targeted edge.
  #[instrument(level = "trace", skip(self, targets))]
  pub fn set_edge_visibility(&self, targets: &Targets, visible: bool) -> VizResult<StyleState> {
    let targets = self.edge_targets(targets)?;
    let mut next = self.clone();
    for i in targets {
      next.set_edge_visible(i, visible);
    }
    Ok(next)
  }
}
