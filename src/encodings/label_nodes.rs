//! Label nodes by id or attribute.

use tracing::instrument;

use super::metric::require_present;
use crate::error::VizResult;
use crate::style_state::{StyleState, Targets};

/// Where a node label comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
  Id,
  Attribute(String),
}

/// Arguments of [StyleState::label_nodes].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNodes {
  pub source: LabelSource,
  pub targets: Targets,
}

impl LabelNodes {
  pub fn by_id() -> Self {
    Self {
      source: LabelSource::Id,
      targets: Targets::All,
    }
  }

  pub fn by_attribute(name: impl Into<String>) -> Self {
    Self {
      source: LabelSource::Attribute(name.into()),
      targets: Targets::All,
    }
  }

  pub fn targets(mut self, targets: Targets) -> Self {
    self.targets = targets;
    self
  }
}

impl StyleState {
  /// Writes `label` for every targeted node; nodes lacking the attribute get none.
  #[instrument(level = "trace", skip(self, op))]
  pub fn label_nodes(&self, op: &LabelNodes) -> VizResult<StyleState> {
    let targets = self.node_targets(&op.targets)?;
    let nodes = self.graph().nodes();
    let labels: Vec<Option<String>> = match &op.source {
      LabelSource::Id => targets
        .iter()
        .map(|&i| nodes.get(i).map(|n| n.id.clone()))
        .collect(),
      LabelSource::Attribute(name) => {
        let values: Vec<_> = targets
          .iter()
          .map(|&i| nodes.get(i).and_then(|n| n.attr(name)).cloned())
          .collect();
        require_present(name, &values)?;
        values.into_iter().map(|v| v.map(|v| v.to_string())).collect()
      }
    };

    let mut next = self.clone();
    for (&i, label) in targets.iter().zip(labels) {
      next.set_node_label(i, label);
    }
    Ok(next)
  }
}
