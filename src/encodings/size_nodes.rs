//! Size nodes by a metric or numeric attribute.

use tracing::{debug, instrument};

use super::metric::{NodeMetric, numeric_values, require_present, validate_range};
use crate::config::{DEFAULT_NODE_SIZE_RANGE, SizeRange};
use crate::error::VizResult;
use crate::scales::{Interpolation, NumericScale};
use crate::style_state::{StyleState, Targets};

/// Arguments of [StyleState::size_nodes].
#[derive(Debug, Clone, PartialEq)]
pub struct SizeNodes {
  pub metric: NodeMetric,
  pub range: SizeRange,
  pub interpolation: Interpolation,
  pub targets: Targets,
}

impl SizeNodes {
  /// All nodes, default range, linear.
  pub fn by(metric: NodeMetric) -> Self {
    Self {
      metric,
      range: DEFAULT_NODE_SIZE_RANGE,
      interpolation: Interpolation::Linear,
      targets: Targets::All,
    }
  }

  pub fn by_degree() -> Self {
    Self::by(NodeMetric::Degree)
  }

  pub fn by_attribute(name: impl Into<String>) -> Self {
    Self::by(NodeMetric::attribute(name))
  }

  pub fn range(mut self, min: f64, max: f64) -> Self {
    self.range = SizeRange::new(min, max);
    self
  }

  pub fn log(mut self) -> Self {
    self.interpolation = Interpolation::Log;
    self
  }

  pub fn targets(mut self, targets: Targets) -> Self {
    self.targets = targets;
    self
  }
}

impl StyleState {
  /// Writes `size` for every targeted node from the metric's current domain.
  ///
  /// Nodes without a numeric value get `range.min`. Touches no other field.
  #[instrument(level = "trace", skip(self, op), fields(metric = %op.metric))]
  pub fn size_nodes(&self, op: &SizeNodes) -> VizResult<StyleState> {
    validate_range("node size", op.range)?;
    let targets = self.node_targets(&op.targets)?;
    let values = op.metric.read(self.graph(), &targets);
    let source = op.metric.to_string();
    if op.metric.is_attribute() {
      require_present(&source, &values)?;
    }
    let numbers = numeric_values(&source, &values)?;

    let mut next = self.clone();
    let Some(scale) = NumericScale::fit(numbers, op.range, op.interpolation) else {
      return Ok(next);
    };
    debug!(metric = %source, domain = ?scale.domain(), targets = targets.len(), "sizing nodes");
    for (&i, v) in targets.iter().zip(&values) {
      let size = v
        .as_ref()
        .and_then(|v| v.as_number())
        .map(|n| scale.map(n))
        .unwrap_or(op.range.min);
      next.set_node_size(i, size);
    }
    Ok(next)
  }
}
