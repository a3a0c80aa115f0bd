//! Color nodes by a metric or attribute.

use tracing::instrument;

use super::color_scheme::{ColorScheme, fit_colors};
use super::metric::{NodeMetric, require_present};
use crate::error::VizResult;
use crate::scales::{ColorRamp, Interpolation};
use crate::style_state::{StyleState, Targets};
use crate::types::Color;

/// Arguments of [StyleState::color_nodes].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorNodes {
  pub metric: NodeMetric,
  pub scheme: ColorScheme,
  pub targets: Targets,
}

impl ColorNodes {
  pub fn by(metric: NodeMetric) -> Self {
    Self {
      metric,
      scheme: ColorScheme::Auto,
      targets: Targets::All,
    }
  }

  pub fn by_attribute(name: impl Into<String>) -> Self {
    Self::by(NodeMetric::attribute(name))
  }

  /// Treat values as categories, even numeric ones (e.g. community ids).
  pub fn categorical(mut self) -> Self {
    self.scheme = ColorScheme::categorical();
    self
  }

  /// Categorical with caller colors tried first.
  pub fn palette(mut self, palette: Vec<Color>) -> Self {
    self.scheme = ColorScheme::Categorical { palette };
    self
  }

  pub fn continuous(mut self, ramp: ColorRamp) -> Self {
    self.scheme = ColorScheme::Continuous {
      ramp,
      interpolation: Interpolation::Linear,
    };
    self
  }

  pub fn targets(mut self, targets: Targets) -> Self {
    self.targets = targets;
    self
  }
}

impl StyleState {
  /// Writes `color` for every targeted node.
  ///
  /// Nodes lacking the value get the neutral color. Touches no other field.
  #[instrument(level = "trace", skip(self, op), fields(metric = %op.metric))]
  pub fn color_nodes(&self, op: &ColorNodes) -> VizResult<StyleState> {
    let targets = self.node_targets(&op.targets)?;
    let values = op.metric.read(self.graph(), &targets);
    let source = op.metric.to_string();
    if op.metric.is_attribute() {
      require_present(&source, &values)?;
    }
    let colors = fit_colors(&source, &values, &op.scheme, self.defaults().neutral_color)?;

    let mut next = self.clone();
    for (&i, color) in targets.iter().zip(colors) {
      next.set_node_color(i, color);
    }
    Ok(next)
  }

  /// Writes one fixed color to every targeted node.
  #[instrument(level = "trace", skip(self, color, targets), fields(color = %color))]
  pub fn fill_nodes(&self, color: Color, targets: &Targets) -> VizResult<StyleState> {
    let targets = self.node_targets(targets)?;
    let mut next = self.clone();
    for i in targets {
      next.set_node_color(i, color);
    }
    Ok(next)
  }
}
