//! Edge width and edge color encodings.

use tracing::{debug, instrument};

use super::color_scheme::{ColorScheme, fit_colors};
use super::metric::{numeric_values, require_present, validate_range};
use crate::config::{DEFAULT_EDGE_WIDTH_RANGE, SizeRange};
use crate::error::VizResult;
use crate::scales::{Interpolation, NumericScale};
use crate::style_state::{StyleState, Targets};
use crate::types::{AttrValue, Color};

/// Arguments of [StyleState::size_edges].
#[derive(Debug, Clone, PartialEq)]
pub struct SizeEdges {
  pub attribute: String,
  pub range: SizeRange,
  pub interpolation: Interpolation,
  pub targets: Targets,
}

impl SizeEdges {
  pub fn by_attribute(name: impl Into<String>) -> Self {
    Self {
      attribute: name.into(),
      range: DEFAULT_EDGE_WIDTH_RANGE,
      interpolation: Interpolation::Linear,
      targets: Targets::All,
    }
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

/// Arguments of [StyleState::color_edges].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEdges {
  pub attribute: String,
  pub scheme: ColorScheme,
  pub targets: Targets,
}

impl ColorEdges {
  pub fn by_attribute(name: impl Into<String>) -> Self {
    Self {
      attribute: name.into(),
      scheme: ColorScheme::Auto,
      targets: Targets::All,
    }
  }

  pub fn scheme(mut self, scheme: ColorScheme) -> Self {
    self.scheme = scheme;
    self
  }

  pub fn targets(mut self, targets: Targets) -> Self {
    self.targets = targets;
    self
  }
}

impl StyleState {
  fn edge_values(&self, attribute: &str, targets: &[usize]) -> Vec<Option<AttrValue>> {
    let edges = self.graph().edges();
    targets
      .iter()
      .map(|&i| edges.get(i).and_then(|e| e.attr(attribute)).cloned())
      .collect()
  }

  /// Writes `width` for every targeted edge; edges lacking a number get `range.min`.
  #[instrument(level = "trace", skip(self, op), fields(attribute = %op.attribute))]
  pub fn size_edges(&self, op: &SizeEdges) -> VizResult<StyleState> {
    validate_range("edge width", op.range)?;
    let targets = self.edge_targets(&op.targets)?;
    let values = self.edge_values(&op.attribute, &targets);
    require_present(&op.attribute, &values)?;
    let numbers = numeric_values(&op.attribute, &values)?;

    let mut next = self.clone();
    let Some(scale) = NumericScale::fit(numbers, op.range, op.interpolation) else {
      return Ok(next);
    };
    debug!(attribute = %op.attribute, domain = ?scale.domain(), "sizing edges");
    for (&i, v) in targets.iter().zip(&values) {
      let width = v
        .as_ref()
        .and_then(AttrValue::as_number)
        .map(|n| scale.map(n))
        .unwrap_or(op.range.min);
      next.set_edge_width(i, width);
    }
    Ok(next)
  }

  /// Writes `color` for every targeted edge; edges lacking the value get the neutral color.
  #[instrument(level = "trace", skip(self, op), fields(attribute = %op.attribute))]
  pub fn color_edges(&self, op: &ColorEdges) -> VizResult<StyleState> {
    let targets = self.edge_targets(&op.targets)?;
    let values = self.edge_values(&op.attribute, &targets);
    require_present(&op.attribute, &values)?;
    let colors = fit_colors(&op.attribute, &values, &op.scheme, self.defaults().neutral_color)?;

    let mut next = self.clone();
    for (&i, color) in targets.iter().zip(colors) {
      next.set_edge_color(i, color);
    }
    Ok(next)
  }

  /// Writes one fixed color to every targeted edge.
  #[instrument(level = "trace", skip(self, color, targets), fields(color = %color))]
  pub fn fill_edges(&self, color: Color, targets: &Targets) -> VizResult<StyleState> {
    let targets = self.edge_targets(targets)?;
    let mut next = self.clone();
    for i in targets {
      next.set_edge_color(i, color);
    }
    Ok(next)
  }
}
