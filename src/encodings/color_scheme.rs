//! How attribute values become colors; shared by node and edge color encodings.

use tracing::debug;

use crate::error::ConfigurationError;
use crate::scales::{CategoricalScale, ColorRamp, Interpolation, NumericColorScale};
use crate::types::{AttrValue, Color};

use super::metric::numeric_values;

/// Color encoding rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorScheme {
  /// Continuous with the default ramp when every present value is numeric,
  /// categorical with the default palette otherwise.
  #[default]
  Auto,
  /// One palette color per distinct value, in first-seen order.
  /// `palette` colors are used first; the generated palette fills the rest.
  Categorical { palette: Vec<Color> },
  /// Numeric values interpolated along `ramp`.
  Continuous {
    ramp: ColorRamp,
    interpolation: Interpolation,
  },
}

impl ColorScheme {
  pub fn categorical() -> Self {
    ColorScheme::Categorical { palette: vec![] }
  }

  pub fn continuous() -> Self {
    ColorScheme::Continuous {
      ramp: ColorRamp::default(),
      interpolation: Interpolation::Linear,
    }
  }

  /// Concrete scheme for `values` (only `Auto` depends on them).
  fn resolve(&self, values: &[Option<AttrValue>]) -> ColorScheme {
    match self {
      ColorScheme::Auto => {
        let all_numeric = values
          .iter()
          .flatten()
          .all(|v| v.as_number().is_some());
        if all_numeric {
          ColorScheme::continuous()
        } else {
          ColorScheme::categorical()
        }
      }
      other => other.clone(),
    }
  }
}

/// One color per value; `fallback` where the value is missing or unusable.
pub(crate) fn fit_colors(
  source: &str,
  values: &[Option<AttrValue>],
  scheme: &ColorScheme,
  fallback: Color,
) -> Result<Vec<Color>, ConfigurationError> {
  match scheme.resolve(values) {
    ColorScheme::Categorical { palette } => {
      let scale = CategoricalScale::fit(values.iter().flatten().map(AttrValue::category_key), &palette);
      debug!(source, categories = scale.categories().len(), "categorical color scale fitted");
      Ok(
        values
          .iter()
          .map(|v| {
            v.as_ref()
              .and_then(|v| scale.map(&v.category_key()))
              .unwrap_or(fallback)
          })
          .collect(),
      )
    }
    ColorScheme::Continuous {
      ramp,
      interpolation,
    } => {
      let numbers = numeric_values(source, values)?;
      let Some(scale) = NumericColorScale::fit(numbers, ramp, interpolation) else {
        return Ok(vec![fallback; values.len()]);
      };
      debug!(source, domain = ?scale.domain(), "continuous color scale fitted");
      Ok(
        values
          .iter()
          .map(|v| {
            v.as_ref()
              .and_then(AttrValue::as_number)
              .map(|n| scale.map(n))
              .unwrap_or(fallback)
          })
          .collect(),
      )
    }
    ColorScheme::Auto => Ok(vec![fallback; values.len()]),
  }
}
