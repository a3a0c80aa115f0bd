//! Numeric domain → numeric range mapping.

use serde::{Deserialize, Serialize};

use crate::config::SizeRange;

/// Interpolation rule of a [NumericScale].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
  #[default]
  Linear,
  /// `ln(1 + v - lo) / ln(1 + hi - lo)`, so zero and negative domains are fine.
  Log,
}

/// Domain fitted from observed values, mapped onto a fixed output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericScale {
  lo: f64,
  hi: f64,
  range: SizeRange,
  interpolation: Interpolation,
}

impl NumericScale {
  /// Fits the domain to the min and max of `values`. None if `values` is empty.
  pub fn fit(
    values: impl IntoIterator<Item = f64>,
    range: SizeRange,
    interpolation: Interpolation,
  ) -> Option<Self> {
    let (lo, hi) = values
      .into_iter()
      .filter(|v| v.is_finite())
      .fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
      })?;
    Some(Self {
      lo,
      hi,
      range,
      interpolation,
    })
  }

  pub fn domain(&self) -> (f64, f64) {
    (self.lo, self.hi)
  }

  pub fn range(&self) -> SizeRange {
    self.range
  }

  /// Position of `v` in the domain as a fraction in `[0, 1]`.
  ///
  /// A degenerate domain (`lo == hi`) maps everything to 1.
  pub fn fraction(&self, v: f64) -> f64 {
    let span = self.hi - self.lo;
    if span <= 0.0 {
      return 1.0;
    }
    let t = match self.interpolation {
      Interpolation::Linear => (v - self.lo) / span,
      Interpolation::Log => (1.0 + (v - self.lo).max(0.0)).ln() / (1.0 + span).ln(),
    };
    t.clamp(0.0, 1.0)
  }

  /// Maps `v` into the output range.
  pub fn map(&self, v: f64) -> f64 {
    let t = self.fraction(v);
    if t >= 1.0 {
      return self.range.max;
    }
    self.range.min + t * (self.range.max - self.range.min)
  }
}
