//! Continuous color ramp for numeric domains.

use crate::config::SizeRange;
use crate::error::ConfigurationError;
use crate::types::Color;

use super::{Interpolation, NumericScale};

/// Default ramp anchors (viridis endpoints and midpoint).
pub const DEFAULT_RAMP: [Color; 3] = [
  Color::rgb(0x44, 0x01, 0x54),
  Color::rgb(0x21, 0x91, 0x8c),
  Color::rgb(0xfd, 0xe7, 0x25),
];

/// Piecewise-linear RGB ramp through two or more evenly spaced anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
  anchors: Vec<Color>,
}

impl Default for ColorRamp {
  fn default() -> Self {
    Self {
      anchors: DEFAULT_RAMP.to_vec(),
    }
  }
}

impl ColorRamp {
  pub fn new(anchors: Vec<Color>) -> Result<Self, ConfigurationError> {
    if anchors.len() < 2 {
      return Err(ConfigurationError::InvalidRamp(anchors.len()));
    }
    Ok(Self { anchors })
  }

  pub fn anchors(&self) -> &[Color] {
    &self.anchors
  }

  /// Color at fraction `t` (clamped to `[0, 1]`).
  pub fn at(&self, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let segments = self.anchors.len().saturating_sub(1);
    let (Some(first), Some(last)) = (self.anchors.first(), self.anchors.last()) else {
      return Color::rgb(0, 0, 0);
    };
    if segments == 0 {
      return *first;
    }
    if t >= 1.0 {
      return *last;
    }
    let pos = t * segments as f64;
    let i = (pos.floor() as usize).min(segments - 1);
    self.anchors[i].lerp(self.anchors[i + 1], pos - i as f64)
  }
}

/// Numeric domain → ramp color. A degenerate domain maps to the last anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColorScale {
  scale: NumericScale,
  ramp: ColorRamp,
}

impl NumericColorScale {
  pub fn fit(
    values: impl IntoIterator<Item = f64>,
    ramp: ColorRamp,
    interpolation: Interpolation,
  ) -> Option<Self> {
    let scale = NumericScale::fit(values, SizeRange::new(0.0, 1.0), interpolation)?;
    Some(Self { scale, ramp })
  }

  pub fn domain(&self) -> (f64, f64) {
    self.scale.domain()
  }

  pub fn map(&self, v: f64) -> Color {
    self.ramp.at(self.scale.fraction(v))
  }
}
