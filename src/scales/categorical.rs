//! Qualitative palettes and categorical value → color assignment.

use std::collections::{HashMap, HashSet};

use crate::types::Color;

/// The category10 qualitative set; the first colors any palette hands out.
pub const CATEGORY10: [Color; 10] = [
  Color::rgb(0x1f, 0x77, 0xb4),
  Color::rgb(0xff, 0x7f, 0x0e),
  Color::rgb(0x2c, 0xa0, 0x2c),
  Color::rgb(0xd6, 0x27, 0x28),
  Color::rgb(0x94, 0x67, 0xbd),
  Color::rgb(0x8c, 0x56, 0x4b),
  Color::rgb(0xe3, 0x77, 0xc2),
  Color::rgb(0x7f, 0x7f, 0x7f),
  Color::rgb(0xbc, 0xbd, 0x22),
  Color::rgb(0x17, 0xbe, 0xcf),
];

const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// Lightness and saturation per pass of the golden-angle hue walk.
const SHADES: [(f64, f64); 6] = [
  (0.65, 0.55),
  (0.85, 0.40),
  (0.50, 0.70),
  (0.90, 0.30),
  (0.40, 0.80),
  (0.75, 0.62),
];

/// Hues generated per shade before moving to the next one.
const HUES_PER_SHADE: usize = 360;

/// Deterministic qualitative palette generator.
pub struct CategoricalPalette;

impl CategoricalPalette {
  /// The `i`th color of the generated sequence.
  pub fn nth(i: usize) -> Color {
    match CATEGORY10.get(i) {
      Some(c) => *c,
      None => {
        let step = i - CATEGORY10.len();
        let (s, l) = SHADES[(step / HUES_PER_SHADE) % SHADES.len()];
        Color::from_hsl(step as f64 * GOLDEN_ANGLE, s, l)
      }
    }
  }

  /// `n` colors: caller `preferred` colors first, then the generated sequence
  /// skipping colors already used.
  ///
  /// The sequence is searched for a bounded number of steps. Past that, the
  /// distinct colors found so far are reused in order.
  pub fn generate(n: usize, preferred: &[Color]) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(n);
    let mut seen: HashSet<Color> = HashSet::with_capacity(n);
    for c in preferred.iter().take(n) {
      out.push(*c);
      seen.insert(*c);
    }
    let budget = n
      .saturating_mul(2)
      .max(CATEGORY10.len() + HUES_PER_SHADE * SHADES.len());
    let mut i = 0;
    while out.len() < n && i < budget {
      let c = Self::nth(i);
      if seen.insert(c) {
        out.push(c);
      }
      i += 1;
    }
    let distinct = out.len();
    for j in 0..n - distinct {
      out.push(out[j % distinct]);
    }
    out
  }
}

/// Category key → color, assigned in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalScale {
  order: Vec<String>,
  colors: HashMap<String, Color>,
}

impl CategoricalScale {
  /// Assigns palette colors to distinct keys in the order they first appear.
  pub fn fit<I, S>(keys: I, preferred: &[Color]) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for k in keys {
      let k = k.into();
      if !seen.contains(&k) {
        seen.insert(k.clone());
        order.push(k);
      }
    }
    let palette = CategoricalPalette::generate(order.len(), preferred);
    let colors = order.iter().cloned().zip(palette).collect();
    Self { order, colors }
  }

  /// Distinct keys in assignment order.
  pub fn categories(&self) -> &[String] {
    &self.order
  }

  pub fn map(&self, key: &str) -> Option<Color> {
    self.colors.get(key).copied()
  }
}
