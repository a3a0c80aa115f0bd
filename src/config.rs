//! Defaults for styles, ranges and the canvas, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::VizResult;
use crate::types::{CanvasSettings, Color};

/// Inclusive numeric output range of a size or width encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
  pub min: f64,
  pub max: f64,
}

impl SizeRange {
  pub const fn new(min: f64, max: f64) -> Self {
    Self { min, max }
  }
}

/// Default node size range for `size_nodes`.
pub const DEFAULT_NODE_SIZE_RANGE: SizeRange = SizeRange::new(5.0, 20.0);
/// Default edge width range for `size_edges`.
pub const DEFAULT_EDGE_WIDTH_RANGE: SizeRange = SizeRange::new(1.0, 5.0);

/// Baseline style every element starts from, plus fallbacks for missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
  pub node_size: f64,
  pub node_color: Color,
  pub edge_width: f64,
  pub edge_color: Color,
  /// Color given to elements lacking the attribute a color encoding reads.
  pub neutral_color: Color,
}

impl Default for StyleDefaults {
  fn default() -> Self {
    Self {
      node_size: 10.0,
      node_color: Color::rgb(0x1f, 0x77, 0xb4),
      edge_width: 1.0,
      edge_color: Color::rgb(0x99, 0x99, 0x99),
      neutral_color: Color::rgb(0xcc, 0xcc, 0xcc),
    }
  }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
  #[serde(default)]
  pub styles: StyleDefaults,
  #[serde(default)]
  pub canvas: CanvasSettings,
  #[serde(default = "default_node_size_range")]
  pub node_size_range: SizeRange,
  #[serde(default = "default_edge_width_range")]
  pub edge_width_range: SizeRange,
}

fn default_node_size_range() -> SizeRange {
  DEFAULT_NODE_SIZE_RANGE
}

fn default_edge_width_range() -> SizeRange {
  DEFAULT_EDGE_WIDTH_RANGE
}

impl Default for VizConfig {
  fn default() -> Self {
    Self {
      styles: StyleDefaults::default(),
      canvas: CanvasSettings::default(),
      node_size_range: default_node_size_range(),
      edge_width_range: default_edge_width_range(),
    }
  }
}

impl VizConfig {
  /// Parses a config from JSON; absent fields take their defaults.
  pub fn from_json(s: &str) -> VizResult<Self> {
    Ok(serde_json::from_str(s)?)
  }

  /// Loads a config file.
  #[instrument(level = "trace", skip(path))]
  pub fn from_json_file(path: &Path) -> VizResult<Self> {
    let text = std::fs::read_to_string(path)?;
    Self::from_json(&text)
  }
}
