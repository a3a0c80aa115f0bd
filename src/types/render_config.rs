//! Render-ready configuration: the wire contract to renderers and exporters.
//!
//! Field names and enum spellings here are stable. Bump [RENDER_CONFIG_VERSION]
//! when they change.

use serde::{Deserialize, Serialize};

use super::{Color, InteractionMode};

/// Current wire format version.
pub const RENDER_CONFIG_VERSION: u32 = 1;

/// One node as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
  pub id: String,
  pub x: f64,
  pub y: f64,
  pub size: f64,
  pub color: Color,
  pub label: Option<String>,
  pub visible: bool,
}

/// One edge as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
  pub id: String,
  pub source: String,
  pub target: String,
  pub width: f64,
  pub color: Color,
  pub visible: bool,
}

/// Canvas and viewport defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
  pub width: f64,
  pub height: f64,
  pub background: Color,
}

impl Default for CanvasSettings {
  fn default() -> Self {
    Self {
      width: 960.0,
      height: 600.0,
      background: Color::rgb(0xff, 0xff, 0xff),
    }
  }
}

/// Global settings of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
  pub directed: bool,
  pub interaction: InteractionMode,
  pub canvas: CanvasSettings,
}

/// The complete visualization handed to a renderer or exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
  pub version: u32,
  pub nodes: Vec<NodeRecord>,
  pub edges: Vec<EdgeRecord>,
  pub settings: RenderSettings,
}
