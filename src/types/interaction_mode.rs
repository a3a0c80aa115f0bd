//! Global interaction settings handed to the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Event that triggers neighbor highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightEvent {
  Click,
  #[default]
  Hover,
  None,
}

impl fmt::Display for HighlightEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HighlightEvent::Click => write!(f, "click"),
      HighlightEvent::Hover => write!(f, "hover"),
      HighlightEvent::None => write!(f, "none"),
    }
  }
}

impl FromStr for HighlightEvent {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "click" => Ok(HighlightEvent::Click),
      "hover" => Ok(HighlightEvent::Hover),
      "none" | "off" => Ok(HighlightEvent::None),
      other => Err(format!(
        "unknown highlight event `{other}` (expected click|hover|none)"
      )),
    }
  }
}

/// Neighbor highlighting plus zoom and pan toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMode {
  pub highlight: HighlightEvent,
  pub zoom: bool,
  pub pan: bool,
}

impl Default for InteractionMode {
  fn default() -> Self {
    Self {
      highlight: HighlightEvent::Hover,
      zoom: true,
      pan: true,
    }
  }
}

impl InteractionMode {
  /// No highlighting, no zoom, no pan.
  pub fn fixed() -> Self {
    Self {
      highlight: HighlightEvent::None,
      zoom: false,
      pan: false,
    }
  }

  pub fn with_highlight(mut self, highlight: HighlightEvent) -> Self {
    self.highlight = highlight;
    self
  }
}
