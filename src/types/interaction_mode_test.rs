//! Tests for `InteractionMode` and `HighlightEvent`.

use super::{HighlightEvent, InteractionMode};

#[test]
fn display_spellings() {
  assert_eq!(HighlightEvent::Click.to_string(), "click");
  assert_eq!(HighlightEvent::Hover.to_string(), "hover");
  assert_eq!(HighlightEvent::None.to_string(), "none");
}

#[test]
fn parse_spellings() {
  assert_eq!("CLICK".parse::<HighlightEvent>(), Ok(HighlightEvent::Click));
  assert_eq!("off".parse::<HighlightEvent>(), Ok(HighlightEvent::None));
  assert!("double-click".parse::<HighlightEvent>().is_err());
}

#[test]
fn serde_matches_display() {
  for ev in [HighlightEvent::Click, HighlightEvent::Hover, HighlightEvent::None] {
    let json = serde_json::to_string(&ev).unwrap();
    assert_eq!(json, format!("\"{ev}\""));
  }
}

#[test]
fn default_is_hover_with_zoom_and_pan() {
  let m = InteractionMode::default();
  assert_eq!(m.highlight, HighlightEvent::Hover);
  assert!(m.zoom);
  assert!(m.pan);
  let f = InteractionMode::fixed().with_highlight(HighlightEvent::Click);
  assert_eq!(f.highlight, HighlightEvent::Click);
  assert!(!f.zoom);
}
