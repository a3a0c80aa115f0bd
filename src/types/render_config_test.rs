//! Tests for the `RenderConfig` wire format.

use super::{
  CanvasSettings, Color, EdgeRecord, HighlightEvent, InteractionMode, NodeRecord,
  RENDER_CONFIG_VERSION, RenderConfig, RenderSettings,
};

fn sample() -> RenderConfig {
  RenderConfig {
    version: RENDER_CONFIG_VERSION,
    nodes: vec![NodeRecord {
      id: "a".to_string(),
      x: 1.0,
      y: -2.0,
      size: 5.0,
      color: Color::rgb(31, 119, 180),
      label: None,
      visible: true,
    }],
    edges: vec![EdgeRecord {
      id: "a->a#0".to_string(),
      source: "a".to_string(),
      target: "a".to_string(),
      width: 1.0,
      color: Color::rgb(153, 153, 153),
      visible: false,
    }],
    settings: RenderSettings {
      directed: true,
      interaction: InteractionMode::default().with_highlight(HighlightEvent::Click),
      canvas: CanvasSettings::default(),
    },
  }
}

#[test]
fn serializes_stable_field_names() {
  let parsed: serde_json::Value = serde_json::to_value(sample()).unwrap();
  assert_eq!(parsed["version"], 1);
  assert_eq!(parsed["nodes"][0]["id"], "a");
  assert_eq!(parsed["nodes"][0]["x"], 1.0);
  assert_eq!(parsed["nodes"][0]["color"], "#1f77b4");
  assert!(parsed["nodes"][0]["label"].is_null());
  assert_eq!(parsed["nodes"][0]["visible"], true);
  assert_eq!(parsed["edges"][0]["source"], "a");
  assert_eq!(parsed["edges"][0]["width"], 1.0);
  assert_eq!(parsed["edges"][0]["visible"], false);
  assert_eq!(parsed["settings"]["directed"], true);
  assert_eq!(parsed["settings"]["interaction"]["highlight"], "click");
  assert_eq!(parsed["settings"]["interaction"]["zoom"], true);
  assert_eq!(parsed["settings"]["canvas"]["background"], "#ffffff");
}

#[test]
fn canvas_settings_fill_missing_fields() {
  let c: CanvasSettings = serde_json::from_str(r#"{"width": 400}"#).unwrap();
  assert_eq!(c.width, 400.0);
  assert_eq!(c.height, CanvasSettings::default().height);
}
