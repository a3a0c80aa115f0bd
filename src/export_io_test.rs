//! Tests for render config save/load and HTML export.

use crate::error::VizError;
use crate::export_io::{
  CONFIG_FILENAME, HTML_FILENAME, embed_json, escape_html, load_config, render_html, save_config,
  save_html,
};
use crate::types::{
  CanvasSettings, Color, InteractionMode, NodeRecord, RENDER_CONFIG_VERSION, RenderConfig,
  RenderSettings,
};

fn sample(label: Option<&str>) -> RenderConfig {
  RenderConfig {
    version: RENDER_CONFIG_VERSION,
    nodes: vec![NodeRecord {
      id: "a".to_string(),
      x: 0.0,
      y: 0.0,
      size: 10.0,
      color: Color::rgb(31, 119, 180),
      label: label.map(str::to_string),
      visible: true,
    }],
    edges: vec![],
    settings: RenderSettings {
      directed: false,
      interaction: InteractionMode::default(),
      canvas: CanvasSettings::default(),
    },
  }
}

#[test]
fn roundtrip_save_load() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("out").join(CONFIG_FILENAME);
  let cfg = sample(Some("A"));
  save_config(&path, &cfg).unwrap();
  assert!(path.exists());
  assert_eq!(load_config(&path).unwrap(), cfg);
}

#[test]
fn load_missing_file_returns_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_config(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(VizError::Io(_))));
}

#[test]
fn load_invalid_json_returns_json_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILENAME);
  std::fs::write(&path, "{\"version\": 1").unwrap();
  assert!(matches!(load_config(&path), Err(VizError::Json(_))));
}

#[test]
fn load_rejects_newer_version() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(CONFIG_FILENAME);
  let mut cfg = sample(None);
  cfg.version = RENDER_CONFIG_VERSION + 1;
  save_config(&path, &cfg).unwrap();
  assert!(matches!(load_config(&path), Err(VizError::Parse { .. })));
}

#[test]
fn html_embeds_escaped_config() {
  let cfg = sample(Some("</script><script>alert(1)</script>"));
  let html = render_html(&cfg, "a <b> & c").unwrap();
  assert!(html.contains(r#"<script type="application/json" id="render-config">{"version":1"#));
  assert!(html.contains(r"<\/script><script>alert(1)<\/script>"));
  assert!(!html.contains("alert(1)</script>"));
  assert!(html.contains("<title>a &lt;b&gt; &amp; c</title>"));
  assert!(html.contains("mode.highlight === \"hover\""));
}

#[test]
fn save_html_writes_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(HTML_FILENAME);
  save_html(&path, &sample(None), "g").unwrap();
  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.starts_with("<!DOCTYPE html>"));
  assert!(text.contains("\"label\":null"));
}

#[test]
fn html_script_is_complete() {
  let html = render_html(&sample(Some("x")), "g").unwrap();
  assert!(html.contains("ctx.fillStyle = \"#333333\";"));
  assert!(html.contains("draw();\n})();\n</script>"));
  assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn escaping_helpers() {
  assert_eq!(embed_json("a</b<!--c"), r"a<\/b<\!--c");
  assert_eq!(escape_html("\"'"), "&quot;&#39;");
}
