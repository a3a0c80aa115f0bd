//! Render configuration save/load (JSON) and standalone HTML export.

use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{VizError, VizResult};
use crate::types::{RENDER_CONFIG_VERSION, RenderConfig};

/// Default filename for a render configuration.
pub const CONFIG_FILENAME: &str = "render_config.json";

/// Default filename for the HTML export.
pub const HTML_FILENAME: &str = "graph.html";

/// Saves a render configuration to `path` as pretty JSON.
#[instrument(level = "trace", skip(path, config))]
pub fn save_config(path: &Path, config: &RenderConfig) -> VizResult<()> {
  let json = serde_json::to_string_pretty(config)?;
  write_creating_parent(path, &json)
}

/// Loads a render configuration from `path`.
///
/// Fails on unreadable files, invalid JSON, and configurations whose `version`
/// is newer than this crate writes.
#[instrument(level = "trace", skip(path))]
pub fn load_config(path: &Path) -> VizResult<RenderConfig> {
  let bytes = std::fs::read(path)?;
  let config: RenderConfig = serde_json::from_slice(&bytes)?;
  if config.version > RENDER_CONFIG_VERSION {
    return Err(VizError::parse(format!(
      "render config version {} is newer than supported version {}",
      config.version, RENDER_CONFIG_VERSION
    )));
  }
  Ok(config)
}

/// Renders a self-contained HTML page that draws `config` on a canvas.
#[instrument(level = "trace", skip(config))]
pub fn render_html(config: &RenderConfig, title: &str) -> VizResult<String> {
  let json = embed_json(&serde_json::to_string(config)?);
  let title = escape_html(title);
  let html = [HTML_HEAD, title.as_str(), HTML_BODY, json.as_str(), HTML_SCRIPT].concat();
  debug!(bytes = html.len(), "HTML rendered");
  Ok(html)
}

/// Writes [render_html] output to `path`.
#[instrument(level = "trace", skip(path, config))]
pub fn save_html(path: &Path, config: &RenderConfig, title: &str) -> VizResult<()> {
  let html = render_html(config, title)?;
  write_creating_parent(path, &html)
}

fn write_creating_parent(path: &Path, contents: &str) -> VizResult<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, contents)?;
  Ok(())
}

/// Makes JSON safe inside a `<script>` element.
pub(crate) fn embed_json(json: &str) -> String {
  json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>"#;

const HTML_BODY: &str = r#"</title>
<style>html,body{margin:0;height:100%;font-family:sans-serif}canvas{display:block}</style>
</head>
<body>
<canvas id="graph"></canvas>
<script type="application/json" id="render-config">"#;

const HTML_SCRIPT: &str = r##"</script>
<script>
(function () {
  const cfg = JSON.parse(document.getElementById("render-config").textContent);
  const canvas = document.getElementById("graph");
  const ctx = canvas.getContext("2d");
  const s = cfg.settings;
  canvas.width = s.canvas.width;
  canvas.height = s.canvas.height;
  const byId = new Map(cfg.nodes.map((n) => [n.id, n]));
  const adj = new Map(cfg.nodes.map((n) => [n.id, new Set()]));
  for (const e of cfg.edges) {
    adj.get(e.source).add(e.target);
    adj.get(e.target).add(e.source);
  }
  const xs = cfg.nodes.map((n) => n.x), ys = cfg.nodes.map((n) => n.y);
  const minX = Math.min(...xs, 0), maxX = Math.max(...xs, 1);
  const minY = Math.min(...ys, 0), maxY = Math.max(...ys, 1);
  const pad = 30;
  const fit = Math.min((canvas.width - 2 * pad) / (maxX - minX || 1),
                       (canvas.height - 2 * pad) / (maxY - minY || 1));
  let view = { k: 1, tx: 0, ty: 0 };
  let focus = null;
  const px = (n) => (pad + (n.x - minX) * fit) * view.k + view.tx;
  const py = (n) => (pad + (n.y - minY) * fit) * view.k + view.ty;
  const lit = (id) => focus === null || id === focus || adj.get(focus).has(id);

  function draw() {
    ctx.fillStyle = s.canvas.background;
    ctx.fillRect(0, 0, canvas.width, canvas.height);
    for (const e of cfg.edges) {
      if (!e.visible) continue;
      const a = byId.get(e.source), b = byId.get(e.target);
      if (!a.visible || !b.visible) continue;
      ctx.globalAlpha = focus === null || e.source === focus || e.target === focus ? 1 : 0.15;
      ctx.strokeStyle = e.color;
      ctx.lineWidth = e.width;
      ctx.beginPath();
      ctx.moveTo(px(a), py(a));
      ctx.lineTo(px(b), py(b));
      ctx.stroke();
    }
    for (const n of cfg.nodes) {
      if (!n.visible) continue;
      ctx.globalAlpha = lit(n.id) ? 1 : 0.15;
      ctx.fillStyle = n.color;
      ctx.beginPath();
      ctx.arc(px(n), py(n), n.size / 2, 0, 2 * Math.PI);
      ctx.fill();
      if (n.label !== null) {
        ctx.fillStyle = "#333333";
        ctx.fillText(n.label, px(n) + n.size / 2 + 2, py(n) + 4);
      }
    }
    ctx.globalAlpha = 1;
  }

  function hit(ev) {
    const r = canvas.getBoundingClientRect();
    const x = ev.clientX - r.left, y = ev.clientY - r.top;
    for (let i = cfg.nodes.length - 1; i >= 0; i--) {
      const n = cfg.nodes[i];
      if (n.visible && Math.hypot(px(n) - x, py(n) - y) <= Math.max(n.size / 2, 4)) return n.id;
    }
    return null;
  }

  const mode = s.interaction;
  if (mode.highlight === "click") {
    canvas.addEventListener("click", (ev) => { const id = hit(ev); focus = id === focus ? null : id; draw(); });
  } else if (mode.highlight === "hover") {
    canvas.addEventListener("mousemove", (ev) => { const id = hit(ev); if (id !== focus) { focus = id; draw(); } });
  }
  if (mode.zoom) {
    canvas.addEventListener("wheel", (ev) => {
      ev.preventDefault();
      const f = ev.deltaY < 0 ? 1.1 : 1 / 1.1;
      view.tx = ev.offsetX - (ev.offsetX - view.tx) * f;
      view.ty = ev.offsetY - (ev.offsetY - view.ty) * f;
      view.k *= f;
      draw();
    }, { passive: false });
  }
  if (mode.pan) {
    let drag = null;
    canvas.addEventListener("mousedown", (ev) => { drag = { x: ev.clientX, y: ev.clientY }; });
    window.addEventListener("mouseup", () => { drag = null; });
    window.addEventListener("mousemove", (ev) => {
      if (drag === null) return;
      view.tx += ev.clientX - drag.x;
      view.ty += ev.clientY - drag.y;
      drag = { x: ev.clientX, y: ev.clientY };
      draw();
    });
  }
  draw();
})();
</script>
</body>
</html>
"##;
