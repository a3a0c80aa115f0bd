//! CLI: Turn a graph file into a render configuration (JSON) or a standalone HTML page.
//!
//! Input format comes from the extension: `.dot`/`.gv`, `.json` (node-link) or
//! `.csv` (edge list, optional `--nodes` table).
//!
//! Usage: `render_graph [OPTIONS] <input>`
//! Example: render_graph --size-by degree --color-by group --format html --out g.html graph.dot
//!
//! Set RUST_LOG=streamweave_netviz=trace for TRACE-level span enter/exit and events.

use clap::{Parser, ValueEnum};
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use streamweave_netviz::{
  AssembleOptions, CircularLayout, ColorEdges, ColorNodes, HighlightEvent, InteractionMode,
  LabelNodes, MissingPositions, NodeMetric, RenderConfig, SizeEdges, SizeNodes, SourceOptions,
  StyleState, VizConfig, VizResult, assemble, export_io, read_graph_file,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
  Json,
  Html,
}

/// Turn a graph file into a render configuration.
#[derive(Parser, Debug)]
#[command(name = "render_graph")]
#[command(
  after_help = r#"Environment variables (override flags when set):
  NETVIZ_FORMAT   Output format, json or html (overrides --format).

Examples:
  render_graph graph.dot
  render_graph --size-by degree --color-by group --label-by id graph.json
  render_graph --format html --out graph.html --circle-fallback edges.csv"#
)]
struct Args {
  /// Output format. Overridden by NETVIZ_FORMAT if set.
  #[arg(long, value_enum, default_value = "json")]
  format: OutputFormat,

  /// Output file. Default: stdout.
  #[arg(long, value_name = "PATH")]
  out: Option<PathBuf>,

  /// Size nodes by degree, in-degree, out-degree or a numeric attribute.
  #[arg(long, value_name = "METRIC")]
  size_by: Option<NodeMetric>,

  /// Use a logarithmic scale for --size-by.
  #[arg(long)]
  log_size: bool,

  /// Color nodes by an attribute or a degree metric.
  #[arg(long, value_name = "METRIC")]
  color_by: Option<NodeMetric>,

  /// Treat --color-by values as categories even when numeric.
  #[arg(long)]
  categorical: bool,

  /// Label nodes by an attribute, or `id`.
  #[arg(long, value_name = "ATTR")]
  label_by: Option<String>,

  /// Set edge width from a numeric edge attribute.
  #[arg(long, value_name = "ATTR")]
  edge_width_by: Option<String>,

  /// Color edges by an edge attribute.
  #[arg(long, value_name = "ATTR")]
  edge_color_by: Option<String>,

  /// Neighbor highlighting trigger: click, hover or none. Defaults to hover,
  /// or none with --fixed.
  #[arg(long, value_name = "EVENT")]
  highlight: Option<HighlightEvent>,

  /// Disable highlighting, zoom and pan in the renderer.
  #[arg(long)]
  fixed: bool,

  /// Place nodes without positions on a circle instead of failing.
  #[arg(long)]
  circle_fallback: bool,

  /// JSON config with style defaults, canvas and default ranges.
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Node table for CSV edge lists.
  #[arg(long, value_name = "PATH")]
  nodes: Option<PathBuf>,

  /// Treat CSV edge lists as directed.
  #[arg(long)]
  directed: bool,

  /// Path to the graph file (.dot, .gv, .json, .csv)
  #[arg(value_name = "input")]
  input: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("render_graph starting");
  let args = Args::parse();

  // Env vars override flags.
  let format = match env::var("NETVIZ_FORMAT") {
    Ok(v) => match OutputFormat::from_str(&v, true) {
      Ok(f) => f,
      Err(e) => {
        eprintln!("Invalid NETVIZ_FORMAT: {}", e);
        process::exit(1);
      }
    },
    Err(_) => args.format,
  };
  info!(format = ?format, input = %args.input.display(), "options (env or flags)");

  let config = match &args.config {
    Some(path) => match VizConfig::from_json_file(path) {
      Ok(c) => c,
      Err(e) => {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
      }
    },
    None => VizConfig::default(),
  };

  let render = match build(&args, &config) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  if let Err(e) = write_output(&render, format, args.out.as_deref(), &args.input) {
    eprintln!("Error writing output: {}", e);
    process::exit(1);
  }
  info!(
    nodes = render.nodes.len(),
    edges = render.edges.len(),
    "render_graph completed"
  );
}

/// Reads the graph and runs the requested encodings.
fn build(args: &Args, config: &VizConfig) -> VizResult<RenderConfig> {
  let graph = read_graph_file(
    &args.input,
    &SourceOptions {
      nodes: args.nodes.as_deref(),
      directed: args.directed,
    },
  )?;
  let mut state = StyleState::with_defaults(Arc::new(graph), config.styles.clone());

  if let Some(metric) = &args.size_by {
    let range = config.node_size_range;
    let mut op = SizeNodes::by(metric.clone()).range(range.min, range.max);
    if args.log_size {
      op = op.log();
    }
    state = state.size_nodes(&op)?;
  }
  if let Some(metric) = &args.color_by {
    let mut op = ColorNodes::by(metric.clone());
    if args.categorical {
      op = op.categorical();
    }
    state = state.color_nodes(&op)?;
  }
  if let Some(source) = &args.label_by {
    let op = if source == "id" {
      LabelNodes::by_id()
    } else {
      LabelNodes::by_attribute(source.as_str())
    };
    state = state.label_nodes(&op)?;
  }
  if let Some(attr) = &args.edge_width_by {
    let range = config.edge_width_range;
    state = state.size_edges(&SizeEdges::by_attribute(attr.as_str()).range(range.min, range.max))?;
  }
  if let Some(attr) = &args.edge_color_by {
    state = state.color_edges(&ColorEdges::by_attribute(attr.as_str()))?;
  }

  let interaction = if args.fixed {
    InteractionMode::fixed()
  } else {
    InteractionMode::default()
  };
  let interaction = match args.highlight {
    Some(event) => interaction.with_highlight(event),
    None => interaction,
  };
  state = state.set_interaction(interaction);

  let options = AssembleOptions {
    canvas: config.canvas.clone(),
    missing_positions: if args.circle_fallback {
      MissingPositions::Circle(CircularLayout::default())
    } else {
      MissingPositions::Reject
    },
  };
  assemble(&state, &options)
}

fn write_output(
  render: &RenderConfig,
  format: OutputFormat,
  out: Option<&Path>,
  input: &Path,
) -> VizResult<()> {
  let title = input
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_else(|| "graph".to_string());
  match (format, out) {
    (OutputFormat::Json, Some(path)) => export_io::save_config(path, render),
    (OutputFormat::Html, Some(path)) => export_io::save_html(path, render, &title),
    (OutputFormat::Json, None) => {
      let json = serde_json::to_string_pretty(render)?;
      writeln!(std::io::stdout(), "{}", json)?;
      Ok(())
    }
    (OutputFormat::Html, None) => {
      let html = export_io::render_html(render, &title)?;
      write!(std::io::stdout(), "{}", html)?;
      Ok(())
    }
  }
}
