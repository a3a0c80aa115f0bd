//! Reads a graph file, picking the adapter from its extension.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, instrument};

use crate::error::{VizError, VizResult};
use crate::types::GraphSnapshot;
use crate::{csv_source, dot_parser, json_source};

/// Input graph formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
  /// Graphviz DOT (`.dot`, `.gv`).
  Dot,
  /// Node-link JSON (`.json`).
  NodeLink,
  /// CSV edge list (`.csv`).
  EdgeList,
}

impl GraphFormat {
  /// Detects the format from the file extension (case-insensitive).
  pub fn from_path(path: &Path) -> VizResult<Self> {
    let ext = path
      .extension()
      .and_then(|e| e.to_str())
      .unwrap_or_default();
    ext.parse()
  }
}

impl FromStr for GraphFormat {
  type Err = VizError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "dot" | "gv" => Ok(GraphFormat::Dot),
      "json" => Ok(GraphFormat::NodeLink),
      "csv" => Ok(GraphFormat::EdgeList),
      other => Err(VizError::parse(format!(
        "unsupported graph format {other:?} (expected dot, gv, json or csv)"
      ))),
    }
  }
}

/// Options for [read_graph_file]. Only edge lists use them; DOT and JSON carry
/// their own directedness and node tables.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions<'a> {
  /// Node table for edge lists.
  pub nodes: Option<&'a Path>,
  /// Whether an edge list is directed.
  pub directed: bool,
}

/// Reads and validates the graph at `path`.
#[instrument(level = "trace", skip(options))]
pub fn read_graph_file(path: &Path, options: &SourceOptions<'_>) -> VizResult<GraphSnapshot> {
  let format = GraphFormat::from_path(path)?;
  let graph = match format {
    GraphFormat::Dot => dot_parser::parse_dot(&std::fs::read_to_string(path)?)?,
    GraphFormat::NodeLink => json_source::parse_node_link(&std::fs::read_to_string(path)?)?,
    GraphFormat::EdgeList => {
      let nodes = options.nodes.map(File::open).transpose()?;
      csv_source::read_edge_list(File::open(path)?, nodes, options.directed)?
    }
  };
  info!(
    path = %path.display(),
    format = ?format,
    nodes = graph.nodes().len(),
    edges = graph.edges().len(),
    "graph loaded"
  );
  Ok(graph)
}
