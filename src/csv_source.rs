//! CSV edge-list adapter, with an optional node table.
//!
//! The edge table needs `source` and `target` headers; every other column is an
//! edge attribute. The node table needs an `id` header; numeric `x` and `y`
//! columns become the position and the rest are node attributes. Empty cells are
//! absent values; other cells are typed with [AttrValue::infer].
//!
//! Node order is the node table first, then endpoints the table does not name, in
//! first-mention order.

use std::collections::HashSet;
use std::io::Read;

use tracing::{debug, instrument};

use crate::error::{VizError, VizResult};
use crate::types::{AttrValue, Attributes, GraphEdge, GraphNode, GraphSnapshot, Position};

/// Reads an edge list (and optionally a node table) into a validated snapshot.
#[instrument(level = "trace", skip(edges, nodes))]
pub fn read_edge_list<E: Read, N: Read>(
  edges: E,
  nodes: Option<N>,
  directed: bool,
) -> VizResult<GraphSnapshot> {
  let mut graph_nodes = match nodes {
    Some(reader) => read_node_table(reader)?,
    None => Vec::new(),
  };
  let mut known: HashSet<String> = graph_nodes.iter().map(|n| n.id.clone()).collect();

  let mut reader = csv::Reader::from_reader(edges);
  let headers = reader.headers()?.clone();
  let source_col = column(&headers, "source")?;
  let target_col = column(&headers, "target")?;

  let mut graph_edges = Vec::new();
  for record in reader.records() {
    let record = record?;
    let source = record.get(source_col).unwrap_or_default().to_string();
    let target = record.get(target_col).unwrap_or_default().to_string();
    for id in [&source, &target] {
      if known.insert(id.clone()) {
        graph_nodes.push(GraphNode::new(id.clone()));
      }
    }
    let mut edge = GraphEdge::new(source, target);
    edge.attributes = cells(&headers, &record, &[source_col, target_col]);
    graph_edges.push(edge);
  }

  debug!(
    nodes = graph_nodes.len(),
    edges = graph_edges.len(),
    directed,
    "edge list read"
  );
  Ok(GraphSnapshot::new(directed, graph_nodes, graph_edges)?)
}

/// Reads a node table with an `id` column.
#[instrument(level = "trace", skip(nodes))]
pub fn read_node_table<N: Read>(nodes: N) -> VizResult<Vec<GraphNode>> {
  let mut reader = csv::Reader::from_reader(nodes);
  let headers = reader.headers()?.clone();
  let id_col = column(&headers, "id")?;

  let mut out = Vec::new();
  for record in reader.records() {
    let record = record?;
    let mut node = GraphNode::new(record.get(id_col).unwrap_or_default());
    let mut attributes = cells(&headers, &record, &[id_col]);
    let x = attributes.get("x").and_then(AttrValue::as_number);
    let y = attributes.get("y").and_then(AttrValue::as_number);
    if let (Some(x), Some(y)) = (x, y) {
      attributes.remove("x");
      attributes.remove("y");
      node.position = Some(Position::new(x, y));
    }
    node.attributes = attributes;
    out.push(node);
  }
  Ok(out)
}

fn column(headers: &csv::StringRecord, name: &str) -> VizResult<usize> {
  headers
    .iter()
    .position(|h| h.trim() == name)
    .ok_or_else(|| VizError::Parse {
      line: Some(1),
      message: format!("missing '{name}' column"),
    })
}

fn cells(headers: &csv::StringRecord, record: &csv::StringRecord, skip: &[usize]) -> Attributes {
  headers
    .iter()
    .zip(record.iter())
    .enumerate()
    .filter(|(i, (_, cell))| !skip.contains(i) && !cell.trim().is_empty())
    .map(|(_, (h, cell))| (h.trim().to_string(), AttrValue::infer(cell.trim())))
    .collect()
}
