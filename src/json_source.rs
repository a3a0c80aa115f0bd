//! Node-link JSON adapter.
//!
//! ```json
//! { "directed": true,
//!   "nodes": [{"id": "a", "group": "x", "x": 0, "y": 1}],
//!   "links": [{"source": "a", "target": "b", "weight": 2}] }
//! ```
//!
//! `edges` is accepted in place of `links`. Ids may be strings or numbers. Numeric
//! `x` and `y` on a node become its position. An `id` on a link becomes the edge's
//! explicit id. Nested arrays and objects are kept as their JSON text; `null` is
//! treated as absent.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{VizError, VizResult};
use crate::types::{AttrValue, Attributes, GraphEdge, GraphNode, GraphSnapshot, Position};

#[derive(Debug, Deserialize)]
struct NodeLinkDocument {
  #[serde(default)]
  directed: bool,
  #[serde(default)]
  nodes: Vec<RawNode>,
  #[serde(default, alias = "edges")]
  links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
  id: RawId,
  #[serde(flatten)]
  rest: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RawLink {
  source: RawId,
  target: RawId,
  #[serde(default)]
  id: Option<RawId>,
  #[serde(flatten)]
  rest: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
  Text(String),
  Number(serde_json::Number),
}

impl From<RawId> for String {
  fn from(id: RawId) -> Self {
    match id {
      RawId::Text(s) => s,
      RawId::Number(n) => n.to_string(),
    }
  }
}

/// Parses node-link JSON into a validated snapshot.
#[instrument(level = "trace", skip(source))]
pub fn parse_node_link(source: &str) -> VizResult<GraphSnapshot> {
  let doc: NodeLinkDocument = serde_json::from_str(source).map_err(|e| VizError::Parse {
    line: Some(e.line()),
    message: e.to_string(),
  })?;

  let nodes: Vec<GraphNode> = doc.nodes.into_iter().map(to_node).collect();
  let edges: Vec<GraphEdge> = doc
    .links
    .into_iter()
    .map(|link| {
      let mut edge = GraphEdge::new(link.source, link.target);
      if let Some(id) = link.id {
        edge.id = id.into();
      }
      edge.attributes = to_attributes(link.rest);
      edge
    })
    .collect();

  debug!(
    nodes = nodes.len(),
    edges = edges.len(),
    directed = doc.directed,
    "node-link JSON parsed"
  );
  Ok(GraphSnapshot::new(doc.directed, nodes, edges)?)
}

fn to_node(raw: RawNode) -> GraphNode {
  let mut rest = raw.rest;
  let mut node = GraphNode::new(raw.id);
  let x = rest.get("x").and_then(Value::as_f64);
  let y = rest.get("y").and_then(Value::as_f64);
  if let (Some(x), Some(y)) = (x, y) {
    rest.remove("x");
    rest.remove("y");
    node.position = Some(Position::new(x, y));
  }
  node.attributes = to_attributes(rest);
  node
}

fn to_attributes(raw: BTreeMap<String, Value>) -> Attributes {
  raw
    .into_iter()
    .filter_map(|(k, v)| json_to_attr(v).map(|v| (k, v)))
    .collect()
}

/// Converts a JSON value to an attribute; `null` and non-finite numbers are dropped.
pub(crate) fn json_to_attr(v: Value) -> Option<AttrValue> {
  match v {
    Value::Null => None,
    Value::Bool(b) => Some(AttrValue::Bool(b)),
    Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(AttrValue::Number),
    Value::String(s) => Some(AttrValue::Text(s)),
    other @ (Value::Array(_) | Value::Object(_)) => Some(AttrValue::Text(other.to_string())),
  }
}
