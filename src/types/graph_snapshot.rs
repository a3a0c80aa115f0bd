//! Immutable, referentially consistent view of the source graph.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use super::{GraphEdge, GraphNode, PositionMap};
use crate::error::ReferenceError;
use crate::layout::Layout;

/// Ordered nodes and edges where every edge endpoint names an existing node.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
  directed: bool,
  nodes: Vec<GraphNode>,
  edges: Vec<GraphEdge>,
  node_index: HashMap<String, usize>,
  edge_index: HashMap<String, usize>,
}

impl GraphSnapshot {
  /// Validates and indexes the graph.
  ///
  /// Edges with an empty id get `source->target#k` (`--` when undirected), where
  /// `k` counts earlier edges between the same endpoints, skipping values whose
  /// id is already taken by another edge.
  #[instrument(level = "trace", skip(nodes, edges))]
  pub fn new(
    directed: bool,
    nodes: Vec<GraphNode>,
    mut edges: Vec<GraphEdge>,
  ) -> Result<Self, ReferenceError> {
    let mut node_index = HashMap::with_capacity(nodes.len());
    for (i, n) in nodes.iter().enumerate() {
      if node_index.insert(n.id.clone(), i).is_some() {
        return Err(ReferenceError::DuplicateNode(n.id.clone()));
      }
    }

    let op = if directed { "->" } else { "--" };
    let reserved: HashSet<String> = edges
      .iter()
      .filter(|e| !e.id.is_empty())
      .map(|e| e.id.clone())
      .collect();
    let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
    let mut edge_index = HashMap::with_capacity(edges.len());
    for (i, e) in edges.iter_mut().enumerate() {
      let key = endpoint_key(directed, &e.source, &e.target);
      let k = pair_counts.entry(key).or_insert(0);
      if e.id.is_empty() {
        loop {
          let id = format!("{}{op}{}#{k}", e.source, e.target);
          *k += 1;
          if !reserved.contains(&id) && !edge_index.contains_key(&id) {
            e.id = id;
            break;
          }
        }
      } else {
        *k += 1;
      }
      for endpoint in [&e.source, &e.target] {
        if !node_index.contains_key(endpoint) {
          return Err(ReferenceError::DanglingEdge {
            edge: e.id.clone(),
            node: endpoint.clone(),
          });
        }
      }
      if edge_index.insert(e.id.clone(), i).is_some() {
        return Err(ReferenceError::DuplicateEdge(e.id.clone()));
      }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), directed, "graph snapshot built");
    Ok(Self {
      directed,
      nodes,
      edges,
      node_index,
      edge_index,
    })
  }

  pub fn is_directed(&self) -> bool {
    self.directed
  }

  pub fn nodes(&self) -> &[GraphNode] {
    &self.nodes
  }

  pub fn edges(&self) -> &[GraphEdge] {
    &self.edges
  }

  pub fn node_index(&self, id: &str) -> Option<usize> {
    self.node_index.get(id).copied()
  }

  pub fn edge_index(&self, id: &str) -> Option<usize> {
    self.edge_index.get(id).copied()
  }

  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.node_index(id).and_then(|i| self.nodes.get(i))
  }

  pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
    self.edge_index(id).and_then(|i| self.edges.get(i))
  }

  /// Returns a copy with the given positions attached (existing ones are replaced).
  pub fn with_positions(&self, positions: &PositionMap) -> Result<Self, ReferenceError> {
    let mut next = self.clone();
    for (id, pos) in positions {
      let i = self
        .node_index(id)
        .ok_or_else(|| ReferenceError::UnknownNode(id.clone()))?;
      next.nodes[i].position = Some(*pos);
    }
    Ok(next)
  }

  /// Returns a copy positioned by `layout`.
  pub fn with_layout(&self, layout: &dyn Layout) -> Result<Self, ReferenceError> {
    self.with_positions(&layout.layout(self))
  }

  /// Incident edge count for every node, in node order.
  ///
  /// Counted from the edge list on each call. A self-loop counts twice.
  pub fn degrees(&self) -> Vec<usize> {
    let mut out = vec![0; self.nodes.len()];
    for e in &self.edges {
      for endpoint in [&e.source, &e.target] {
        if let Some(i) = self.node_index(endpoint) {
          out[i] += 1;
        }
      }
    }
    out
  }

  /// Incoming edge count per node. Equals [degrees](Self::degrees) when undirected.
  pub fn in_degrees(&self) -> Vec<usize> {
    if !self.directed {
      return self.degrees();
    }
    self.count_endpoint(|e| &e.target)
  }

  /// Outgoing edge count per node. Equals [degrees](Self::degrees) when undirected.
  pub fn out_degrees(&self) -> Vec<usize> {
    if !self.directed {
      return self.degrees();
    }
    self.count_endpoint(|e| &e.source)
  }

  fn count_endpoint(&self, pick: impl Fn(&GraphEdge) -> &String) -> Vec<usize> {
    let mut out = vec![0; self.nodes.len()];
    for e in &self.edges {
      if let Some(i) = self.node_index(pick(e)) {
        out[i] += 1;
      }
    }
    out
  }
}

impl PartialEq for GraphSnapshot {
  /// Indices are derived from the element lists, so those alone decide equality.
  fn eq(&self, other: &Self) -> bool {
    self.directed == other.directed && self.nodes == other.nodes && self.edges == other.edges
  }
}

fn endpoint_key(directed: bool, source: &str, target: &str) -> (String, String) {
  if directed || source <= target {
    (source.to_string(), target.to_string())
  } else {
    (target.to_string(), source.to_string())
  }
}
