//! Tests for edge width and edge color encodings.

use super::{ColorEdges, ColorScheme, SizeEdges, SizeNodes};
use crate::error::{ConfigurationError, ReferenceError, VizError};
use crate::scales::CATEGORY10;
use crate::style_state::{StyleState, Targets};
use crate::types::{Color, GraphEdge, GraphNode, GraphSnapshot};

fn weighted() -> StyleState {
  let g = GraphSnapshot::new(
    true,
    vec![GraphNode::new("a"), GraphNode::new("b"), GraphNode::new("c")],
    vec![
      GraphEdge::new("a", "b").with_attr("weight", 1.0).with_attr("kind", "road"),
      GraphEdge::new("b", "c").with_attr("weight", 5.0).with_attr("kind", "rail"),
      GraphEdge::new("a", "b").with_attr("kind", "road"),
    ],
  )
  .unwrap();
  StyleState::new(g)
}

#[test]
fn edge_width_interpolates_with_min_fallback() {
  let s = weighted()
    .size_edges(&SizeEdges::by_attribute("weight").range(1.0, 3.0))
    .unwrap();
  assert_eq!(s.edge_style("a->b#0").unwrap().width, 1.0);
  assert_eq!(s.edge_style("b->c#0").unwrap().width, 3.0);
  assert_eq!(s.edge_style("a->b#1").unwrap().width, 1.0);
}

#[test]
fn edge_width_missing_attribute() {
  let err = weighted()
    .size_edges(&SizeEdges::by_attribute("capacity"))
    .unwrap_err();
  assert!(matches!(
    err,
    VizError::Configuration(ConfigurationError::MissingAttribute { .. })
  ));
}

#[test]
fn edge_color_categorical() {
  let s = weighted()
    .color_edges(&ColorEdges::by_attribute("kind"))
    .unwrap();
  assert_eq!(s.edge_style("a->b#0").unwrap().color, CATEGORY10[0]);
  assert_eq!(s.edge_style("a->b#1").unwrap().color, CATEGORY10[0]);
  assert_eq!(s.edge_style("b->c#0").unwrap().color, CATEGORY10[1]);
}

#[test]
fn edge_color_continuous_neutral_for_missing() {
  let base = weighted();
  let s = base
    .color_edges(&ColorEdges::by_attribute("weight").scheme(ColorScheme::continuous()))
    .unwrap();
  assert_eq!(
    s.edge_style("a->b#1").unwrap().color,
    base.defaults().neutral_color
  );
}

#[test]
fn fill_edges_and_unknown_edge() {
  let blue = Color::rgb(0, 0, 255);
  let s = weighted().fill_edges(blue, &Targets::All).unwrap();
  assert!(s.edge_styles().all(|(_, st)| st.color == blue));

  let err = weighted()
    .fill_edges(blue, &Targets::ids(["a->c#0"]))
    .unwrap_err();
  assert!(matches!(
    err,
    VizError::Reference(ReferenceError::UnknownEdge(_))
  ));
}

#[test]
fn edge_ops_leave_nodes_alone() {
  let base = weighted().size_nodes(&SizeNodes::by_degree()).unwrap();
  let s = base
    .size_edges(&SizeEdges::by_attribute("weight"))
    .unwrap();
  let before: Vec<_> = base.node_styles().map(|(_, st)| st.clone()).collect();
  let after: Vec<_> = s.node_styles().map(|(_, st)| st.clone()).collect();
  assert_eq!(before, after);
}
