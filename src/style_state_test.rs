//! Tests for `StyleState` baseline, targets and copy-on-write.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::StyleDefaults;
use crate::error::{ReferenceError, VizError};
use crate::style_state::{StyleState, Targets};
use crate::types::{Color, GraphEdge, GraphNode, GraphSnapshot, Position};

fn graph() -> GraphSnapshot {
  GraphSnapshot::new(
    true,
    vec![GraphNode::new("a"), GraphNode::new("b"), GraphNode::new("c")],
    vec![GraphEdge::new("a", "b"), GraphEdge::new("b", "c")],
  )
  .unwrap()
}

#[test]
fn baseline_uses_defaults() {
  let s = StyleState::new(graph());
  let d = StyleDefaults::default();
  for (_, style) in s.node_styles() {
    assert_eq!(style.size, d.node_size);
    assert_eq!(style.color, d.node_color);
    assert!(style.label.is_none());
    assert!(style.visible);
  }
  assert_eq!(s.edge_styles().count(), 2);
  assert_eq!(s.edge_style("a->b#0").unwrap().color, d.edge_color);
}

#[test]
fn custom_defaults_apply() {
  let defaults = StyleDefaults {
    node_size: 3.0,
    node_color: Color::rgb(1, 2, 3),
    ..StyleDefaults::default()
  };
  let s = StyleState::with_defaults(Arc::new(graph()), defaults);
  assert_eq!(s.node_style("c").unwrap().size, 3.0);
  assert_eq!(s.node_style("c").unwrap().color, Color::rgb(1, 2, 3));
}

#[test]
fn targets_resolve_in_caller_order() {
  let s = StyleState::new(graph());
  assert_eq!(s.node_targets(&Targets::All).unwrap(), vec![0, 1, 2]);
  assert_eq!(s.node_targets(&Targets::ids(["c", "a"])).unwrap(), vec![2, 0]);
  assert_eq!(s.edge_targets(&Targets::ids(["b->c#0"])).unwrap(), vec![1]);
}

#[test]
fn unknown_targets_are_reference_errors() {
  let s = StyleState::new(graph());
  assert!(matches!(
    s.node_targets(&Targets::ids(["z"])),
    Err(VizError::Reference(ReferenceError::UnknownNode(id))) if id == "z"
  ));
  assert!(matches!(
    s.edge_targets(&Targets::ids(["a->c#0"])),
    Err(VizError::Reference(ReferenceError::UnknownEdge(_)))
  ));
}

#[test]
fn writers_touch_one_field() {
  let mut s = StyleState::new(graph());
  s.set_node_size(1, 7.0);
  s.set_node_label(1, Some("B".into()));
  s.set_edge_visible(0, false);
  s.set_node_size(99, 1.0);
  let b = s.node_style("b").unwrap();
  assert_eq!(b.size, 7.0);
  assert_eq!(b.label.as_deref(), Some("B"));
  assert_eq!(b.color, StyleDefaults::default().node_color);
  assert!(!s.edge_style("a->b#0").unwrap().visible);
  assert_eq!(s.edge_style("a->b#0").unwrap().width, 1.0);
}

#[test]
fn with_positions_is_copy_on_write() {
  let base = StyleState::new(graph());
  let mut pos = HashMap::new();
  pos.insert("a".to_string(), Position::new(1.0, 2.0));
  let placed = base.with_positions(&pos).unwrap();
  assert_eq!(placed.graph().node("a").unwrap().position, Some(Position::new(1.0, 2.0)));
  assert!(base.graph().node("a").unwrap().position.is_none());

  pos.insert("zz".to_string(), Position::new(0.0, 0.0));
  assert!(base.with_positions(&pos).unwrap_err().is_reference());
}
