//! Tests for `dot_parser`.

use crate::dot_parser::{
  keyword, parse_attr_blocks, parse_dot, parse_id, parse_number, parse_pos, strip_comments,
  unescape_quoted_string,
};
use crate::error::{ReferenceError, VizError};
use crate::types::{AttrValue, Position};

#[test]
fn strip_comments_keeps_line_count() {
  let s = "a // x\n/* one\ntwo */ b\n# pre\nc \"//kept\"";
  let out = strip_comments(s);
  assert_eq!(out.matches('\n').count(), 4);
  assert!(!out.contains("x"));
  assert!(!out.contains("pre"));
  assert!(out.contains("\"//kept\""));
  assert!(out.contains('b'));
}

#[test]
fn parse_id_forms() {
  assert_eq!(parse_id("abc rest"), Some(("abc".to_string(), " rest")));
  assert_eq!(parse_id("\"a b\"x"), Some(("a b".to_string(), "x")));
  assert_eq!(parse_id("-1.5]"), Some(("-1.5".to_string(), "]")));
  assert_eq!(parse_id("2x"), None);
  assert_eq!(parse_id("\"open"), None);
}

#[test]
fn parse_number_forms() {
  assert_eq!(parse_number("42;"), Some(("42", ";")));
  assert_eq!(parse_number(".5 "), Some((".5", " ")));
  assert_eq!(parse_number("-"), None);
  assert_eq!(parse_number("1a"), None);
}

#[test]
fn keyword_needs_boundary() {
  assert_eq!(keyword("digraph G", "digraph"), Some(" G"));
  assert_eq!(keyword("DiGraph{", "digraph"), Some("{"));
  assert_eq!(keyword("graphics", "graph"), None);
}

#[test]
fn unescape_sequences() {
  assert_eq!(unescape_quoted_string(r#"a\"b\\c\nd"#), "a\"b\\c\nd");
  assert_eq!(unescape_quoted_string(r"\l"), r"\l");
}

#[test]
fn attr_blocks_merge() {
  let (attrs, rest) = parse_attr_blocks("[a=1, b=\"x y\"; c=z][d=2];").unwrap();
  let keys: Vec<_> = attrs.iter().map(|(k, _)| k.as_str()).collect();
  assert_eq!(keys, ["a", "b", "c", "d"]);
  assert_eq!(attrs[1].1, "x y");
  assert_eq!(rest, ";");
  assert!(parse_attr_blocks("[a=1").is_err());
  assert!(parse_attr_blocks("[a]").is_err());
}

#[test]
fn parse_pos_values() {
  assert_eq!(parse_pos("1.5,2"), Some(Position::new(1.5, 2.0)));
  assert_eq!(parse_pos("3, 4!"), Some(Position::new(3.0, 4.0)));
  assert_eq!(parse_pos("3"), None);
}

#[test]
fn parse_simple_digraph() {
  let dot = r#"
    digraph G {
      a [group=x, weight=2.5];
      b [group=y];
      a -> b [w=3];
    }
  "#;
  let g = parse_dot(dot).unwrap();
  assert!(g.is_directed());
  assert_eq!(g.nodes().len(), 2);
  assert_eq!(g.node("a").unwrap().attr("weight"), Some(&AttrValue::Number(2.5)));
  assert_eq!(g.node("b").unwrap().attr("group"), Some(&AttrValue::from("y")));
  let e = g.edge("a->b#0").unwrap();
  assert_eq!(e.attr("w"), Some(&AttrValue::Number(3.0)));
}

#[test]
fn implicit_nodes_in_first_mention_order() {
  let dot = "graph { c -- a; b; a -- b }";
  let g = parse_dot(dot).unwrap();
  let ids: Vec<_> = g.nodes().iter().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, ["c", "a", "b"]);
  assert!(!g.is_directed());
  assert!(g.edge("c--a#0").is_some());
}

#[test]
fn edge_chain_and_parallel_edges() {
  let dot = "strict digraph \"my graph\" { a -> b -> c; a -> b [label=second] }";
  let g = parse_dot(dot).unwrap();
  assert_eq!(g.edges().len(), 3);
  assert!(g.edge("b->c#0").is_some());
  let second = g.edge("a->b#1").unwrap();
  assert_eq!(second.attr("label"), Some(&AttrValue::from("second")));
}

#[test]
fn defaults_apply_to_later_elements() {
  let dot = r#"digraph {
    a;
    node [shape=box, score=1];
    edge [kind=dep];
    b [score=2];
    a -> c;
  }"#;
  let g = parse_dot(dot).unwrap();
  assert_eq!(g.node("a").unwrap().attr("shape"), None);
  assert_eq!(g.node("b").unwrap().attr("score"), Some(&AttrValue::Number(2.0)));
  assert_eq!(g.node("c").unwrap().attr("shape"), Some(&AttrValue::from("box")));
  assert_eq!(g.edge("a->c#0").unwrap().attr("kind"), Some(&AttrValue::from("dep")));
}

#[test]
fn node_statements_merge_attributes() {
  let g = parse_dot("graph { a [x=1]; a [y=true] }").unwrap();
  let a = g.node("a").unwrap();
  assert_eq!(a.attr("x"), Some(&AttrValue::Number(1.0)));
  assert_eq!(a.attr("y"), Some(&AttrValue::Bool(true)));
}

#[test]
fn pos_becomes_position() {
  let g = parse_dot(r#"graph { a [pos="10,20!"]; b [pos="bad"] }"#).unwrap();
  assert_eq!(g.node("a").unwrap().position, Some(Position::new(10.0, 20.0)));
  assert!(g.node("a").unwrap().attr("pos").is_none());
  assert!(g.node("b").unwrap().position.is_none());
  assert_eq!(g.node("b").unwrap().attr("pos"), Some(&AttrValue::from("bad")));
}

#[test]
fn graph_attributes_skipped() {
  let dot = r#"digraph {
    rankdir=LR;
    graph [bgcolor=white];
    { rank=same; }
    a -> b
  }"#;
  let g = parse_dot(dot).unwrap();
  let ids: Vec<_> = g.nodes().iter().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, ["a", "b"]);
  assert!(g.node("a").unwrap().attr("bgcolor").is_none());
}

#[test]
fn cluster_contents_are_kept() {
  let g = parse_dot("digraph { a; subgraph cluster_0 { b -> c } a -> b }").unwrap();
  let ids: Vec<_> = g.nodes().iter().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, ["a", "b", "c"]);
  let edges: Vec<_> = g.edges().iter().map(|e| e.id.as_str()).collect();
  assert_eq!(edges, ["b->c#0", "a->b#0"]);
}

#[test]
fn subgraph_defaults_are_scoped() {
  let dot = r#"graph {
    node [tier=outer];
    subgraph cluster_x {
      node [tier=inner];
      edge [kind=local];
      x -- y;
      { z }
    }
    w;
    w -- x;
  }"#;
  let g = parse_dot(dot).unwrap();
  let tier = |id: &str| g.node(id).unwrap().attr("tier").cloned();
  assert_eq!(tier("x"), Some(AttrValue::from("inner")));
  assert_eq!(tier("z"), Some(AttrValue::from("inner")));
  assert_eq!(tier("w"), Some(AttrValue::from("outer")));
  assert_eq!(g.edge("x--y#0").unwrap().attr("kind"), Some(&AttrValue::from("local")));
  assert!(g.edge("w--x#0").unwrap().attr("kind").is_none());
}

#[test]
fn subgraph_as_edge_operand() {
  let g = parse_dot("digraph { a -> { b c } -> d; subgraph s { e f } -> a }").unwrap();
  let edges: Vec<_> = g.edges().iter().map(|e| e.id.as_str()).collect();
  assert_eq!(
    edges,
    ["a->b#0", "a->c#0", "b->d#0", "c->d#0", "e->a#0", "f->a#0"]
  );
}

#[test]
fn errors_inside_subgraph_report_their_line() {
  let err = parse_dot("graph {\n  subgraph s {\n    a;\n    a -> b;\n  }\n}").unwrap_err();
  assert!(matches!(err, VizError::Parse { line: Some(4), .. }));
  assert!(matches!(
    parse_dot("digraph { subgraph s { a -> b "),
    Err(VizError::Parse { .. })
  ));
}

#[test]
fn comments_ignored() {
  let dot = "// header\ndigraph {\n  a -> b; /* c -> d */\n  # e\n}";
  let g = parse_dot(dot).unwrap();
  assert_eq!(g.edges().len(), 1);
}

#[test]
fn wrong_edge_operator_reports_line() {
  let err = parse_dot("graph {\n  a -- b;\n  b -> c;\n}").unwrap_err();
  match err {
    VizError::Parse { line, message } => {
      assert_eq!(line, Some(3));
      assert!(message.contains("->"));
    }
    other => panic!("unexpected {other:?}"),
  }
  assert!(parse_dot("digraph { a -- b }").is_err());
}

#[test]
fn malformed_sources_fail() {
  assert!(matches!(parse_dot("tree { }"), Err(VizError::Parse { .. })));
  assert!(matches!(parse_dot("digraph { a -> b"), Err(VizError::Parse { .. })));
  assert!(matches!(parse_dot("digraph { a [x=1 }"), Err(VizError::Parse { .. })));
}

#[test]
fn empty_graph() {
  let g = parse_dot("digraph {}").unwrap();
  assert!(g.nodes().is_empty());
  assert!(g.edges().is_empty());
}

#[test]
fn snapshot_errors_surface_as_reference_errors() {
  // Every edge endpoint is created implicitly, so only the snapshot's own checks remain.
  let g = parse_dot("digraph { a -> a }").unwrap();
  assert_eq!(g.degrees(), vec![2]);
  let err: VizError = ReferenceError::UnknownNode("x".into()).into();
  assert!(err.is_reference());
}
