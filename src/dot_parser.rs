//! Graphviz DOT adapter: reads a DOT graph into a [GraphSnapshot].
//!
//! Supported: `graph`/`digraph` (optionally `strict`), node statements with
//! `[k=v, ...]` lists, edge chains `a -> b -> c [k=v]`, `node [...]` and
//! `edge [...]` defaults, and `pos="x,y"` on nodes. `subgraph { ... }` blocks
//! (named or anonymous) contribute their nodes and edges, with `node`/`edge`
//! defaults scoped to the block; a subgraph used as an edge operand stands for
//! every node in it. `graph [...]` attributes and `k=v` assignments are skipped.
//! Attribute values are typed with [AttrValue::infer].

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::error::{VizError, VizResult};
use crate::types::{AttrValue, Attributes, GraphEdge, GraphNode, GraphSnapshot, Position};

/// Parses a DOT source string into a validated snapshot.
#[instrument(level = "trace", skip(source))]
pub fn parse_dot(source: &str) -> VizResult<GraphSnapshot> {
  let source = strip_comments(source);
  let at = |rest: &str| Some(line_of(&source, rest));
  let err = |rest: &str, message: String| VizError::Parse {
    line: at(rest),
    message,
  };

  let mut rest = source.trim_start();
  if let Some(r) = keyword(rest, "strict") {
    rest = r.trim_start();
  }
  let directed = if let Some(r) = keyword(rest, "digraph") {
    rest = r;
    true
  } else if let Some(r) = keyword(rest, "graph") {
    rest = r;
    false
  } else {
    return Err(err(rest, "Expected 'graph' or 'digraph' at start".to_string()));
  };
  rest = rest.trim_start();
  if !rest.starts_with('{') {
    let (_name, r) = parse_id(rest).ok_or_else(|| err(rest, "Expected graph name or '{'".to_string()))?;
    rest = r.trim_start();
  }
  rest = rest
    .strip_prefix('{')
    .ok_or_else(|| err(rest, "Expected '{' after graph name".to_string()))?;

  let mut builder = DotBuilder::new(directed);
  rest = parse_statements(rest, &mut builder).map_err(|(pos, m)| err(pos, m))?;
  if !rest.starts_with('}') {
    return Err(err(rest, "Expected '}' at end of graph".to_string()));
  }

  debug!(
    nodes = builder.nodes.len(),
    edges = builder.edges.len(),
    directed,
    "DOT parsed"
  );
  Ok(GraphSnapshot::new(directed, builder.nodes, builder.edges)?)
}

/// Nodes in first-mention order, edges in statement order, current defaults.
struct DotBuilder {
  directed: bool,
  nodes: Vec<GraphNode>,
  index: HashMap<String, usize>,
  edges: Vec<GraphEdge>,
  node_defaults: AttrList,
  edge_defaults: AttrList,
  /// Ids mentioned in each open subgraph, innermost last.
  scopes: Vec<Vec<String>>,
}

impl DotBuilder {
  fn new(directed: bool) -> Self {
    Self {
      directed,
      nodes: Vec::new(),
      index: HashMap::new(),
      edges: Vec::new(),
      node_defaults: Vec::new(),
      edge_defaults: Vec::new(),
      scopes: Vec::new(),
    }
  }

  /// Creates the node on first mention (with current defaults), then applies `attrs`.
  fn touch_node(&mut self, id: &str, attrs: &[(String, String)]) {
    let i = match self.index.get(id) {
      Some(&i) => i,
      None => {
        let mut node = GraphNode::new(id);
        apply_node_attrs(&mut node, &self.node_defaults);
        self.nodes.push(node);
        self.index.insert(id.to_string(), self.nodes.len() - 1);
        self.nodes.len() - 1
      }
    };
    if let Some(node) = self.nodes.get_mut(i) {
      apply_node_attrs(node, attrs);
    }
    if let Some(scope) = self.scopes.last_mut() {
      scope.push(id.to_string());
    }
  }

  /// Pops the innermost subgraph scope, deduplicated, and folds it into its parent.
  fn close_scope(&mut self) -> Vec<String> {
    let mut seen = HashSet::new();
    let members: Vec<String> = self
      .scopes
      .pop()
      .unwrap_or_default()
      .into_iter()
      .filter(|id| seen.insert(id.clone()))
      .collect();
    if let Some(parent) = self.scopes.last_mut() {
      parent.extend(members.iter().cloned());
    }
    members
  }
}

/// Attribute pairs from `[k=v, ...]` blocks, in source order.
type AttrList = Vec<(String, String)>;

/// Strips `//`, `#` (at line start) and `/* */` comments, keeping newlines.
pub(crate) fn strip_comments(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars().peekable();
  let mut in_quotes = false;
  let mut line_start = true;
  while let Some(c) = chars.next() {
    if in_quotes {
      out.push(c);
      if c == '\\' {
        if let Some(n) = chars.next() {
          out.push(n);
        }
      } else if c == '"' {
        in_quotes = false;
      }
      continue;
    }
    match c {
      '"' => {
        in_quotes = true;
        out.push(c);
      }
      '/' if chars.peek() == Some(&'/') => {
        while chars.peek().is_some_and(|&n| n != '\n') {
          chars.next();
        }
      }
      '#' if line_start => {
        while chars.peek().is_some_and(|&n| n != '\n') {
          chars.next();
        }
      }
      '/' if chars.peek() == Some(&'*') => {
        chars.next();
        let mut prev = ' ';
        for n in chars.by_ref() {
          if prev == '*' && n == '/' {
            break;
          }
          if n == '\n' {
            out.push('\n');
          }
          prev = n;
        }
      }
      _ => out.push(c),
    }
    if c == '\n' {
      line_start = true;
    } else if !c.is_whitespace() {
      line_start = false;
    }
  }
  out
}

/// 1-based line of `rest` within `source` (`rest` must be a suffix of `source`).
fn line_of(source: &str, rest: &str) -> usize {
  let consumed = source.len().saturating_sub(rest.len());
  source[..consumed].matches('\n').count() + 1
}

fn is_id_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_' || c == '.'
}

/// Matches a case-insensitive keyword not followed by an identifier character.
pub(crate) fn keyword<'a>(s: &'a str, kw: &str) -> Option<&'a str> {
  let head = s.get(..kw.len())?;
  if !head.eq_ignore_ascii_case(kw) {
    return None;
  }
  let rest = &s[kw.len()..];
  if rest.chars().next().is_some_and(is_id_char) {
    return None;
  }
  Some(rest)
}

/// Unescapes `\n`, `\t`, `\"` and `\\` in a quoted DOT string; other escapes are kept.
pub(crate) fn unescape_quoted_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut chars = s.chars();
  while let Some(c) = chars.next() {
    if c != '\\' {
      out.push(c);
      continue;
    }
    match chars.next() {
      Some('n') => out.push('\n'),
      Some('t') => out.push('\t'),
      Some('"') => out.push('"'),
      Some('\\') => out.push('\\'),
      Some(other) => {
        out.push('\\');
        out.push(other);
      }
      None => out.push('\\'),
    }
  }
  out
}

/// Parses a DOT id (quoted string, number, or identifier) plus the remainder.
pub(crate) fn parse_id(s: &str) -> Option<(String, &str)> {
  let s = s.trim_start();
  if let Some(body) = s.strip_prefix('"') {
    let mut escaped = false;
    for (i, c) in body.char_indices() {
      match c {
        _ if escaped => escaped = false,
        '\\' => escaped = true,
        '"' => return Some((unescape_quoted_string(&body[..i]), &body[i + 1..])),
        _ => {}
      }
    }
    return None;
  }
  if let Some((num, rest)) = parse_number(s) {
    return Some((num.to_string(), rest));
  }
  let end = s.find(|c: char| !is_id_char(c)).unwrap_or(s.len());
  let first = s.chars().next()?;
  if end == 0 || first.is_ascii_digit() {
    return None;
  }
  Some((s[..end].to_string(), &s[end..]))
}

/// Parses a DOT numeral (`-?(\d+(\.\d*)?|\.\d+)`) plus the remainder.
pub(crate) fn parse_number(s: &str) -> Option<(&str, &str)> {
  let bytes = s.as_bytes();
  let mut end = 0;
  if bytes.first() == Some(&b'-') {
    end += 1;
  }
  let int_start = end;
  while bytes.get(end).is_some_and(u8::is_ascii_digit) {
    end += 1;
  }
  let mut digits = end - int_start;
  if bytes.get(end) == Some(&b'.') {
    end += 1;
    let frac_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
      end += 1;
    }
    digits += end - frac_start;
  }
  if digits == 0 {
    return None;
  }
  if bytes.get(end).is_some_and(|&b| is_id_char(b as char)) {
    return None;
  }
  Some((&s[..end], &s[end..]))
}

/// Parses one or more `[k=v, ...]` blocks and returns the attributes plus the remainder.
pub(crate) fn parse_attr_blocks(s: &str) -> Result<(AttrList, &str), String> {
  let mut attrs = Vec::new();
  let mut rest = s.trim_start();
  while let Some(body) = rest.strip_prefix('[') {
    rest = body.trim_start();
    while !rest.starts_with(']') {
      let (k, r) = parse_id(rest).ok_or("Expected attribute key")?;
      let r = r.trim_start().strip_prefix('=').ok_or("Expected '='")?;
      let (v, r) = parse_id(r).ok_or("Expected attribute value")?;
      attrs.push((k, v));
      rest = r.trim_start();
      rest = rest
        .strip_prefix(',')
        .or_else(|| rest.strip_prefix(';'))
        .unwrap_or(rest)
        .trim_start();
      if rest.is_empty() {
        return Err("Unclosed attribute block".to_string());
      }
    }
    rest = rest[1..].trim_start();
  }
  Ok((attrs, rest))
}

/// Parses `pos` values such as `"1.5,2"` or `"1.5,2!"`.
pub(crate) fn parse_pos(v: &str) -> Option<Position> {
  let v = v.trim().trim_end_matches('!');
  let (x, y) = v.split_once(',')?;
  let x: f64 = x.trim().parse().ok()?;
  let y: f64 = y.trim().parse().ok()?;
  Some(Position::new(x, y))
}

fn apply_node_attrs(node: &mut GraphNode, attrs: &[(String, String)]) {
  for (k, v) in attrs {
    if k == "pos"
      && let Some(p) = parse_pos(v)
    {
      node.position = Some(p);
      continue;
    }
    node.attributes.insert(k.clone(), AttrValue::infer(v));
  }
}

fn to_attributes(attrs: &[(String, String)]) -> Attributes {
  attrs
    .iter()
    .map(|(k, v)| (k.clone(), AttrValue::infer(v)))
    .collect()
}

fn end_statement(s: &str) -> &str {
  let s = s.trim_start();
  s.strip_prefix(';')
    .or_else(|| s.strip_prefix(','))
    .unwrap_or(s)
}

/// A statement failure: where it happened and why.
type Fail<'a> = (&'a str, String);

fn fail<'a>(at: &'a str, message: impl Into<String>) -> Fail<'a> {
  (at, message.into())
}

/// Parses statements into `b` until a closing `}` or the end of input.
fn parse_statements<'a>(mut s: &'a str, b: &mut DotBuilder) -> Result<&'a str, Fail<'a>> {
  s = s.trim_start();
  while !s.is_empty() && !s.starts_with('}') {
    s = parse_statement(s, b)?.trim_start();
  }
  Ok(s)
}

fn starts_subgraph(s: &str) -> bool {
  s.starts_with('{') || keyword(s, "subgraph").is_some()
}

fn starts_edge_op(s: &str) -> bool {
  s.starts_with("->") || s.starts_with("--")
}

/// Parses a single statement into `b`. Returns the unconsumed remainder.
fn parse_statement<'a>(s: &'a str, b: &mut DotBuilder) -> Result<&'a str, Fail<'a>> {
  let s = s.trim_start();
  if let Some(rest) = s.strip_prefix(';') {
    return Ok(rest);
  }
  if starts_subgraph(s) {
    let (members, rest) = parse_subgraph(s, b)?;
    let rest = rest.trim_start();
    if starts_edge_op(rest) {
      return parse_edge_stmt(members, rest, b);
    }
    return Ok(end_statement(rest));
  }
  for (kw, target) in [("graph", 0), ("node", 1), ("edge", 2)] {
    if let Some(rest) = keyword(s, kw)
      && rest.trim_start().starts_with('[')
    {
      let (attrs, rest) = parse_attr_blocks(rest).map_err(|m| fail(s, m))?;
      match target {
        1 => b.node_defaults.extend(attrs),
        2 => b.edge_defaults.extend(attrs),
        _ => {}
      }
      return Ok(end_statement(rest));
    }
  }

  let (id, rest) = parse_id(s).ok_or_else(|| fail(s, "Expected identifier"))?;
  let rest = rest.trim_start();

  if let Some(value) = rest.strip_prefix('=') {
    let (_v, rest) = parse_id(value).ok_or_else(|| fail(s, "Expected value after '='"))?;
    return Ok(end_statement(rest));
  }

  if starts_edge_op(rest) {
    b.touch_node(&id, &[]);
    return parse_edge_stmt(vec![id], rest, b);
  }

  let (attrs, rest) = parse_attr_blocks(rest).map_err(|m| fail(s, m))?;
  b.touch_node(&id, &attrs);
  Ok(end_statement(rest))
}

/// Parses `[subgraph [id]] { stmts }` into `b` with block-scoped `node`/`edge`
/// defaults. Returns the ids mentioned inside the block, in first-mention order.
fn parse_subgraph<'a>(s: &'a str, b: &mut DotBuilder) -> Result<(Vec<String>, &'a str), Fail<'a>> {
  let mut rest = s.trim_start();
  if let Some(r) = keyword(rest, "subgraph") {
    rest = r.trim_start();
    if !rest.starts_with('{') {
      let (_name, r) = parse_id(rest).ok_or_else(|| fail(rest, "Expected subgraph name or '{'"))?;
      rest = r.trim_start();
    }
  }
  let body = rest
    .strip_prefix('{')
    .ok_or_else(|| fail(rest, "Expected '{' to open subgraph"))?;

  let node_defaults = b.node_defaults.clone();
  let edge_defaults = b.edge_defaults.clone();
  b.scopes.push(Vec::new());
  let parsed = parse_statements(body, b);
  b.node_defaults = node_defaults;
  b.edge_defaults = edge_defaults;
  let members = b.close_scope();

  let rest = parsed?;
  let rest = rest
    .strip_prefix('}')
    .ok_or_else(|| fail(s, "Unclosed subgraph"))?;
  Ok((members, rest))
}

/// Parses an edge chain `lhs -> operand (-> operand)* [attrs]` starting after the
/// first operand. Operands are node ids or subgraphs; a subgraph stands for all
/// of its nodes.
fn parse_edge_stmt<'a>(
  from: Vec<String>,
  mut s: &'a str,
  b: &mut DotBuilder,
) -> Result<&'a str, Fail<'a>> {
  let (op, wrong) = if b.directed { ("->", "--") } else { ("--", "->") };
  let mut chain = vec![from];
  loop {
    s = s.trim_start();
    if s.starts_with(wrong) {
      return Err(fail(
        s,
        format!(
          "Edge operator '{wrong}' not allowed in {}",
          if b.directed { "digraph" } else { "graph" }
        ),
      ));
    }
    let Some(after) = s.strip_prefix(op) else {
      break;
    };
    let after = after.trim_start();
    if starts_subgraph(after) {
      let (members, rest) = parse_subgraph(after, b)?;
      chain.push(members);
      s = rest;
    } else {
      let (to, rest) = parse_id(after).ok_or_else(|| fail(after, "Expected target node"))?;
      b.touch_node(&to, &[]);
      chain.push(vec![to]);
      s = rest;
    }
  }

  let (attrs, rest) = parse_attr_blocks(s).map_err(|m| fail(s, m))?;
  let mut merged = b.edge_defaults.clone();
  merged.extend(attrs);
  let attributes = to_attributes(&merged);
  for pair in chain.windows(2) {
    if let [sources, targets] = pair {
      for source in sources {
        for target in targets {
          let mut edge = GraphEdge::new(source.clone(), target.clone());
          edge.attributes = attributes.clone();
          b.edges.push(edge);
        }
      }
    }
  }
  Ok(end_statement(rest))
}
