//! # streamweave-netviz
//!
//! Turns an attributed graph into a render configuration: node sizes, colors and
//! labels, edge widths and colors, visibility and interaction settings, all
//! derived from graph attributes and structural metrics.
//!
//! ## Architecture
//!
//! ```text
//! adapter (dot_parser | json_source | csv_source)
//!   -> GraphSnapshot -> StyleState::new
//!   -> size_nodes / color_nodes / label_nodes / ... (each returns a new StyleState)
//!   -> assemble -> RenderConfig -> export_io
//! ```
//!
//! - [scales]: pure value-to-encoding mappers fitted to the observed domain.
//! - [StyleState]: per-element style records over a shared snapshot. Every
//!   operation is copy-on-write.
//! - [encodings]: the pipeline steps, one field set each.
//! - [assemble]: validates and flattens a state into a [RenderConfig].
//!
//! ```
//! use streamweave_netviz::{
//!   AssembleOptions, ColorNodes, GraphEdge, GraphNode, GraphSnapshot, SizeNodes, StyleState,
//!   assemble,
//! };
//!
//! let graph = GraphSnapshot::new(
//!   false,
//!   vec![
//!     GraphNode::new("a").at(0.0, 0.0).with_attr("group", "x"),
//!     GraphNode::new("b").at(1.0, 0.0).with_attr("group", "y"),
//!   ],
//!   vec![GraphEdge::new("a", "b")],
//! )?;
//! let state = StyleState::new(graph)
//!   .size_nodes(&SizeNodes::by_degree())?
//!   .color_nodes(&ColorNodes::by_attribute("group"))?;
//! let config = assemble(&state, &AssembleOptions::default())?;
//! assert_eq!(config.nodes.len(), 2);
//! # Ok::<(), streamweave_netviz::VizError>(())
//! ```

pub mod assembler;
pub mod config;
pub mod csv_source;
pub mod dot_parser;
#[cfg(test)]
mod dot_parser_test;
pub mod encodings;
pub mod error;
pub mod export_io;
#[cfg(test)]
mod export_io_test;
pub mod graph_source;
pub mod json_source;
pub mod layout;
pub mod scales;
pub mod style_state;
#[cfg(test)]
mod style_state_test;
pub mod types;

pub use assembler::{AssembleOptions, MissingPositions, assemble};
pub use config::{SizeRange, StyleDefaults, VizConfig};
pub use encodings::{
  ColorEdges, ColorNodes, ColorScheme, LabelNodes, LabelSource, NodeMetric, SizeEdges, SizeNodes,
};
pub use error::{ConfigurationError, ReferenceError, VizError, VizResult};
pub use graph_source::{GraphFormat, SourceOptions, read_graph_file};
pub use layout::{CircularLayout, Layout};
pub use scales::{ColorRamp, Interpolation};
pub use style_state::{StyleState, Targets};
pub use types::{
  AttrValue, Color, GraphEdge, GraphNode, GraphSnapshot, HighlightEvent, InteractionMode, Position,
  PositionMap, RenderConfig,
};
