//! Encoding operations: pipeline steps that read attributes or metrics, fit a
//! scale, and write one style field set onto a new [StyleState](crate::StyleState).
//!
//! Each step only writes its own fields, so steps on different fields can be
//! chained in any order. Within one field the last step wins.

mod color_nodes;
mod color_scheme;
mod edge_encodings;
#[cfg(test)]
mod edge_encodings_test;
mod label_nodes;
mod metric;
mod size_nodes;
mod visibility;

pub use color_nodes::ColorNodes;
pub use color_scheme::ColorScheme;
pub use edge_encodings::{ColorEdges, SizeEdges};
pub use label_nodes::{LabelNodes, LabelSource};
pub use metric::NodeMetric;
pub use size_nodes::SizeNodes;
