//! Graph, style and configuration types.
//!
//! Graph types come from an adapter, style types live in
//! [StyleState](crate::StyleState), and [RenderConfig] is what leaves the crate.

mod attr_value;
mod color;
#[cfg(test)]
mod color_test;
mod element_style;
mod graph_edge;
mod graph_node;
mod graph_snapshot;
mod interaction_mode;
#[cfg(test)]
mod interaction_mode_test;
mod position;
mod render_config;
#[cfg(test)]
mod render_config_test;

pub use attr_value::{AttrValue, Attributes};
pub use color::Color;
pub use element_style::{EdgeStyle, NodeStyle};
pub use graph_edge::GraphEdge;
pub use graph_node::GraphNode;
pub use graph_snapshot::GraphSnapshot;
pub use interaction_mode::{HighlightEvent, InteractionMode};
pub use position::{Position, PositionMap};
pub use render_config::{
  CanvasSettings, EdgeRecord, NodeRecord, RENDER_CONFIG_VERSION, RenderConfig, RenderSettings,
};
