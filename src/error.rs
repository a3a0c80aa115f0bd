//! Error taxonomy for graph construction, encoding, assembly and I/O.

use thiserror::Error;

/// Result alias used across the crate.
pub type VizResult<T> = Result<T, VizError>;

/// A graph element names an id that does not resolve (or resolves twice).
///
/// Raised when a snapshot is constructed or when an operation targets ids,
/// never later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
  #[error("edge {edge} references unknown node {node}")]
  DanglingEdge { edge: String, node: String },
  #[error("duplicate node id {0}")]
  DuplicateNode(String),
  #[error("duplicate edge id {0}")]
  DuplicateEdge(String),
  #[error("unknown node id {0}")]
  UnknownNode(String),
  #[error("unknown edge id {0}")]
  UnknownEdge(String),
}

/// A requested encoding or the assembled output cannot be honored.
///
/// The failing operation leaves the style state it was called on untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
  #[error("attribute {attribute} is not present on any targeted element")]
  MissingAttribute { attribute: String },
  #[error("attribute {attribute} has no numeric values on the targeted elements")]
  NonNumericAttribute { attribute: String },
  #[error("invalid {field} range [{min}, {max}]: expected finite 0 < min <= max")]
  InvalidRange { field: String, min: f64, max: f64 },
  #[error("color ramp needs at least two anchors, got {0}")]
  InvalidRamp(usize),
  #[error("invalid color {0:?}")]
  InvalidColor(String),
  #[error("node {node} has non-finite {field} coordinate")]
  NonFiniteCoordinate { node: String, field: &'static str },
  #[error("{element} has invalid {field} {value}")]
  InvalidStyle {
    element: String,
    field: &'static str,
    value: f64,
  },
}

/// Top-level error for every fallible entry point of the crate.
#[derive(Debug, Error)]
pub enum VizError {
  #[error(transparent)]
  Reference(#[from] ReferenceError),
  #[error(transparent)]
  Configuration(#[from] ConfigurationError),
  #[error("parse error{}: {message}", line_suffix(.line))]
  Parse { line: Option<usize>, message: String },
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Csv(#[from] csv::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
  line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl VizError {
  /// Parse failure without a known source line.
  pub fn parse(message: impl Into<String>) -> Self {
    VizError::Parse {
      line: None,
      message: message.into(),
    }
  }

  /// True if this is a [ReferenceError].
  pub fn is_reference(&self) -> bool {
    matches!(self, VizError::Reference(_))
  }

  /// True if this is a [ConfigurationError].
  pub fn is_configuration(&self) -> bool {
    matches!(self, VizError::Configuration(_))
  }
}
