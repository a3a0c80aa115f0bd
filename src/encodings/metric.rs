//! Values an encoding reads: built-in node metrics or raw attributes.

use std::fmt;
use std::str::FromStr;

use crate::config::SizeRange;
use crate::error::ConfigurationError;
use crate::types::{AttrValue, GraphSnapshot};

/// Source of the per-node value a size or color encoding reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeMetric {
  /// In + out incident edge count.
  Degree,
  InDegree,
  OutDegree,
  Attribute(String),
}

impl NodeMetric {
  pub fn attribute(name: impl Into<String>) -> Self {
    NodeMetric::Attribute(name.into())
  }

  pub fn is_attribute(&self) -> bool {
    matches!(self, NodeMetric::Attribute(_))
  }

  /// Value per targeted node, `None` where the node lacks the attribute.
  ///
  /// Degrees are counted from the snapshot on every call.
  pub(crate) fn read(&self, graph: &GraphSnapshot, targets: &[usize]) -> Vec<Option<AttrValue>> {
    let counts = match self {
      NodeMetric::Degree => graph.degrees(),
      NodeMetric::InDegree => graph.in_degrees(),
      NodeMetric::OutDegree => graph.out_degrees(),
      NodeMetric::Attribute(name) => {
        return targets
          .iter()
          .map(|&i| graph.nodes().get(i).and_then(|n| n.attr(name)).cloned())
          .collect();
      }
    };
    targets
      .iter()
      .map(|&i| counts.get(i).map(|&d| AttrValue::Number(d as f64)))
      .collect()
  }
}

impl fmt::Display for NodeMetric {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NodeMetric::Degree => write!(f, "degree"),
      NodeMetric::InDegree => write!(f, "in-degree"),
      NodeMetric::OutDegree => write!(f, "out-degree"),
      NodeMetric::Attribute(name) => f.write_str(name),
    }
  }
}

impl FromStr for NodeMetric {
  type Err = std::convert::Infallible;

  /// `degree`, `in-degree` and `out-degree` name metrics; anything else is an attribute.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "degree" => NodeMetric::Degree,
      "in-degree" | "in_degree" => NodeMetric::InDegree,
      "out-degree" | "out_degree" => NodeMetric::OutDegree,
      other => NodeMetric::Attribute(other.to_string()),
    })
  }
}

/// Fails unless `0 < min <= max`, both finite.
pub(crate) fn validate_range(field: &str, range: SizeRange) -> Result<(), ConfigurationError> {
  let SizeRange { min, max } = range;
  if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
    return Ok(());
  }
  Err(ConfigurationError::InvalidRange {
    field: field.to_string(),
    min,
    max,
  })
}

/// Fails when an attribute-backed read found the attribute on no targeted element.
pub(crate) fn require_present(
  attribute: &str,
  values: &[Option<AttrValue>],
) -> Result<(), ConfigurationError> {
  if values.iter().any(Option::is_some) {
    return Ok(());
  }
  Err(ConfigurationError::MissingAttribute {
    attribute: attribute.to_string(),
  })
}

/// Finite numeric values among `values`; fails if the attribute exists but none are numeric.
pub(crate) fn numeric_values(
  attribute: &str,
  values: &[Option<AttrValue>],
) -> Result<Vec<f64>, ConfigurationError> {
  let numbers: Vec<f64> = values
    .iter()
    .filter_map(|v| v.as_ref().and_then(AttrValue::as_number))
    .collect();
  if numbers.is_empty() && values.iter().any(Option::is_some) {
    return Err(ConfigurationError::NonNumericAttribute {
      attribute: attribute.to_string(),
    });
  }
  Ok(numbers)
}
