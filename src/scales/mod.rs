//! Scale mappers: pure value → encoding functions fitted to observed domains.

mod categorical;
mod color_ramp;
mod numeric_scale;
#[cfg(test)]
mod numeric_scale_test;

pub use categorical::{CATEGORY10, CategoricalPalette, CategoricalScale};
pub use color_ramp::{ColorRamp, DEFAULT_RAMP, NumericColorScale};
pub use numeric_scale::{Interpolation, NumericScale};
