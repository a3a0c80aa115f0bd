//! Tests for `NumericScale`.

use super::{Interpolation, NumericScale};
use crate::config::SizeRange;

#[test]
fn fit_empty_is_none() {
  assert!(NumericScale::fit(Vec::<f64>::new(), SizeRange::new(1.0, 2.0), Interpolation::Linear).is_none());
}

#[test]
fn linear_hits_endpoints_exactly() {
  let s = NumericScale::fit(vec![1.0, 3.0, 2.0], SizeRange::new(2.0, 10.0), Interpolation::Linear)
    .unwrap();
  assert_eq!(s.domain(), (1.0, 3.0));
  assert_eq!(s.map(1.0), 2.0);
  assert_eq!(s.map(3.0), 10.0);
  assert_eq!(s.map(2.0), 6.0);
}

#[test]
fn out_of_domain_values_are_clamped() {
  let s = NumericScale::fit(vec![0.0, 10.0], SizeRange::new(1.0, 2.0), Interpolation::Linear)
    .unwrap();
  assert_eq!(s.map(-5.0), 1.0);
  assert_eq!(s.map(50.0), 2.0);
}

#[test]
fn degenerate_domain_maps_to_max() {
  let s = NumericScale::fit(vec![4.0, 4.0], SizeRange::new(1.0, 9.0), Interpolation::Linear)
    .unwrap();
  assert_eq!(s.map(4.0), 9.0);
  assert_eq!(s.fraction(4.0), 1.0);
}

#[test]
fn log_is_monotonic_and_hits_endpoints() {
  let s = NumericScale::fit(vec![0.0, 1.0, 10.0, 100.0], SizeRange::new(1.0, 5.0), Interpolation::Log)
    .unwrap();
  assert_eq!(s.map(0.0), 1.0);
  assert_eq!(s.map(100.0), 5.0);
  let a = s.map(1.0);
  let b = s.map(10.0);
  assert!(1.0 < a && a < b && b < 5.0);
  // log spreads small values more than linear would
  assert!(b > 1.0 + 4.0 * 0.1);
}

#[test]
fn non_finite_inputs_ignored_when_fitting() {
  let s = NumericScale::fit(vec![f64::NAN, 2.0, 4.0], SizeRange::new(1.0, 3.0), Interpolation::Linear)
    .unwrap();
  assert_eq!(s.domain(), (2.0, 4.0));
}
