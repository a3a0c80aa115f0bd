//! Tests for `Color`.

use super::Color;

#[test]
fn display_is_lowercase_hex() {
  assert_eq!(Color::rgb(31, 119, 180).to_string(), "#1f77b4");
}

#[test]
fn parse_long_short_and_bare() {
  assert_eq!("#1F77B4".parse::<Color>().unwrap(), Color::rgb(31, 119, 180));
  assert_eq!("1f77b4".parse::<Color>().unwrap(), Color::rgb(31, 119, 180));
  assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
}

#[test]
fn parse_rejects_garbage() {
  assert!("#12345".parse::<Color>().is_err());
  assert!("#gggggg".parse::<Color>().is_err());
  assert!("".parse::<Color>().is_err());
}

#[test]
fn lerp_endpoints_and_midpoint() {
  let black = Color::rgb(0, 0, 0);
  let white = Color::rgb(255, 255, 255);
  assert_eq!(black.lerp(white, 0.0), black);
  assert_eq!(black.lerp(white, 1.0), white);
  assert_eq!(black.lerp(white, 0.5), Color::rgb(128, 128, 128));
  assert_eq!(black.lerp(white, 7.0), white);
}

#[test]
fn hsl_primaries() {
  assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
  assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
  assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
  assert_eq!(Color::from_hsl(0.0, 0.0, 1.0), Color::rgb(255, 255, 255));
}

#[test]
fn serde_as_hex_string() {
  let json = serde_json::to_string(&Color::rgb(255, 127, 14)).unwrap();
  assert_eq!(json, "\"#ff7f0e\"");
  let back: Color = serde_json::from_str("\"#ff7f0e\"").unwrap();
  assert_eq!(back, Color::rgb(255, 127, 14));
  assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
