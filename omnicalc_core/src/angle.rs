//! # Angle Mode
//!
//! Session-level setting that governs how angle-valued inputs are interpreted
//! by trigonometric operations. The mode is owned by the boundary (UI or CLI)
//! and passed explicitly into every compute call - the core never reads it
//! from ambient state.
//!
//! Two operations deliberately ignore the mode and are documented as such:
//! great-circle distance always takes latitude/longitude in degrees, and the
//! historical trig report echoes the mode only for display.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::angle::AngleMode;
//!
//! let rad = AngleMode::Degrees.to_radians(180.0);
//! assert!((rad - std::f64::consts::PI).abs() < 1e-12);
//!
//! // Radians mode is the identity
//! assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
//! ```

use serde::{Deserialize, Serialize};

/// Angle unit for trig-valued inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Angles entered and reported in degrees
    #[default]
    Degrees,
    /// Angles entered and reported in radians
    Radians,
}

impl AngleMode {
    /// Convert an angle in this mode to radians.
    ///
    /// Identity in radians mode, `x * pi / 180` in degrees mode.
    #[inline]
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Degrees => x * std::f64::consts::PI / 180.0,
            AngleMode::Radians => x,
        }
    }

    /// Convert an angle in radians back to this mode for display.
    #[inline]
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Degrees => x * 180.0 / std::f64::consts::PI,
            AngleMode::Radians => x,
        }
    }

    /// Short form used in result text (e.g. the dead-trig report header)
    pub fn short_name(self) -> &'static str {
        match self {
            AngleMode::Degrees => "deg",
            AngleMode::Radians => "rad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        assert!((AngleMode::Degrees.to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((AngleMode::Degrees.to_radians(-180.0) + PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_identity() {
        assert_eq!(AngleMode::Radians.to_radians(2.5), 2.5);
        assert_eq!(AngleMode::Radians.from_radians(2.5), 2.5);
    }

    #[test]
    fn test_round_trip() {
        let x = 37.5;
        let back = AngleMode::Degrees.from_radians(AngleMode::Degrees.to_radians(x));
        assert!((back - x).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AngleMode::Degrees).unwrap();
        assert_eq!(json, "\"degrees\"");

        let roundtrip: AngleMode = serde_json::from_str("\"radians\"").unwrap();
        assert_eq!(roundtrip, AngleMode::Radians);
    }
}
