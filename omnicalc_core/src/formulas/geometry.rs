//! # Plane Geometry and Triangle Formulas
//!
//! Coordinate-geometry primitives plus the classic triangle-solving formulas
//! (Pythagoras, Law of Cosines, Law of Sines, Heron).
//!
//! ## Notation
//!
//! - Triangle sides `a`, `b`, `c` are opposite angles `A`, `B`, `C`
//! - All angle arguments are in radians; the registry converts from the
//!   active angle mode before calling
//!
//! ## Edge Semantics
//!
//! - `slope_2d` uses safe division: a vertical line yields `NaN`
//! - `heron_area` clamps the radicand at 0 so that side lengths violating
//!   the triangle inequality produce area 0 instead of a `NaN` root
//! - `law_of_sines_ratio` can leave [−1, 1]; the registry treats that as a
//!   domain error before taking the arcsine

use super::arithmetic::safe_div;

/// Euclidean distance between (x1, y1) and (x2, y2)
///
/// # Formula
/// d = √((x₂−x₁)² + (y₂−y₁)²)
///
/// Uses `hypot`, which avoids intermediate overflow for large coordinates.
#[inline]
pub fn distance_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Slope of the line through (x1, y1) and (x2, y2)
///
/// # Formula
/// m = (y₂−y₁)/(x₂−x₁)
///
/// A vertical line (x₁ = x₂) yields `NaN`.
#[inline]
pub fn slope_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    safe_div(y2 - y1, x2 - x1)
}

/// Hypotenuse of a right triangle with legs a and b
///
/// # Formula
/// c = √(a² + b²)
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Law of Cosines: side c from sides a, b and included angle C (radians)
///
/// # Formula
/// c = √(a² + b² − 2ab·cos C)
#[inline]
pub fn law_of_cosines_side(a: f64, b: f64, c_rad: f64) -> f64 {
    (a * a + b * b - 2.0 * a * b * c_rad.cos()).sqrt()
}

/// Semi-perimeter of a triangle with sides a, b, c
///
/// # Formula
/// s = (a + b + c)/2
#[inline]
pub fn semi_perimeter(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 2.0
}

/// Triangle area by Heron's formula
///
/// # Formula
/// Area = √(max(0, s(s−a)(s−b)(s−c)))
///
/// The clamp keeps invalid triangle sides (violating the triangle
/// inequality) from producing a negative radicand.
#[inline]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = semi_perimeter(a, b, c);
    let radicand = s * (s - a) * (s - b) * (s - c);
    // Clamp only genuine negatives; `f64::max` would swallow a NaN side
    if radicand < 0.0 { 0.0 } else { radicand }.sqrt()
}

/// Law of Sines: unknown side b from side a and angles A, B (radians)
///
/// # Formula
/// b = a·sin(B)/sin(A)
#[inline]
pub fn law_of_sines_side(a: f64, a_rad: f64, b_rad: f64) -> f64 {
    a * b_rad.sin() / a_rad.sin()
}

/// Law of Sines: the sine ratio for the unknown angle A from a, b, B (radians)
///
/// # Formula
/// ratio = a·sin(B)/b
///
/// The triangle has no solution when the ratio leaves [−1, 1]; the caller
/// must check before applying `asin`.
#[inline]
pub fn law_of_sines_ratio(a: f64, b: f64, b_rad: f64) -> f64 {
    a * b_rad.sin() / b
}
