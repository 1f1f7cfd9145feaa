//! # Historical Trigonometric Functions
//!
//! The "dead" trig functions: closed-form combinations of sine and cosine
//! that appeared in navigation and astronomy tables before electronic
//! computation. Each reproduces its canonical definition exactly - these are
//! fixed historical quantities, not approximations to be redesigned.
//!
//! ## Notation
//!
//! All arguments are in radians. Angle-mode conversion happens in the
//! registry before these are called.
//!
//! | Function | Definition |
//! |---|---|
//! | versin θ | 1 − cos θ |
//! | coversin θ | 1 − sin θ |
//! | haversin θ | (1 − cos θ)/2 |
//! | hacoversin θ | (1 − sin θ)/2 |
//! | exsec θ | sec θ − 1 |
//! | excsc θ | csc θ − 1 |
//! | chord θ | 2·sin(θ/2) |

/// versin(θ) = 1 − cos θ
#[inline]
pub fn versin(theta: f64) -> f64 {
    1.0 - theta.cos()
}

/// coversin(θ) = 1 − sin θ
#[inline]
pub fn coversin(theta: f64) -> f64 {
    1.0 - theta.sin()
}

/// haversin(θ) = (1 − cos θ)/2 = sin²(θ/2)
///
/// The "half versed sine" at the heart of the haversine distance formula.
#[inline]
pub fn haversin(theta: f64) -> f64 {
    (1.0 - theta.cos()) / 2.0
}

/// hacoversin(θ) = (1 − sin θ)/2
#[inline]
pub fn hacoversin(theta: f64) -> f64 {
    (1.0 - theta.sin()) / 2.0
}

/// exsec(θ) = sec θ − 1
///
/// Unbounded where cos θ = 0; the division is left to IEEE semantics.
#[inline]
pub fn exsec(theta: f64) -> f64 {
    1.0 / theta.cos() - 1.0
}

/// excsc(θ) = csc θ − 1
///
/// Unbounded where sin θ = 0; the division is left to IEEE semantics.
#[inline]
pub fn excsc(theta: f64) -> f64 {
    1.0 / theta.sin() - 1.0
}

/// chord(θ) = 2·sin(θ/2)
///
/// Length of the chord subtending angle θ on the unit circle.
#[inline]
pub fn chord(theta: f64) -> f64 {
    2.0 * (theta / 2.0).sin()
}
