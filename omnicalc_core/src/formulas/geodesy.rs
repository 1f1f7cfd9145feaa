//! # Great-Circle Distance
//!
//! Haversine distance between two latitude/longitude points on a spherical
//! Earth.
//!
//! ## Conventions
//!
//! - Latitude/longitude inputs are **always in degrees**, regardless of the
//!   session angle mode. This is a documented exception: coordinates are
//!   universally quoted in degrees and forcing a mode toggle on them would
//!   only invite mistakes.
//! - Earth mean radius 6371 km.
//! - The inner `asin` argument is clamped so floating-point overshoot near
//!   antipodal points cannot leave the arcsine domain.
//!
//! ## References
//!
//! - Sinnott, R.W., "Virtues of the Haversine", Sky & Telescope 68 (1984)

use super::trig::haversin;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile
pub const KM_PER_MILE: f64 = 1.609344;

/// Great-circle distance in kilometers between two points given in degrees
///
/// # Formula
/// ```text
/// a = hav(Δφ) + cos(φ₁)·cos(φ₂)·hav(Δλ)
/// d = 2R·asin(min(1, √a))
/// ```
pub fn haversine_km(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lon1 = lon1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let lon2 = lon2_deg.to_radians();

    let dphi = lat2 - lat1;
    let dlambda = lon2 - lon1;

    let a = haversin(dphi) + lat1.cos() * lat2.cos() * haversin(dlambda);
    // Clamp only genuine overshoot; `f64::min` would swallow a NaN input here
    let root = a.sqrt();
    let c = 2.0 * (if root > 1.0 { 1.0 } else { root }).asin();
    EARTH_RADIUS_KM * c
}

/// Convert kilometers to statute miles
#[inline]
pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}
