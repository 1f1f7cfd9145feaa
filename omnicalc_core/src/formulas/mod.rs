//! # Formula Library
//!
//! Pure numeric primitives with explicit edge-case policies, independent of
//! any UI or catalog concern. Each function is deterministic, never panics,
//! and signals failure through `NaN` / infinity sentinels rather than error
//! types - the registry decides how a sentinel reads in the report text.
//!
//! ## Available Modules
//!
//! - [`arithmetic`] - factorial, safe division, combinatorics
//! - [`geometry`] - distances, slopes, triangle formulas
//! - [`geodesy`] - great-circle distance on the Earth sphere
//! - [`trig`] - historical ("dead") trigonometric functions

pub mod arithmetic;
pub mod geodesy;
pub mod geometry;
pub mod trig;
