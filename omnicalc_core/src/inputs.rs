//! # Input Providers
//!
//! The capability through which the registry reads field values at compute
//! time. The boundary (form, CLI prompt, test harness) owns the raw user
//! text; the core only ever sees resolved `f64` values.
//!
//! Resolution is deliberately permissive: non-numeric text and unknown field
//! ids both resolve to `NaN`, which then propagates through the arithmetic
//! and surfaces in the result text. This matches the original behavior of
//! coercing form values with `Number(...)`.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::inputs::{InputProvider, RawInputs, ValueInputs};
//!
//! let vals = ValueInputs::new([("a", 1.0), ("b", -3.0)]);
//! assert_eq!(vals.resolve("a"), 1.0);
//! assert!(vals.resolve("missing").is_nan());
//!
//! let raw = RawInputs::new([("x", "2.5"), ("y", "oops")]);
//! assert_eq!(raw.resolve("x"), 2.5);
//! assert!(raw.resolve("y").is_nan());
//! ```

use std::collections::HashMap;

/// Capability that resolves a declared field id to a numeric value.
///
/// Supplied fresh by the boundary on every compute invocation. Implementations
/// must be total: unparsable or missing values resolve to `NaN` rather than
/// failing.
pub trait InputProvider {
    /// Resolve a field id to its current numeric value.
    fn resolve(&self, field_id: &str) -> f64;
}

/// Input provider over already-numeric values.
///
/// The natural choice for tests and programmatic callers.
#[derive(Debug, Clone, Default)]
pub struct ValueInputs {
    values: HashMap<String, f64>,
}

impl ValueInputs {
    pub fn new<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Insert or replace a single value
    pub fn set(&mut self, field_id: impl Into<String>, value: f64) {
        self.values.insert(field_id.into(), value);
    }
}

impl InputProvider for ValueInputs {
    fn resolve(&self, field_id: &str) -> f64 {
        self.values.get(field_id).copied().unwrap_or(f64::NAN)
    }
}

/// Input provider over raw user-entered text.
///
/// Each lookup parses the stored text; anything that is not a valid float
/// resolves to `NaN`. Whitespace is trimmed, empty text is `NaN`.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    values: HashMap<String, String>,
}

impl RawInputs {
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Store the raw text for a field
    pub fn set(&mut self, field_id: impl Into<String>, text: impl Into<String>) {
        self.values.insert(field_id.into(), text.into());
    }
}

impl InputProvider for RawInputs {
    fn resolve(&self, field_id: &str) -> f64 {
        self.values
            .get(field_id)
            .and_then(|text| text.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}
