//! # Error Types
//!
//! Structured error types for omnicalc_core. Mathematical failures (domain
//! errors, overflow) are *not* errors at this level - they are rendered into
//! the result text, matching the original string-channel design. `CalcError`
//! covers misuse of the catalog itself and faults trapped at the compute
//! boundary.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::errors::CalcError;
//!
//! let err = CalcError::unknown_operation("cubicRoots");
//! assert_eq!(err.error_code(), "UNKNOWN_OPERATION");
//! assert_eq!(err.to_string(), "Unknown operation: cubicRoots");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for omnicalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The requested operation key is not in the catalog
    #[error("Unknown operation: {key}")]
    UnknownOperation { key: String },

    /// A formula evaluation faulted at the compute boundary.
    ///
    /// Evaluation is pure arithmetic and cannot fault on its own; this
    /// variant exists because the `InputProvider` is caller-supplied code
    /// and the boundary contract requires faults to surface as a message
    /// rather than terminate the session.
    #[error("Computation failed: {operation} - {reason}")]
    ComputationFailed { operation: String, reason: String },
}

impl CalcError {
    /// Create an UnknownOperation error
    pub fn unknown_operation(key: impl Into<String>) -> Self {
        CalcError::UnknownOperation { key: key.into() }
    }

    /// Create a ComputationFailed error
    pub fn computation_failed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ComputationFailed {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            CalcError::ComputationFailed { .. } => "COMPUTATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::computation_failed("factorial", "input provider panicked");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_operation("nope").error_code(),
            "UNKNOWN_OPERATION"
        );
        assert_eq!(
            CalcError::computation_failed("ln", "boom").error_code(),
            "COMPUTATION_FAILED"
        );
    }
}
