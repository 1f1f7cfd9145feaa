//! # Compute Outcomes
//!
//! Tagged result of evaluating one operation. The original design used a
//! single string channel for success and failure alike; the tag restores
//! testable structure internally while `into_text` collapses back to the
//! plain string the boundary displays, so external behavior is unchanged.

use serde::{Deserialize, Serialize};

/// Result of one formula evaluation.
///
/// All three variants carry the final human-readable report text. The
/// variant records *why* the text says what it says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text")]
pub enum Outcome {
    /// Successful computation (including guidance messages like
    /// "No solution." that are legitimate mathematical answers)
    Ok(String),
    /// Input violated the formula's mathematical precondition
    DomainError(String),
    /// Result exceeded the representable range
    Overflow(String),
}

impl Outcome {
    /// The report text, regardless of variant
    pub fn text(&self) -> &str {
        match self {
            Outcome::Ok(s) | Outcome::DomainError(s) | Outcome::Overflow(s) => s,
        }
    }

    /// Collapse to the plain string channel the boundary displays
    pub fn into_text(self) -> String {
        match self {
            Outcome::Ok(s) | Outcome::DomainError(s) | Outcome::Overflow(s) => s,
        }
    }

    /// True for successful computations
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}
