//! # omnicalc_core - Calculation Registry and Formula Library
//!
//! `omnicalc_core` is the computational heart of Omnicalc, an interactive
//! multi-domain calculator. The crate owns a fixed catalog of named
//! operations (algebra, plane geometry, classic and historical trigonometry,
//! logarithms, combinatorics), the field schemas a front end needs to render
//! input forms, and the dispatch logic that turns resolved input values into
//! a deterministic textual report.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the catalog is immutable data; every compute call takes
//!   its inputs and angle mode as arguments and returns fresh text
//! - **String channel**: results are plain strings (success and failure
//!   alike), tagged internally as [`outcome::Outcome`] for testability
//! - **Permissive inputs**: non-numeric text resolves to NaN and propagates
//!   through the arithmetic rather than being rejected upfront
//! - **JSON-First**: descriptors, outcomes, and errors serialize cleanly
//!
//! ## Quick Start
//!
//! ```rust
//! use omnicalc_core::angle::AngleMode;
//! use omnicalc_core::inputs::ValueInputs;
//! use omnicalc_core::registry::Catalog;
//!
//! let catalog = Catalog::standard();
//!
//! // What does the "factorial" form look like?
//! let fields = catalog.fields_for("factorial").unwrap();
//! assert_eq!(fields[0].id, "n");
//!
//! // Run it
//! let inputs = ValueInputs::new([("n", 5.0)]);
//! let report = catalog.compute("factorial", &inputs, AngleMode::Degrees).unwrap();
//! assert_eq!(report, "5! = 120");
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Operation catalog, descriptors, and dispatch
//! - [`formulas`] - Pure numeric primitives with explicit edge policies
//! - [`angle`] - Degree/radian session mode
//! - [`inputs`] - Input-provider capability and standard implementations
//! - [`outcome`] - Tagged compute result, collapsed to text at the boundary
//! - [`errors`] - Structured error types

pub mod angle;
pub mod errors;
pub mod formulas;
pub mod inputs;
pub mod outcome;
pub mod registry;

// Re-export commonly used types at crate root for convenience
pub use angle::AngleMode;
pub use errors::{CalcError, CalcResult};
pub use inputs::{InputProvider, RawInputs, ValueInputs};
pub use outcome::Outcome;
pub use registry::{Catalog, FieldSpec, Operation, OperationDescriptor};
