//! # Calculation Registry
//!
//! Central catalog of all calculator operations. Each operation has a stable
//! string key, a human-readable label, an ordered field schema, and a compute
//! rule over the resolved field values.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe operation identification via the `Operation` enum
//! - Static descriptors (key, label, category, fields) for form generation
//! - A dispatch boundary (`Catalog::compute`) that resolves inputs, runs the
//!   formula, and collapses the tagged [`Outcome`] to plain result text
//!
//! The catalog is an explicit immutable value constructed once at startup and
//! passed by reference - there is no global registry and no lazy singleton.
//!
//! ## Usage
//!
//! ```rust
//! use omnicalc_core::angle::AngleMode;
//! use omnicalc_core::inputs::ValueInputs;
//! use omnicalc_core::registry::Catalog;
//!
//! let catalog = Catalog::standard();
//! let inputs = ValueInputs::new([("a", 1.0), ("b", -3.0), ("c", 2.0)]);
//! let text = catalog
//!     .compute("discriminant", &inputs, AngleMode::Degrees)
//!     .unwrap();
//! assert_eq!(text, "D = b² − 4ac = 1");
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

use crate::angle::AngleMode;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::{arithmetic, geodesy, geometry, trig};
use crate::inputs::InputProvider;
use crate::outcome::Outcome;

// ============================================================================
// Field Schema
// ============================================================================

/// One scalar numeric input of an operation.
///
/// The id is unique within its operation and is the handle the
/// [`InputProvider`] resolves at compute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field id, unique within the owning operation
    pub id: &'static str,
    /// Label shown next to the input control
    pub label: &'static str,
    /// Optional placeholder/hint text
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder: None,
        }
    }

    pub const fn with_hint(id: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder: Some(hint),
        }
    }
}

// ============================================================================
// Operation Categories
// ============================================================================

/// Mathematical domain grouping for the catalog menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Polynomial and power operations
    Algebra,
    /// Coordinate and triangle geometry
    Geometry,
    /// Classic trigonometry (Law of Sines)
    ClassicTrig,
    /// Historical trig functions and the haversine distance
    HistoricalTrig,
    /// Logarithms and exponentials
    LogsExponentials,
    /// Factorials, combinations, permutations
    Combinatorics,
}

impl Category {
    /// Display name for menu grouping
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Algebra => "Algebra",
            Category::Geometry => "Geometry",
            Category::ClassicTrig => "Trigonometry (classic)",
            Category::HistoricalTrig => "Trigonometry (historical)",
            Category::LogsExponentials => "Logs & Exponentials",
            Category::Combinatorics => "Combinatorics",
        }
    }
}

// ============================================================================
// Operation Descriptor
// ============================================================================

/// Static metadata for one catalog operation.
///
/// Everything a boundary needs to render the operation: the selection key,
/// the menu label, and the ordered input fields. Immutable once defined.
#[derive(Debug, Clone, Serialize)]
pub struct OperationDescriptor {
    /// Stable selection key (e.g. "quadraticRoots")
    pub key: &'static str,
    /// Human-readable menu label
    pub label: &'static str,
    /// Domain grouping
    pub category: Category,
    /// Input fields in declaration order
    pub fields: Vec<FieldSpec>,
}

// ============================================================================
// Operation Enum
// ============================================================================

/// All calculator operations, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    // Algebra
    QuadraticRoots,
    Discriminant,
    LinearSolve,
    Power,
    // Geometry / coordinate
    Distance2D,
    Slope2D,
    PythagoreanHypotenuse,
    LawOfCosinesSide,
    HeronArea,
    // Trig (classic)
    LawOfSinesSide,
    LawOfSinesAngle,
    // Trig (historical)
    DeadTrigSet,
    HaversineDistance,
    // Logs & exponentials
    NaturalLog,
    LogBase,
    Exp,
    // Combinatorics
    Factorial,
    Combinations,
    Permutations,
}

/// All operations in catalog (menu) order
pub static ALL_OPERATIONS: &[Operation] = &[
    Operation::QuadraticRoots,
    Operation::Discriminant,
    Operation::LinearSolve,
    Operation::Power,
    Operation::Distance2D,
    Operation::Slope2D,
    Operation::PythagoreanHypotenuse,
    Operation::LawOfCosinesSide,
    Operation::HeronArea,
    Operation::LawOfSinesSide,
    Operation::LawOfSinesAngle,
    Operation::DeadTrigSet,
    Operation::HaversineDistance,
    Operation::NaturalLog,
    Operation::LogBase,
    Operation::Exp,
    Operation::Factorial,
    Operation::Combinations,
    Operation::Permutations,
];

impl Operation {
    /// Stable selection key
    pub fn key(&self) -> &'static str {
        match self {
            Operation::QuadraticRoots => "quadraticRoots",
            Operation::Discriminant => "discriminant",
            Operation::LinearSolve => "linearSolve",
            Operation::Power => "power",
            Operation::Distance2D => "distance2D",
            Operation::Slope2D => "slope2D",
            Operation::PythagoreanHypotenuse => "pythagHyp",
            Operation::LawOfCosinesSide => "lawCosineSide",
            Operation::HeronArea => "heron",
            Operation::LawOfSinesSide => "lawSinesSide",
            Operation::LawOfSinesAngle => "lawSinesAngle",
            Operation::DeadTrigSet => "deadTrigSet",
            Operation::HaversineDistance => "haversineDistance",
            Operation::NaturalLog => "ln",
            Operation::LogBase => "logBase",
            Operation::Exp => "exp",
            Operation::Factorial => "factorial",
            Operation::Combinations => "nCr",
            Operation::Permutations => "nPr",
        }
    }

    /// Get the full descriptor for this operation
    pub fn descriptor(&self) -> OperationDescriptor {
        match self {
            Operation::QuadraticRoots => OperationDescriptor {
                key: self.key(),
                label: "Quadratic Roots (ax²+bx+c=0)",
                category: Category::Algebra,
                fields: vec![
                    FieldSpec::with_hint("a", "a", "e.g. 1"),
                    FieldSpec::with_hint("b", "b", "e.g. -3"),
                    FieldSpec::with_hint("c", "c", "e.g. 2"),
                ],
            },
            Operation::Discriminant => OperationDescriptor {
                key: self.key(),
                label: "Discriminant (b² − 4ac)",
                category: Category::Algebra,
                fields: vec![
                    FieldSpec::new("a", "a"),
                    FieldSpec::new("b", "b"),
                    FieldSpec::new("c", "c"),
                ],
            },
            Operation::LinearSolve => OperationDescriptor {
                key: self.key(),
                label: "Solve ax + b = 0",
                category: Category::Algebra,
                fields: vec![FieldSpec::new("a", "a"), FieldSpec::new("b", "b")],
            },
            Operation::Power => OperationDescriptor {
                key: self.key(),
                label: "Power a^b",
                category: Category::Algebra,
                fields: vec![
                    FieldSpec::new("base", "a (base)"),
                    FieldSpec::new("exp", "b (exponent)"),
                ],
            },
            Operation::Distance2D => OperationDescriptor {
                key: self.key(),
                label: "Distance between two points",
                category: Category::Geometry,
                fields: vec![
                    FieldSpec::new("x1", "x₁"),
                    FieldSpec::new("y1", "y₁"),
                    FieldSpec::new("x2", "x₂"),
                    FieldSpec::new("y2", "y₂"),
                ],
            },
            Operation::Slope2D => OperationDescriptor {
                key: self.key(),
                label: "Slope between two points",
                category: Category::Geometry,
                fields: vec![
                    FieldSpec::new("x1", "x₁"),
                    FieldSpec::new("y1", "y₁"),
                    FieldSpec::new("x2", "x₂"),
                    FieldSpec::new("y2", "y₂"),
                ],
            },
            Operation::PythagoreanHypotenuse => OperationDescriptor {
                key: self.key(),
                label: "Pythagorean (hypotenuse)",
                category: Category::Geometry,
                fields: vec![
                    FieldSpec::new("a", "a (leg)"),
                    FieldSpec::new("b", "b (leg)"),
                ],
            },
            Operation::LawOfCosinesSide => OperationDescriptor {
                key: self.key(),
                label: "Law of Cosines (side c from a,b,C)",
                category: Category::Geometry,
                fields: vec![
                    FieldSpec::new("a", "a"),
                    FieldSpec::new("b", "b"),
                    FieldSpec::new("C", "C (angle)"),
                ],
            },
            Operation::HeronArea => OperationDescriptor {
                key: self.key(),
                label: "Triangle area (Heron)",
                category: Category::Geometry,
                fields: vec![
                    FieldSpec::new("a", "a"),
                    FieldSpec::new("b", "b"),
                    FieldSpec::new("c", "c"),
                ],
            },
            Operation::LawOfSinesSide => OperationDescriptor {
                key: self.key(),
                label: "Law of Sines (solve side: a / sin A = b / sin B)",
                category: Category::ClassicTrig,
                fields: vec![
                    FieldSpec::new("a", "Known side a"),
                    FieldSpec::new("A", "Angle A"),
                    FieldSpec::new("B", "Angle B"),
                ],
            },
            Operation::LawOfSinesAngle => OperationDescriptor {
                key: self.key(),
                label: "Law of Sines (solve angle: A from a,b,B)",
                category: Category::ClassicTrig,
                fields: vec![
                    FieldSpec::new("a", "a"),
                    FieldSpec::new("b", "b"),
                    FieldSpec::new("B", "B (angle)"),
                ],
            },
            Operation::DeadTrigSet => OperationDescriptor {
                key: self.key(),
                label: "Dead trig function set (input angle θ)",
                category: Category::HistoricalTrig,
                fields: vec![FieldSpec::new("theta", "θ")],
            },
            Operation::HaversineDistance => OperationDescriptor {
                key: self.key(),
                label: "Great-circle distance (haversine) — Earth",
                category: Category::HistoricalTrig,
                fields: vec![
                    FieldSpec::new("lat1", "Lat₁ (deg)"),
                    FieldSpec::new("lon1", "Lon₁ (deg)"),
                    FieldSpec::new("lat2", "Lat₂ (deg)"),
                    FieldSpec::new("lon2", "Lon₂ (deg)"),
                ],
            },
            Operation::NaturalLog => OperationDescriptor {
                key: self.key(),
                label: "Natural log ln(x)",
                category: Category::LogsExponentials,
                fields: vec![FieldSpec::new("x", "x (>0)")],
            },
            Operation::LogBase => OperationDescriptor {
                key: self.key(),
                label: "Log base b of x",
                category: Category::LogsExponentials,
                fields: vec![
                    FieldSpec::new("x", "x (>0)"),
                    FieldSpec::new("b", "base b (>0, ≠1)"),
                ],
            },
            Operation::Exp => OperationDescriptor {
                key: self.key(),
                label: "e^x",
                category: Category::LogsExponentials,
                fields: vec![FieldSpec::new("x", "x")],
            },
            Operation::Factorial => OperationDescriptor {
                key: self.key(),
                label: "Factorial n!",
                category: Category::Combinatorics,
                fields: vec![FieldSpec::new("n", "n (integer ≥ 0)")],
            },
            Operation::Combinations => OperationDescriptor {
                key: self.key(),
                label: "Combinations nCr",
                category: Category::Combinatorics,
                fields: vec![FieldSpec::new("n", "n"), FieldSpec::new("r", "r")],
            },
            Operation::Permutations => OperationDescriptor {
                key: self.key(),
                label: "Permutations nPr",
                category: Category::Combinatorics,
                fields: vec![FieldSpec::new("n", "n"), FieldSpec::new("r", "r")],
            },
        }
    }

    /// Evaluate this operation against resolved inputs.
    ///
    /// Pure and total: every input combination (including NaN from
    /// unparsable text) produces an [`Outcome`]. The angle mode is consulted
    /// only by the trig-valued operations; haversine distance ignores it by
    /// documented exception.
    pub fn evaluate(&self, inputs: &dyn InputProvider, mode: AngleMode) -> Outcome {
        match self {
            Operation::QuadraticRoots => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                let c = inputs.resolve("c");
                if a == 0.0 {
                    return Outcome::DomainError(
                        "a = 0 → not quadratic. Try linearSolve.".to_string(),
                    );
                }
                let d = b * b - 4.0 * a * c;
                let two_a = 2.0 * a;
                let mut out = format!("Discriminant D = {}\n", d);
                if d > 0.0 {
                    let r1 = (-b + d.sqrt()) / two_a;
                    let r2 = (-b - d.sqrt()) / two_a;
                    out.push_str(&format!("Two real roots:\n  x₁ = {}\n  x₂ = {}", r1, r2));
                } else if d == 0.0 {
                    let r = -b / two_a;
                    out.push_str(&format!("Repeated real root:\n  x = {}", r));
                } else {
                    let real = -b / two_a;
                    let imag = (-d).sqrt() / two_a;
                    out.push_str(&format!("Complex roots:\n  x = {} ± {}i", real, imag));
                }
                Outcome::Ok(out)
            }

            Operation::Discriminant => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                let c = inputs.resolve("c");
                Outcome::Ok(format!("D = b² − 4ac = {}", b * b - 4.0 * a * c))
            }

            Operation::LinearSolve => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                if a == 0.0 {
                    if b == 0.0 {
                        Outcome::Ok("All real x are solutions.".to_string())
                    } else {
                        Outcome::Ok("No solution.".to_string())
                    }
                } else {
                    Outcome::Ok(format!("x = {}", -b / a))
                }
            }

            Operation::Power => {
                let a = inputs.resolve("base");
                let b = inputs.resolve("exp");
                Outcome::Ok(format!("a^b = {}", a.powf(b)))
            }

            Operation::Distance2D => {
                let x1 = inputs.resolve("x1");
                let y1 = inputs.resolve("y1");
                let x2 = inputs.resolve("x2");
                let y2 = inputs.resolve("y2");
                Outcome::Ok(format!(
                    "√((x₂−x₁)² + (y₂−y₁)²) = {}",
                    geometry::distance_2d(x1, y1, x2, y2)
                ))
            }

            Operation::Slope2D => {
                let x1 = inputs.resolve("x1");
                let y1 = inputs.resolve("y1");
                let x2 = inputs.resolve("x2");
                let y2 = inputs.resolve("y2");
                Outcome::Ok(format!(
                    "m = (y₂−y₁)/(x₂−x₁) = {}",
                    geometry::slope_2d(x1, y1, x2, y2)
                ))
            }

            Operation::PythagoreanHypotenuse => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                Outcome::Ok(format!("c = √(a² + b²) = {}", geometry::hypotenuse(a, b)))
            }

            Operation::LawOfCosinesSide => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                let c_angle = inputs.resolve("C");
                let side = geometry::law_of_cosines_side(a, b, mode.to_radians(c_angle));
                Outcome::Ok(format!("c = √(a² + b² − 2ab·cos(C)) = {}", side))
            }

            Operation::HeronArea => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                let c = inputs.resolve("c");
                let s = geometry::semi_perimeter(a, b, c);
                let area = geometry::heron_area(a, b, c);
                Outcome::Ok(format!("s = {}\nArea = √(s(s−a)(s−b)(s−c)) = {}", s, area))
            }

            Operation::LawOfSinesSide => {
                let a = inputs.resolve("a");
                let angle_a = inputs.resolve("A");
                let angle_b = inputs.resolve("B");
                let val = geometry::law_of_sines_side(
                    a,
                    mode.to_radians(angle_a),
                    mode.to_radians(angle_b),
                );
                Outcome::Ok(format!("b = a·sin(B)/sin(A) = {}", val))
            }

            Operation::LawOfSinesAngle => {
                let a = inputs.resolve("a");
                let b = inputs.resolve("b");
                let angle_b = inputs.resolve("B");
                let ratio = geometry::law_of_sines_ratio(a, b, mode.to_radians(angle_b));
                if ratio < -1.0 || ratio > 1.0 {
                    return Outcome::DomainError("No solution (domain error).".to_string());
                }
                let angle_a = mode.from_radians(ratio.asin());
                Outcome::Ok(format!("A = arcsin(a·sin(B)/b) = {}", angle_a))
            }

            Operation::DeadTrigSet => {
                let th = inputs.resolve("theta");
                let t = mode.to_radians(th);
                let lines = [
                    format!("θ = {} ({})", th, mode.short_name()),
                    format!("versin(θ) = 1 − cosθ = {}", trig::versin(t)),
                    format!("coversin(θ) = 1 − sinθ = {}", trig::coversin(t)),
                    format!("haversin(θ) = (1 − cosθ)/2 = {}", trig::haversin(t)),
                    format!("hacoversin(θ) = (1 − sinθ)/2 = {}", trig::hacoversin(t)),
                    format!("exsec(θ) = secθ − 1 = {}", trig::exsec(t)),
                    format!("excsc(θ) = cscθ − 1 = {}", trig::excsc(t)),
                    format!("chord(θ) = 2·sin(θ/2) = {}", trig::chord(t)),
                ];
                Outcome::Ok(lines.join("\n"))
            }

            Operation::HaversineDistance => {
                // Lat/lon are always degrees, independent of the angle mode
                let lat1 = inputs.resolve("lat1");
                let lon1 = inputs.resolve("lon1");
                let lat2 = inputs.resolve("lat2");
                let lon2 = inputs.resolve("lon2");
                let km = geodesy::haversine_km(lat1, lon1, lat2, lon2);
                let miles = geodesy::km_to_miles(km);
                Outcome::Ok(format!("Distance ≈ {:.6} km ({:.6} mi)", km, miles))
            }

            Operation::NaturalLog => {
                let x = inputs.resolve("x");
                if x.is_finite() && x > 0.0 {
                    Outcome::Ok(format!("ln({}) = {}", x, x.ln()))
                } else {
                    Outcome::DomainError("Domain error: x must be > 0.".to_string())
                }
            }

            Operation::LogBase => {
                let x = inputs.resolve("x");
                let b = inputs.resolve("b");
                if !(x > 0.0) || !(b > 0.0) || b == 1.0 {
                    return Outcome::DomainError("Domain error: x>0, b>0, b≠1.".to_string());
                }
                Outcome::Ok(format!("log_{}({}) = {}", b, x, x.ln() / b.ln()))
            }

            Operation::Exp => {
                let x = inputs.resolve("x");
                Outcome::Ok(format!("e^x = {}", x.exp()))
            }

            Operation::Factorial => {
                let n = inputs.resolve("n");
                let f = arithmetic::factorial(n);
                if f.is_finite() {
                    Outcome::Ok(format!("{}! = {}", n, f))
                } else if f.is_nan() {
                    Outcome::DomainError("Overflow or invalid n (try n ≤ 170).".to_string())
                } else {
                    Outcome::Overflow("Overflow or invalid n (try n ≤ 170).".to_string())
                }
            }

            Operation::Combinations => {
                let n = inputs.resolve("n");
                let r = inputs.resolve("r");
                match choose_guard(n, r) {
                    Some(err) => err,
                    None => Outcome::Ok(format!(
                        "C({},{}) = {}",
                        n,
                        r,
                        arithmetic::combinations(n, r)
                    )),
                }
            }

            Operation::Permutations => {
                let n = inputs.resolve("n");
                let r = inputs.resolve("r");
                match choose_guard(n, r) {
                    Some(err) => err,
                    None => Outcome::Ok(format!(
                        "P({},{}) = {}",
                        n,
                        r,
                        arithmetic::permutations(n, r)
                    )),
                }
            }
        }
    }
}

/// Shared precondition for nCr and nPr: integers with 0 ≤ r ≤ n
fn choose_guard(n: f64, r: f64) -> Option<Outcome> {
    if !arithmetic::is_integer(n) || !arithmetic::is_integer(r) || r < 0.0 || n < 0.0 || r > n {
        Some(Outcome::DomainError(
            "Require integers with 0 ≤ r ≤ n.".to_string(),
        ))
    } else {
        None
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The immutable operation catalog.
///
/// Constructed once at startup and passed by reference to the boundary.
/// Stateless per call: the selected key and the angle mode live with the
/// caller and arrive as arguments.
#[derive(Debug, Clone)]
pub struct Catalog {
    operations: Vec<Operation>,
}

impl Catalog {
    /// The standard catalog with every operation, in menu order
    pub fn standard() -> Self {
        Self {
            operations: ALL_OPERATIONS.to_vec(),
        }
    }

    /// Build a catalog from an explicit operation list (mainly for tests)
    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Ordered (key, label) pairs for menu rendering
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        self.operations
            .iter()
            .map(|op| (op.key(), op.descriptor().label))
            .collect()
    }

    /// Ordered descriptors for the full catalog (JSON-export friendly)
    pub fn descriptors(&self) -> Vec<OperationDescriptor> {
        self.operations.iter().map(|op| op.descriptor()).collect()
    }

    /// Look up an operation by key
    pub fn get(&self, key: &str) -> Option<Operation> {
        self.operations.iter().copied().find(|op| op.key() == key)
    }

    /// The declared field schema for an operation, in declaration order
    pub fn fields_for(&self, key: &str) -> CalcResult<Vec<FieldSpec>> {
        self.get(key)
            .map(|op| op.descriptor().fields)
            .ok_or_else(|| CalcError::unknown_operation(key))
    }

    /// Evaluate an operation, keeping the tagged outcome (test-friendly)
    ///
    /// A panic in the caller-supplied provider (or any other fault during
    /// evaluation) is trapped here and converted to
    /// [`CalcError::ComputationFailed`] - faults never cross this boundary.
    pub fn compute_outcome(
        &self,
        key: &str,
        inputs: &dyn InputProvider,
        mode: AngleMode,
    ) -> CalcResult<Outcome> {
        let op = self
            .get(key)
            .ok_or_else(|| CalcError::unknown_operation(key))?;
        catch_unwind(AssertUnwindSafe(|| op.evaluate(inputs, mode))).map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unidentified panic".to_string());
            CalcError::computation_failed(key, reason)
        })
    }

    /// Evaluate an operation and collapse the outcome to result text
    pub fn compute(
        &self,
        key: &str,
        inputs: &dyn InputProvider,
        mode: AngleMode,
    ) -> CalcResult<String> {
        self.compute_outcome(key, inputs, mode)
            .map(Outcome::into_text)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{RawInputs, ValueInputs};

    fn compute(key: &str, pairs: &[(&str, f64)], mode: AngleMode) -> String {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::new(pairs.iter().map(|&(k, v)| (k, v)));
        catalog.compute(key, &inputs, mode).unwrap()
    }

    fn compute_deg(key: &str, pairs: &[(&str, f64)]) -> String {
        compute(key, pairs, AngleMode::Degrees)
    }

    #[test]
    fn test_catalog_order() {
        let catalog = Catalog::standard();
        let keys: Vec<&str> = catalog.entries().iter().map(|&(k, _)| k).collect();
        assert_eq!(keys.len(), 19);
        assert_eq!(keys[0], "quadraticRoots");
        assert_eq!(keys[1], "discriminant");
        assert_eq!(keys[11], "deadTrigSet");
        assert_eq!(keys[18], "nPr");
    }

    #[test]
    fn test_keys_are_unique() {
        let catalog = Catalog::standard();
        let mut keys: Vec<&str> = catalog.entries().iter().map(|&(k, _)| k).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 19);
    }

    #[test]
    fn test_fields_declared_order() {
        let catalog = Catalog::standard();
        let fields = catalog.fields_for("haversineDistance").unwrap();
        let ids: Vec<&str> = fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, ["lat1", "lon1", "lat2", "lon2"]);

        // Independent of angle mode and of prior compute calls
        let inputs = ValueInputs::new([("a", 1.0), ("b", 2.0)]);
        let _ = catalog.compute("pythagHyp", &inputs, AngleMode::Radians);
        let again = catalog.fields_for("haversineDistance").unwrap();
        let ids_again: Vec<&str> = again.iter().map(|f| f.id).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn test_field_ids_unique_within_operation() {
        let catalog = Catalog::standard();
        for desc in catalog.descriptors() {
            let mut ids: Vec<&str> = desc.fields.iter().map(|f| f.id).collect();
            let count = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), count, "duplicate field id in {}", desc.key);
        }
    }

    #[test]
    fn test_unknown_operation() {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::default();
        let err = catalog
            .compute("cubicRoots", &inputs, AngleMode::Degrees)
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPERATION");
        assert!(catalog.fields_for("cubicRoots").is_err());
    }

    // --- Algebra ---

    #[test]
    fn test_discriminant_report() {
        let text = compute_deg("discriminant", &[("a", 1.0), ("b", -3.0), ("c", 2.0)]);
        assert_eq!(text, "D = b² − 4ac = 1");
    }

    #[test]
    fn test_quadratic_two_real_roots() {
        let text = compute_deg("quadraticRoots", &[("a", 1.0), ("b", -3.0), ("c", 2.0)]);
        assert!(text.contains("Discriminant D = 1"), "{}", text);
        assert!(text.contains("x₁ = 2"), "{}", text);
        assert!(text.contains("x₂ = 1"), "{}", text);
    }

    #[test]
    fn test_quadratic_repeated_root() {
        let text = compute_deg("quadraticRoots", &[("a", 1.0), ("b", 2.0), ("c", 1.0)]);
        assert!(text.contains("Repeated real root"), "{}", text);
        assert!(text.contains("x = -1"), "{}", text);
    }

    #[test]
    fn test_quadratic_complex_roots() {
        let text = compute_deg("quadraticRoots", &[("a", 1.0), ("b", 2.0), ("c", 2.0)]);
        assert!(text.contains("Complex roots"), "{}", text);
        assert!(text.contains("x = -1 ± 1i"), "{}", text);
    }

    #[test]
    fn test_quadratic_degenerate_is_guidance() {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::new([("a", 0.0), ("b", 1.0), ("c", 1.0)]);
        let outcome = catalog
            .compute_outcome("quadraticRoots", &inputs, AngleMode::Degrees)
            .unwrap();
        assert!(!outcome.is_ok());
        assert_eq!(outcome.text(), "a = 0 → not quadratic. Try linearSolve.");
    }

    #[test]
    fn test_linear_solve_branches() {
        assert_eq!(
            compute_deg("linearSolve", &[("a", 2.0), ("b", -6.0)]),
            "x = 3"
        );
        assert_eq!(
            compute_deg("linearSolve", &[("a", 0.0), ("b", 0.0)]),
            "All real x are solutions."
        );
        assert_eq!(
            compute_deg("linearSolve", &[("a", 0.0), ("b", 5.0)]),
            "No solution."
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(
            compute_deg("power", &[("base", 2.0), ("exp", 10.0)]),
            "a^b = 1024"
        );
        assert_eq!(
            compute_deg("power", &[("base", 4.0), ("exp", 0.5)]),
            "a^b = 2"
        );
    }

    // --- Geometry ---

    #[test]
    fn test_distance_2d() {
        let text = compute_deg(
            "distance2D",
            &[("x1", 0.0), ("y1", 0.0), ("x2", 3.0), ("y2", 4.0)],
        );
        assert_eq!(text, "√((x₂−x₁)² + (y₂−y₁)²) = 5");
    }

    #[test]
    fn test_slope_vertical_line_reports_nan() {
        let text = compute_deg(
            "slope2D",
            &[("x1", 1.0), ("y1", 0.0), ("x2", 1.0), ("y2", 9.0)],
        );
        assert_eq!(text, "m = (y₂−y₁)/(x₂−x₁) = NaN");
    }

    #[test]
    fn test_pythag_hypotenuse() {
        let text = compute_deg("pythagHyp", &[("a", 3.0), ("b", 4.0)]);
        assert_eq!(text, "c = √(a² + b²) = 5");
    }

    #[test]
    fn test_heron_area() {
        let text = compute_deg("heron", &[("a", 3.0), ("b", 4.0), ("c", 5.0)]);
        assert!(text.starts_with("s = 6\n"), "{}", text);
        assert!(text.ends_with("= 6"), "{}", text);
    }

    #[test]
    fn test_heron_invalid_sides_zero_area() {
        let text = compute_deg("heron", &[("a", 1.0), ("b", 2.0), ("c", 10.0)]);
        assert!(text.ends_with("= 0"), "{}", text);
    }

    // --- Trig and angle-mode handling ---

    #[test]
    fn test_law_cosine_mode_sensitivity() {
        let pairs = [("a", 1.0), ("b", 1.0), ("C", 90.0)];
        let deg = compute("lawCosineSide", &pairs, AngleMode::Degrees);
        let rad = compute("lawCosineSide", &pairs, AngleMode::Radians);
        assert_ne!(deg, rad);
        // 90° gives the right-angle case: c = √2
        assert!(deg.contains("1.414213"), "{}", deg);
    }

    #[test]
    fn test_law_sines_side() {
        // Equilateral triangle: b = a
        let text = compute_deg("lawSinesSide", &[("a", 2.0), ("A", 60.0), ("B", 60.0)]);
        assert!(text.starts_with("b = a·sin(B)/sin(A) = 2"), "{}", text);
    }

    #[test]
    fn test_law_sines_angle_no_solution() {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::new([("a", 10.0), ("b", 1.0), ("B", 90.0)]);
        let outcome = catalog
            .compute_outcome("lawSinesAngle", &inputs, AngleMode::Degrees)
            .unwrap();
        assert!(!outcome.is_ok());
        assert_eq!(outcome.text(), "No solution (domain error).");
    }

    #[test]
    fn test_law_sines_angle_converts_back_to_mode() {
        // a=1, b=2, B=90°: ratio 0.5, A = 30°
        let text = compute_deg("lawSinesAngle", &[("a", 1.0), ("b", 2.0), ("B", 90.0)]);
        let value: f64 = text.rsplit("= ").next().unwrap().parse().unwrap();
        assert!((value - 30.0).abs() < 1e-9, "{}", text);

        // Radians mode reports the raw arcsine
        let rad_text = compute(
            "lawSinesAngle",
            &[("a", 1.0), ("b", 2.0), ("B", std::f64::consts::FRAC_PI_2)],
            AngleMode::Radians,
        );
        let rad_value: f64 = rad_text.rsplit("= ").next().unwrap().parse().unwrap();
        assert!((rad_value - std::f64::consts::FRAC_PI_6).abs() < 1e-12, "{}", rad_text);
    }

    #[test]
    fn test_dead_trig_set_fixed_order() {
        let text = compute_deg("deadTrigSet", &[("theta", 90.0)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "θ = 90 (deg)");
        assert!(lines[1].starts_with("versin(θ) = 1 − cosθ ="));
        assert!(lines[2].starts_with("coversin(θ) = 1 − sinθ ="));
        assert!(lines[3].starts_with("haversin(θ) = (1 − cosθ)/2 ="));
        assert!(lines[4].starts_with("hacoversin(θ) = (1 − sinθ)/2 ="));
        assert!(lines[5].starts_with("exsec(θ) = secθ − 1 ="));
        assert!(lines[6].starts_with("excsc(θ) = cscθ − 1 ="));
        assert!(lines[7].starts_with("chord(θ) = 2·sin(θ/2) ="));
    }

    #[test]
    fn test_dead_trig_set_radians_header() {
        let text = compute("deadTrigSet", &[("theta", 1.0)], AngleMode::Radians);
        assert!(text.starts_with("θ = 1 (rad)"), "{}", text);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let text = compute_deg(
            "haversineDistance",
            &[("lat1", 0.0), ("lon1", 0.0), ("lat2", 0.0), ("lon2", 0.0)],
        );
        assert_eq!(text, "Distance ≈ 0.000000 km (0.000000 mi)");
    }

    #[test]
    fn test_haversine_ignores_angle_mode() {
        let pairs = [("lat1", 10.0), ("lon1", 20.0), ("lat2", 30.0), ("lon2", 40.0)];
        let deg = compute("haversineDistance", &pairs, AngleMode::Degrees);
        let rad = compute("haversineDistance", &pairs, AngleMode::Radians);
        assert_eq!(deg, rad);
    }

    // --- Logs & exponentials ---

    #[test]
    fn test_ln() {
        assert_eq!(compute_deg("ln", &[("x", 1.0)]), "ln(1) = 0");
        assert_eq!(
            compute_deg("ln", &[("x", -5.0)]),
            "Domain error: x must be > 0."
        );
        assert_eq!(
            compute_deg("ln", &[("x", 0.0)]),
            "Domain error: x must be > 0."
        );
    }

    #[test]
    fn test_log_base() {
        // x == b divides identical logs: exactly 1
        assert_eq!(
            compute_deg("logBase", &[("x", 5.0), ("b", 5.0)]),
            "log_5(5) = 1"
        );
        let text = compute_deg("logBase", &[("x", 8.0), ("b", 2.0)]);
        assert!(text.starts_with("log_2(8) = "), "{}", text);
        let value: f64 = text.rsplit("= ").next().unwrap().parse().unwrap();
        assert!((value - 3.0).abs() < 1e-12, "{}", text);
        assert_eq!(
            compute_deg("logBase", &[("x", 8.0), ("b", 1.0)]),
            "Domain error: x>0, b>0, b≠1."
        );
        assert_eq!(
            compute_deg("logBase", &[("x", -8.0), ("b", 2.0)]),
            "Domain error: x>0, b>0, b≠1."
        );
    }

    #[test]
    fn test_exp() {
        assert_eq!(compute_deg("exp", &[("x", 0.0)]), "e^x = 1");
    }

    // --- Combinatorics ---

    #[test]
    fn test_factorial_report() {
        assert_eq!(compute_deg("factorial", &[("n", 5.0)]), "5! = 120");
    }

    #[test]
    fn test_factorial_overflow_message() {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::new([("n", 171.0)]);
        let outcome = catalog
            .compute_outcome("factorial", &inputs, AngleMode::Degrees)
            .unwrap();
        assert_eq!(outcome, Outcome::Overflow("Overflow or invalid n (try n ≤ 170).".to_string()));
    }

    #[test]
    fn test_factorial_invalid_input_message() {
        assert_eq!(
            compute_deg("factorial", &[("n", 2.5)]),
            "Overflow or invalid n (try n ≤ 170)."
        );
        assert_eq!(
            compute_deg("factorial", &[("n", -3.0)]),
            "Overflow or invalid n (try n ≤ 170)."
        );
    }

    #[test]
    fn test_ncr() {
        assert_eq!(compute_deg("nCr", &[("n", 5.0), ("r", 2.0)]), "C(5,2) = 10");
        assert_eq!(
            compute_deg("nCr", &[("n", 5.0), ("r", 7.0)]),
            "Require integers with 0 ≤ r ≤ n."
        );
        assert_eq!(
            compute_deg("nCr", &[("n", 5.5), ("r", 2.0)]),
            "Require integers with 0 ≤ r ≤ n."
        );
    }

    #[test]
    fn test_npr() {
        assert_eq!(compute_deg("nPr", &[("n", 5.0), ("r", 2.0)]), "P(5,2) = 20");
        assert_eq!(
            compute_deg("nPr", &[("n", -1.0), ("r", 0.0)]),
            "Require integers with 0 ≤ r ≤ n."
        );
    }

    // --- Boundary behavior ---

    #[test]
    fn test_idempotence() {
        let catalog = Catalog::standard();
        let inputs = ValueInputs::new([("a", 1.0), ("b", -3.0), ("c", 2.0)]);
        let first = catalog
            .compute("quadraticRoots", &inputs, AngleMode::Degrees)
            .unwrap();
        let second = catalog
            .compute("quadraticRoots", &inputs, AngleMode::Degrees)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_numeric_input_propagates_as_nan() {
        let catalog = Catalog::standard();
        let inputs = RawInputs::new([("x1", "0"), ("y1", "0"), ("x2", "oops"), ("y2", "4")]);
        let text = catalog
            .compute("distance2D", &inputs, AngleMode::Degrees)
            .unwrap();
        assert_eq!(text, "√((x₂−x₁)² + (y₂−y₁)²) = NaN");
    }

    #[test]
    fn test_panicking_provider_is_trapped() {
        struct Broken;
        impl InputProvider for Broken {
            fn resolve(&self, _field_id: &str) -> f64 {
                panic!("provider exploded");
            }
        }

        let catalog = Catalog::standard();
        let err = catalog
            .compute("discriminant", &Broken, AngleMode::Degrees)
            .unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_FAILED");
        assert!(err.to_string().contains("provider exploded"));
    }

    #[test]
    fn test_descriptor_json_export() {
        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog.descriptors()).unwrap();
        assert!(json.contains("\"quadraticRoots\""));
        assert!(json.contains("\"Quadratic Roots (ax²+bx+c=0)\""));
    }

    #[test]
    fn test_subset_catalog() {
        let catalog = Catalog::from_operations(vec![Operation::Exp, Operation::NaturalLog]);
        let keys: Vec<&str> = catalog.entries().iter().map(|&(k, _)| k).collect();
        assert_eq!(keys, ["exp", "ln"]);
        assert!(catalog.get("factorial").is_none());
    }
}
