//! # Arithmetic Primitives
//!
//! Factorial, safe division, and the factorial-ratio combinatorics built on
//! them.
//!
//! ## Edge-Case Policies
//!
//! - `factorial` signals invalid input (non-integer, negative, non-finite)
//!   with `NaN` and overflow with `f64::INFINITY` - an explicit sentinel
//!   rather than a silent wrap or a panic.
//! - `safe_div` turns division by exactly zero into `NaN`; it never faults.
//! - `combinations` / `permutations` assume already-validated inputs; the
//!   registry owns the integrality and range guards.

/// Largest n for which n! is representable as a finite f64.
///
/// 171! ≈ 1.24e309 exceeds f64::MAX (≈ 1.8e308).
pub const FACTORIAL_MAX_N: f64 = 170.0;

/// Calculate n! for non-negative integer n
///
/// # Policy
/// - Non-integer, negative, or non-finite n → `NaN`
/// - n > 170 → `f64::INFINITY` (overflow sentinel)
/// - Otherwise the exact product 1·2·…·n
#[inline]
pub fn factorial(n: f64) -> f64 {
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 {
        return f64::NAN;
    }
    if n > FACTORIAL_MAX_N {
        return f64::INFINITY;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Divide a by b, yielding `NaN` instead of faulting when b is zero
///
/// Note this is stricter than IEEE division: `1.0 / 0.0` would be infinity,
/// but a zero denominator here means the quantity (e.g. a slope between two
/// points on a vertical line) is undefined.
#[inline]
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        f64::NAN
    } else {
        a / b
    }
}

/// True when x is a finite value with no fractional part.
///
/// `NaN` and infinities are not integers.
#[inline]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Combinations C(n, r) = n! / (r!(n−r)!)
///
/// Assumes integers with 0 ≤ r ≤ n (the registry validates before calling).
#[inline]
pub fn combinations(n: f64, r: f64) -> f64 {
    factorial(n) / (factorial(r) * factorial(n - r))
}

/// Permutations P(n, r) = n! / (n−r)!
///
/// Assumes integers with 0 ≤ r ≤ n (the registry validates before calling).
#[inline]
pub fn permutations(n: f64, r: f64) -> f64 {
    factorial(n) / factorial(n - r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
    }

    #[test]
    fn test_factorial_invalid_inputs() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(f64::NAN).is_nan());
        assert!(factorial(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_factorial_overflow_threshold() {
        // 170! is the last finite value in f64
        assert!(factorial(170.0).is_finite());
        assert_eq!(factorial(171.0), f64::INFINITY);
        assert_eq!(factorial(1000.0), f64::INFINITY);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert!(safe_div(1.0, 0.0).is_nan());
        assert!(safe_div(0.0, 0.0).is_nan());
        assert_eq!(safe_div(-6.0, 3.0), -2.0);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(7.0));
        assert!(is_integer(0.0));
        assert!(is_integer(-3.0));
        assert!(!is_integer(1.5));
        assert!(!is_integer(f64::NAN));
        assert!(!is_integer(f64::INFINITY));
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(5.0, 2.0), 10.0);
        assert_eq!(combinations(10.0, 0.0), 1.0);
        assert_eq!(combinations(10.0, 10.0), 1.0);
        // 52! exceeds 2^53, so the factorial ratio is only approximate
        let hands = combinations(52.0, 5.0);
        assert!((hands - 2_598_960.0).abs() / 2_598_960.0 < 1e-12, "{}", hands);
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5.0, 2.0), 20.0);
        assert_eq!(permutations(4.0, 4.0), 24.0);
        assert_eq!(permutations(7.0, 0.0), 1.0);
    }
}
