// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense polynomial encoding: one coefficient slot per exponent.

use crate::traits::Polynomial;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial represented by its coefficients in ascending order of degree.
///
/// The coefficient at index `i` belongs to `x^i`:
/// `a_0 + a_1 * x + ... + a_n * x^n`
///
/// Zero slots are kept structurally, so `[6, -2, 0, 5]` and `[6, -2, 0, 5, 0]`
/// are distinct values that evaluate identically.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensePolynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<f64>,
}

/// Writes terms given in descending exponent order in human-readable form,
/// e.g. `5x^3 - 2x + 6`. Zero terms are skipped; nothing left renders as `0`.
pub(crate) fn write_readable(
    f: &mut fmt::Formatter<'_>,
    terms: impl Iterator<Item = (u64, f64)>,
) -> fmt::Result {
    let mut first = true;
    for (degree, coeff) in terms {
        if coeff == 0.0 {
            continue;
        }

        if !first {
            if coeff > 0.0 {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }
        } else if coeff < 0.0 {
            write!(f, "-")?;
        }
        first = false;

        let abs_coeff = coeff.abs();
        if degree == 0 || abs_coeff != 1.0 {
            write!(f, "{abs_coeff}")?;
        }

        if degree > 0 {
            write!(f, "x")?;
            if degree > 1 {
                write!(f, "^{degree}")?;
            }
        }
    }

    if first {
        write!(f, "0")?;
    }

    Ok(())
}

impl fmt::Display for DensePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .map(|(degree, coeff)| (degree as u64, *coeff));
        write_readable(f, terms)
    }
}

impl Default for DensePolynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl DensePolynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients, index = exponent.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// The zero polynomial, stored as a single `0` slot.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0.0],
        }
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// This is the highest slot index, regardless of whether that slot holds a
    /// zero. An empty polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Checks if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }
}

impl Polynomial for DensePolynomial {
    /// Adds two polynomials slot by slot.
    ///
    /// The shorter operand is treated as if padded with zeros, so the result
    /// has `max(len(a), len(b))` slots.
    fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let result = (0..max_length)
            .map(|i| {
                self.coefficients.get(i).copied().unwrap_or(0.0)
                    + other.coefficients.get(i).copied().unwrap_or(0.0)
            })
            .collect();

        DensePolynomial::new(result)
    }

    fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .fold(0.0, |acc, (exponent, coeff)| {
                acc + coeff * x.powf(exponent as f64)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DensePolynomial {
        // 6 - 2x + 5x^3
        DensePolynomial::new(vec![6.0, -2.0, 0.0, 5.0])
    }

    #[test]
    fn test_zero_polynomial() {
        let zero = DensePolynomial::zero();
        assert_eq!(zero.coefficients(), &[0.0]);
        assert_eq!(zero.degree(), 0);
        assert!(zero.is_zero());
        assert_eq!(DensePolynomial::default(), zero);
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(sample().evaluate(-1.0), 3.0);
        assert_eq!(sample().evaluate(0.0), 6.0);
        assert_eq!(sample().evaluate(2.0), 6.0 - 4.0 + 40.0);
    }

    #[test]
    fn test_evaluate_zero_exponent_at_zero() {
        let constant = DensePolynomial::new(vec![7.0]);
        assert_eq!(constant.evaluate(0.0), 7.0);
    }

    #[test]
    fn test_addition_pads_shorter_operand() {
        let other = DensePolynomial::new(vec![3.0, 0.0, 2.0]);
        let sum = sample().add(&other);
        assert_eq!(sum.coefficients(), &[9.0, -2.0, 2.0, 5.0]);

        // Operands are left untouched
        assert_eq!(other.coefficients(), &[3.0, 0.0, 2.0]);
        assert_eq!(other.add(&sample()), sum);
    }

    #[test]
    fn test_addition_keeps_cancelled_slots() {
        let a = DensePolynomial::new(vec![1.0, 2.0]);
        let b = DensePolynomial::new(vec![-1.0, -2.0]);
        let sum = a.add(&b);
        assert_eq!(sum.coefficients(), &[0.0, 0.0]);
        assert!(sum.is_zero());
    }

    #[test]
    fn test_has_root() {
        assert!(!sample().has_root(1.0));
        // x^2 - 1
        let poly = DensePolynomial::new(vec![-1.0, 0.0, 1.0]);
        assert!(poly.has_root(1.0));
        assert!(poly.has_root(-1.0));
        assert!(!poly.has_root(0.5));
    }

    #[test]
    fn test_has_root_is_exact() {
        // 0.1 * 3 - 0.3 is not exactly zero in binary floating point
        let poly = DensePolynomial::new(vec![-0.3, 0.1]);
        assert!(!poly.has_root(3.0));
    }

    #[test]
    fn test_empty_polynomial() {
        let empty = DensePolynomial::new(vec![]);
        assert_eq!(empty.degree(), 0);
        assert_eq!(empty.evaluate(5.0), 0.0);
        assert_eq!(empty.to_string(), "0");
    }

    #[test]
    fn test_polynomial_display() {
        assert_eq!(sample().to_string(), "5x^3 - 2x + 6");
        assert_eq!(
            DensePolynomial::new(vec![1.0, -1.0, -2.5]).to_string(),
            "-2.5x^2 - x + 1"
        );
        assert_eq!(DensePolynomial::new(vec![0.0, 0.0]).to_string(), "0");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_dense() -> impl Strategy<Value = DensePolynomial> {
            prop::collection::vec(-20i32..20, 0..8).prop_map(|coeffs| {
                DensePolynomial::new(coeffs.into_iter().map(|c| f64::from(c) / 4.0).collect())
            })
        }

        fn close(a: f64, b: f64) -> bool {
            (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
        }

        proptest! {
            #[test]
            fn add_matches_evaluation(a in arb_dense(), b in arb_dense()) {
                let sum = a.add(&b);
                prop_assert_eq!(
                    sum.coefficients().len(),
                    a.coefficients().len().max(b.coefficients().len())
                );
                for x in [-2.0, -1.0, 0.0, 1.0, 2.0, 3.5] {
                    prop_assert!(close(sum.evaluate(x), a.evaluate(x) + b.evaluate(x)));
                }
            }

            #[test]
            fn add_is_commutative(a in arb_dense(), b in arb_dense()) {
                prop_assert_eq!(a.add(&b), b.add(&a));
            }
        }
    }

    #[cfg(feature = "serde")]
    mod serialization_tests {
        use super::*;

        #[test]
        fn test_polynomial_bincode_serialization() {
            let poly = sample();
            let bytes = bincode::serialize(&poly).expect("Failed to serialize");
            let reconstructed: DensePolynomial =
                bincode::deserialize(&bytes).expect("Failed to deserialize");
            assert_eq!(poly, reconstructed);
            assert_eq!(poly.evaluate(-1.0), reconstructed.evaluate(-1.0));
        }
    }
}
