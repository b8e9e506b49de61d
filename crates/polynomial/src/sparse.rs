// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse polynomial encoding: an explicit list of `(coefficient, exponent)` terms.

use crate::dense::{write_readable, DensePolynomial};
use crate::errors::PolynomialError;
use crate::traits::Polynomial;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `coefficient * x^exponent` contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u32,
}

impl Term {
    pub fn new(coefficient: f64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
}

/// A polynomial stored as an ordered list of terms.
///
/// The term list is kept exactly as produced by the operation that built it:
///
/// - [`SparsePolynomial::new`] and [`SparsePolynomial::from_terms`] keep the
///   caller's order, duplicates included.
/// - [`Polynomial::add`] emits terms in ascending exponent order when both
///   operands are normalized.
/// - [`SparsePolynomial::multiply`] emits exponents in the order they are
///   first produced by the cross product.
/// - [`SparsePolynomial::normalize`] sorts and merges.
///
/// Zero coefficients are never pruned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparsePolynomial {
    pub(crate) terms: Vec<Term>,
}

/// Renders the canonical one-line text form, e.g. `6-2x^1+5x^3`.
///
/// Terms appear in stored order. Every term after the first is prefixed with
/// `+` unless its rendered coefficient already starts with `-`, and the
/// `x^exponent` suffix is omitted for exponent 0. Coefficients use the
/// shortest decimal form that reads back to the same `f64`.
impl fmt::Display for SparsePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let coefficient = term.coefficient.to_string();
            if i > 0 && !coefficient.starts_with('-') {
                write!(f, "+")?;
            }
            write!(f, "{coefficient}")?;
            if term.exponent != 0 {
                write!(f, "x^{}", term.exponent)?;
            }
        }
        Ok(())
    }
}

/// Human-readable rendering of a [`SparsePolynomial`], built from its
/// normalized terms without going through the dense encoding.
pub struct Readable<'a>(&'a SparsePolynomial);

impl fmt::Display for Readable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        write_readable(
            f,
            normalized
                .terms
                .iter()
                .rev()
                .map(|t| (u64::from(t.exponent), t.coefficient)),
        )
    }
}

impl Default for SparsePolynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<&DensePolynomial> for SparsePolynomial {
    /// One term per slot, zero slots included, so the result is normalized.
    fn from(dense: &DensePolynomial) -> Self {
        let terms = (0u32..)
            .zip(dense.coefficients())
            .map(|(exponent, coefficient)| Term::new(*coefficient, exponent))
            .collect();
        Self { terms }
    }
}

impl SparsePolynomial {
    /// Creates a polynomial from paired coefficient and exponent vectors.
    ///
    /// The pairs are stored in the given order; nothing is sorted or merged.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if the vectors differ in length.
    pub fn new(coefficients: Vec<f64>, exponents: Vec<u32>) -> Result<Self, PolynomialError> {
        if coefficients.len() != exponents.len() {
            return Err(PolynomialError::InvalidArgument {
                message: format!(
                    "coefficients ({}) and exponents ({}) must have the same length",
                    coefficients.len(),
                    exponents.len()
                ),
            });
        }

        let terms = coefficients
            .into_iter()
            .zip(exponents)
            .map(|(coefficient, exponent)| Term::new(coefficient, exponent))
            .collect();
        Ok(Self { terms })
    }

    /// Creates a polynomial from terms, stored as given.
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// The zero polynomial, stored as the single term `0 * x^0`.
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::new(0.0, 0)],
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Coefficients in stored order.
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.coefficient).collect()
    }

    /// Exponents in stored order.
    pub fn exponents(&self) -> Vec<u32> {
        self.terms.iter().map(|t| t.exponent).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the highest stored exponent, or 0 for an empty term list.
    pub fn degree(&self) -> u32 {
        self.terms.iter().map(|t| t.exponent).max().unwrap_or(0)
    }

    /// Checks if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient == 0.0)
    }

    /// Checks whether exponents are strictly ascending.
    pub fn is_normalized(&self) -> bool {
        self.terms
            .windows(2)
            .all(|pair| pair[0].exponent < pair[1].exponent)
    }

    /// Returns the normalized form: terms sorted by exponent with duplicate
    /// exponents merged into one term.
    ///
    /// Sorting is stable, so duplicates are summed in stored order. Terms
    /// whose coefficients cancel are kept with a zero coefficient.
    pub fn normalize(&self) -> Self {
        let mut sorted = self.terms.clone();
        sorted.sort_by_key(|t| t.exponent);

        let mut terms: Vec<Term> = Vec::with_capacity(sorted.len());
        for term in sorted {
            match terms.last_mut() {
                Some(last) if last.exponent == term.exponent => {
                    last.coefficient += term.coefficient
                }
                _ => terms.push(term),
            }
        }

        Self { terms }
    }

    /// Multiplies two polynomials term by term.
    ///
    /// Every pair `(a, b)` with `a` from `self` (outer loop) and `b` from
    /// `other` (inner loop) contributes `a.coefficient * b.coefficient` at
    /// exponent `a.exponent + b.exponent`. A product whose exponent was
    /// already produced is added into that earlier term; otherwise it is
    /// appended. The result is therefore ordered by first occurrence and is
    /// not necessarily normalized, e.g. `(x + 1)(1 + x)` yields exponents
    /// `1, 2, 0`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ArithmeticError` if an exponent sum does not
    /// fit in a `u32`.
    pub fn multiply(&self, other: &Self) -> Result<Self, PolynomialError> {
        let mut terms: Vec<Term> = Vec::new();
        let mut slots: HashMap<u32, usize> = HashMap::new();

        for lhs in &self.terms {
            for rhs in &other.terms {
                let exponent = lhs.exponent.checked_add(rhs.exponent).ok_or_else(|| {
                    PolynomialError::ArithmeticError {
                        message: format!(
                            "exponent overflow: x^{} * x^{}",
                            lhs.exponent, rhs.exponent
                        ),
                    }
                })?;
                let coefficient = lhs.coefficient * rhs.coefficient;

                match slots.entry(exponent) {
                    Entry::Occupied(slot) => terms[*slot.get()].coefficient += coefficient,
                    Entry::Vacant(slot) => {
                        slot.insert(terms.len());
                        terms.push(Term::new(coefficient, exponent));
                    }
                }
            }
        }

        Ok(Self { terms })
    }

    /// Renders the polynomial like [`DensePolynomial`]'s `Display`
    /// (`5x^3 - 2x + 6`) after merging duplicate exponents. Memory use depends
    /// on the number of terms only, not on the degree.
    pub fn readable(&self) -> Readable<'_> {
        Readable(self)
    }

    /// Converts to the dense encoding, summing terms that share an exponent.
    ///
    /// The result has `degree() + 1` slots, so very large exponents allocate
    /// accordingly; use [`SparsePolynomial::readable`] for display. An empty
    /// term list converts to the dense zero polynomial.
    pub fn to_dense(&self) -> DensePolynomial {
        if self.terms.is_empty() {
            return DensePolynomial::zero();
        }

        let mut coefficients = vec![0.0; self.degree() as usize + 1];
        for term in &self.terms {
            coefficients[term.exponent as usize] += term.coefficient;
        }
        DensePolynomial::new(coefficients)
    }
}

impl Polynomial for SparsePolynomial {
    /// Merges the two term lists by exponent.
    ///
    /// Both operands are expected to be normalized; the merge walks them with
    /// one cursor each, emitting the smaller exponent first and summing terms
    /// with equal exponents. When that precondition holds the result is
    /// normalized too. A sum of zero is kept as a zero-coefficient term.
    fn add(&self, other: &Self) -> Self {
        let lhs = &self.terms;
        let rhs = &other.terms;
        let mut terms = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() && j < rhs.len() {
            if lhs[i].exponent == rhs[j].exponent {
                terms.push(Term::new(
                    lhs[i].coefficient + rhs[j].coefficient,
                    lhs[i].exponent,
                ));
                i += 1;
                j += 1;
            } else if lhs[i].exponent < rhs[j].exponent {
                terms.push(lhs[i]);
                i += 1;
            } else {
                terms.push(rhs[j]);
                j += 1;
            }
        }

        terms.extend_from_slice(&lhs[i..]);
        terms.extend_from_slice(&rhs[j..]);

        Self { terms }
    }

    fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().fold(0.0, |acc, term| {
            acc + term.coefficient * x.powf(f64::from(term.exponent))
        })
    }
}
