// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Capabilities shared by the sparse and dense encodings.

/// Operations every polynomial encoding supports.
///
/// Both encodings are immutable: `add` always returns a fresh value and leaves
/// the operands untouched.
pub trait Polynomial: Sized {
    /// Adds two polynomials of the same encoding.
    fn add(&self, other: &Self) -> Self;

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are summed in stored order as `coefficient * x^exponent`, with
    /// `0^0 = 1`.
    fn evaluate(&self, x: f64) -> f64;

    /// Returns `true` when the polynomial evaluates to exactly `0.0` at `x`.
    ///
    /// This is an exact floating point comparison; no tolerance is applied.
    fn has_root(&self, x: f64) -> bool {
        self.evaluate(x) == 0.0
    }
}
