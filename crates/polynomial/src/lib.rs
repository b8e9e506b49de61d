// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Single-variable polynomials with `f64` coefficients, in two encodings:
//!
//! - [`SparsePolynomial`]: an explicit list of `(coefficient, exponent)` terms.
//!   Supports addition, multiplication, evaluation, root testing,
//!   normalization and a one-line text form.
//! - [`DensePolynomial`]: one coefficient slot per exponent. Supports
//!   addition, evaluation and root testing.
//!
//! Both implement the [`Polynomial`] trait and convert into each other.
//!
//! ## Features
//!
//! - Text form: `6-2x^1+5x^3`, parsed with [`SparsePolynomial::parse`] or
//!   `str::parse`, rendered with `Display`, read from and written to files.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Example
//!
//! ```
//! use polyterm_polynomial::{Polynomial, SparsePolynomial};
//!
//! let a: SparsePolynomial = "1+1x^1".parse().unwrap();
//! let square = a.multiply(&a).unwrap();
//! assert_eq!(square.to_string(), "1+2x^1+1x^2");
//! assert_eq!(square.evaluate(2.0), 9.0);
//! assert!(square.has_root(-1.0));
//! ```

mod dense;
mod errors;
mod io;
mod parser;
mod sparse;
mod traits;

pub use dense::DensePolynomial;
pub use errors::PolynomialError;
pub use sparse::{Readable, SparsePolynomial, Term};
pub use traits::Polynomial;
