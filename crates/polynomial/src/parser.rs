// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parsing of the one-line text form.
//!
//! ```text
//! polynomial  := term (sign term)*
//! term        := [coefficient] ["x" ["^" exponent]]
//! coefficient := decimal number | "" (1) | "+" (1) | "-" (-1)
//! exponent    := unsigned integer, 1 when "^exponent" is missing, 0 without "x"
//! ```
//!
//! The line is cut immediately before every `+` and `-`, so a sign can never
//! appear inside a term. Coefficients in exponential notation with a signed
//! exponent (`1e-5`) and negative exponents are not representable. Whitespace
//! is trimmed around each chunk and around the coefficient, never between a
//! sign and its number and never inside the exponent.

use crate::errors::PolynomialError;
use crate::sparse::{SparsePolynomial, Term};
use std::str::FromStr;

/// Splits `line` before every sign character, dropping the empty chunk a
/// leading sign would otherwise produce.
pub(crate) fn split_terms(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (i, c) in line.char_indices() {
        if i > 0 && (c == '+' || c == '-') {
            chunks.push(&line[start..i]);
            start = i;
        }
    }
    chunks.push(&line[start..]);
    chunks
}

fn parse_coefficient(term: &str, literal: &str) -> Result<f64, PolynomialError> {
    literal
        .parse::<f64>()
        .map_err(|e| PolynomialError::parse(term, format!("invalid coefficient '{literal}': {e}")))
}

/// Parses a single trimmed chunk into a term.
pub(crate) fn parse_term(chunk: &str) -> Result<Term, PolynomialError> {
    let term = chunk.trim();
    if term.is_empty() {
        return Err(PolynomialError::parse(chunk, "empty term"));
    }

    let Some((coefficient, exponent)) = term.split_once('x') else {
        return Ok(Term::new(parse_coefficient(term, term)?, 0));
    };

    let coefficient = match coefficient.trim() {
        "" | "+" => 1.0,
        "-" => -1.0,
        literal => parse_coefficient(term, literal)?,
    };

    let exponent = if exponent.is_empty() {
        1
    } else {
        let literal = exponent.replace('^', "");
        literal.parse::<u32>().map_err(|e| {
            PolynomialError::parse(term, format!("invalid exponent '{literal}': {e}"))
        })?
    };

    Ok(Term::new(coefficient, exponent))
}

impl SparsePolynomial {
    /// Parses a polynomial from its one-line text form, keeping terms in the
    /// order they are written.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ParseError` for the first chunk that is not a
    /// valid term.
    pub fn parse(line: &str) -> Result<Self, PolynomialError> {
        let terms = split_terms(line)
            .into_iter()
            .map(parse_term)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SparsePolynomial::from_terms(terms))
    }
}

impl FromStr for SparsePolynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SparsePolynomial::parse(s)
    }
}
