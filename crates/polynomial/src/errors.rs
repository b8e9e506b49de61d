// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur while building, parsing or persisting polynomials.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Constructor inputs do not describe a polynomial (e.g. mismatched lengths)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A chunk of the text form could not be read as a term
    #[error("Parse error in '{input}': {message}")]
    ParseError { input: String, message: String },

    /// Arithmetic overflow or underflow
    #[error("Arithmetic error: {message}")]
    ArithmeticError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PolynomialError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        PolynomialError::ParseError {
            input: input.to_string(),
            message: message.into(),
        }
    }
}
