// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reading and writing the text form.

use crate::errors::PolynomialError;
use crate::sparse::SparsePolynomial;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

impl SparsePolynomial {
    /// Reads exactly one line from `reader` and parses it.
    ///
    /// The line terminator is stripped; anything after the first line is
    /// left unread.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if reading fails and
    /// `PolynomialError::ParseError` if the source is empty or the line is
    /// malformed.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, PolynomialError> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(PolynomialError::parse("", "no polynomial line to read"));
        }

        let line = line.trim_end_matches(['\n', '\r']);
        trace!(line, "parsing polynomial line");
        SparsePolynomial::parse(line)
    }

    /// Reads a polynomial from the first line of the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolynomialError> {
        let path = path.as_ref();
        debug!("Reading polynomial from {}", path.display());
        let file = File::open(path)?;
        SparsePolynomial::from_reader(BufReader::new(file))
    }

    /// Writes the canonical text form to `writer` as a single line without a
    /// trailing newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), PolynomialError> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the canonical text form to `path`, replacing any existing
    /// content.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PolynomialError> {
        let path = path.as_ref();
        debug!("Saving polynomial with {} terms to {}", self.len(), path.display());
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}
