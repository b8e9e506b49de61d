// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::load_polynomial;
use anyhow::Result;
use polyterm_polynomial::SparsePolynomial;
use std::path::Path;

pub fn describe(poly: &SparsePolynomial) -> String {
    [
        format!("canonical:  {}", poly),
        format!("readable:   {}", poly.readable()),
        format!("terms:      {}", poly.len()),
        format!("degree:     {}", poly.degree()),
        format!("normalized: {}", poly.is_normalized()),
    ]
    .join("\n")
}

pub fn execute(file: &Path) -> Result<()> {
    let poly = load_polynomial(file)?;
    println!("{}", describe(&poly));
    Ok(())
}
