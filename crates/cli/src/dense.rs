// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::save_polynomial;
use anyhow::Result;
use polyterm_config::AppConfig;
use polyterm_polynomial::{DensePolynomial, SparsePolynomial};
use std::path::PathBuf;

pub fn execute(coefficients: Vec<f64>, output: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let dense = DensePolynomial::new(coefficients);
    let sparse = SparsePolynomial::from(&dense);
    let output = save_polynomial(&sparse, output, config)?;
    println!("{} -> {}", dense, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyterm_polynomial::Polynomial;
    use tempfile::tempdir;

    #[test]
    fn test_dense_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("dense.txt");

        execute(
            vec![6.0, -2.0, 0.0, 5.0],
            Some(output.clone()),
            &AppConfig::default(),
        )?;

        assert_eq!(std::fs::read_to_string(&output)?, "6-2x^1+0x^2+5x^3");
        let loaded = SparsePolynomial::from_file(&output)?;
        assert_eq!(loaded.evaluate(-1.0), 3.0);
        assert_eq!(loaded.to_dense().coefficients(), &[6.0, -2.0, 0.0, 5.0]);
        Ok(())
    }
}
