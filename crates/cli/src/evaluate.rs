// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::load_polynomial;
use anyhow::Result;
use polyterm_config::AppConfig;
use polyterm_polynomial::{Polynomial, SparsePolynomial};
use std::path::Path;

/// Pairs each point with the polynomial's value there.
pub fn table(poly: &SparsePolynomial, points: &[f64]) -> Vec<(f64, f64)> {
    points.iter().map(|&x| (x, poly.evaluate(x))).collect()
}

pub fn execute_eval(file: &Path, x: f64) -> Result<()> {
    let poly = load_polynomial(file)?;
    println!("{}", poly.evaluate(x));
    Ok(())
}

pub fn execute_has_root(file: &Path, x: f64) -> Result<()> {
    let poly = load_polynomial(file)?;
    println!("{}", poly.has_root(x));
    Ok(())
}

pub fn execute_table(file: &Path, config: &AppConfig) -> Result<()> {
    let poly = load_polynomial(file)?;
    for (x, y) in table(&poly, config.sample_points()) {
        println!("{x}\t{y}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_uses_given_points() {
        let poly = SparsePolynomial::parse("6-2x^1+5x^3").unwrap();
        assert_eq!(
            table(&poly, &[-1.0, 0.0, 1.0]),
            vec![(-1.0, 3.0), (0.0, 6.0), (1.0, 9.0)]
        );
        assert!(table(&poly, &[]).is_empty());
    }

    #[test]
    fn test_table_default_points() {
        let poly = SparsePolynomial::parse("x^2").unwrap();
        let values: Vec<f64> = table(&poly, AppConfig::default().sample_points())
            .into_iter()
            .map(|(_, y)| y)
            .collect();
        assert_eq!(values, vec![4.0, 1.0, 0.0, 1.0, 4.0, 12.25]);
    }
}
