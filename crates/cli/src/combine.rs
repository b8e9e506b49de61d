// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{load_polynomial, save_polynomial};
use anyhow::Result;
use polyterm_config::AppConfig;
use polyterm_polynomial::{Polynomial, SparsePolynomial};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

/// Applies `op` to two polynomials.
///
/// Addition merges by exponent and needs normalized operands, so both sides
/// are normalized first. Products keep first-occurrence order unless
/// `normalize_products` is set.
pub fn combine(
    op: Operation,
    left: &SparsePolynomial,
    right: &SparsePolynomial,
    config: &AppConfig,
) -> Result<SparsePolynomial> {
    let result = match op {
        Operation::Add => left.normalize().add(&right.normalize()),
        Operation::Multiply => {
            let product = left.multiply(right)?;
            if config.normalize_products() {
                product.normalize()
            } else {
                product
            }
        }
    };
    debug!("{:?} produced {} terms", op, result.len());
    Ok(result)
}

pub fn execute(
    op: Operation,
    left: &Path,
    right: &Path,
    output: Option<PathBuf>,
    config: &AppConfig,
) -> Result<()> {
    let left = load_polynomial(left)?;
    let right = load_polynomial(right)?;
    let result = combine(op, &left, &right, config)?;
    let output = save_polynomial(&result, output, config)?;
    println!("{} -> {}", result, output.display());
    Ok(())
}
