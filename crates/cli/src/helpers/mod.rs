// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polyterm_config::AppConfig;
use polyterm_polynomial::SparsePolynomial;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod telemetry;

/// Reads a polynomial file, naming the file in any error.
pub fn load_polynomial(path: &Path) -> Result<SparsePolynomial> {
    SparsePolynomial::from_file(path)
        .with_context(|| format!("Could not read polynomial from {:?}", path))
}

/// Saves `poly` to `output`, or to the configured default output.
pub fn save_polynomial(
    poly: &SparsePolynomial,
    output: Option<PathBuf>,
    config: &AppConfig,
) -> Result<PathBuf> {
    let output = output.unwrap_or_else(|| config.output().to_path_buf());
    poly.save_to_file(&output)
        .with_context(|| format!("Could not write polynomial to {:?}", output))?;
    info!("Wrote {} terms to {:?}", poly.len(), output);
    Ok(output)
}
