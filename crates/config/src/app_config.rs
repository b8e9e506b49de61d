// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::yaml::load_yaml_with_env;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "polyterm.config.yaml";

/// Environment variables with this prefix override file values,
/// e.g. `POLYTERM_NORMALIZE_PRODUCTS=true`.
pub const ENV_PREFIX: &str = "POLYTERM_";

/// Settings for the `polyterm` command line.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// File combined polynomials are written to when no output is given.
    output: PathBuf,
    /// Points the `table` command evaluates at.
    sample_points: Vec<f64>,
    /// Sort and merge multiplication results before saving them.
    normalize_products: bool,
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("polynomial.txt"),
            sample_points: vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.5],
            normalize_products: false,
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn sample_points(&self) -> &[f64] {
        &self.sample_points
    }

    pub fn normalize_products(&self) -> bool {
        self.normalize_products
    }

    /// The file the configuration was read from, if any.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}

fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("polyterm"))
}

/// Loads configuration from defaults, then the YAML file, then `POLYTERM_*`
/// environment variables.
///
/// `cli_file` must exist when given. Otherwise `polyterm.config.yaml` is
/// searched for from the working directory upward and then in the user config
/// directory; when none is found the file layer is skipped.
pub fn load_config(cli_file: Option<String>) -> Result<AppConfig> {
    let cwd = env::current_dir()?;
    let cli_file = cli_file.map(PathBuf::from);
    let default_dir = default_config_dir();

    let location = resolve_config_path(
        find_in_parent,
        &cwd,
        default_dir.as_deref(),
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let mut config_file = None;

    if let Some(location) = location {
        let path = location.path();
        if location.is_required() || path.exists() {
            let loaded_yaml = load_yaml_with_env(path).context("Configuration file not found")?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
            config_file = Some(path.to_path_buf());
        } else {
            debug!("No configuration file at {:?}, using defaults", path);
        }
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = config_file;

    Ok(config)
}
