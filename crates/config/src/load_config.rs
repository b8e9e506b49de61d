// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Where a configuration file came from. Only an explicit file is required
/// to exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLocation {
    /// Passed on the command line
    Explicit(PathBuf),
    /// Found by walking up from the working directory
    Discovered(PathBuf),
    /// The per-user default location
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path)
            | ConfigLocation::Discovered(path)
            | ConfigLocation::Default(path) => path,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConfigLocation::Explicit(_))
    }
}

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> Option<ConfigLocation> {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return Some(ConfigLocation::Explicit(cli_file.to_path_buf()));
        }
        return Some(ConfigLocation::Explicit(clean(cwd.join(cli_file))));
    }

    if let Some(found) = find_in_parent(cwd, default_filename) {
        return Some(ConfigLocation::Discovered(found));
    }

    default_config_dir.map(|dir| ConfigLocation::Default(clean(dir.join(default_filename))))
}
