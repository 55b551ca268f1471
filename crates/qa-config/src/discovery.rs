//! Locating `.qa.toml` files.
//!
//! A query run can be shaped by several config files: one per ancestor directory of
//! the working directory, plus a per-user file in the home directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of every qa config file, local or global.
pub const CONFIG_FILENAME: &str = ".qa.toml";

/// Lists the config files that apply to `cwd`, highest precedence first.
///
/// Ancestors of `cwd` are checked from nearest to farthest. A file marked
/// `root = true` ends the list: nothing above it, and not the home config, is read.
/// Otherwise `~/.qa.toml` is appended last when it exists and was not already
/// reached as an ancestor.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops_here = is_root_config(&candidate);
        configs.push(candidate);
        if stops_here {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file() && !configs.contains(p)) {
        configs.push(global);
    }
    configs
}

/// Location of the per-user config, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// True when `path` is the per-user config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
