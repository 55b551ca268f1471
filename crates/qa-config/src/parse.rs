//! Configuration file parsing.
//!
//! Parses individual `.qa.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, StopwordList};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Ranking section.
    pub ranking: Option<RawRankingSettings>,
    /// Tokenizer section.
    pub tokenizer: Option<RawTokenizerSettings>,
}

/// Raw ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankingSettings {
    /// Number of top documents to draw sentences from.
    pub file_matches: Option<usize>,
    /// Number of top sentences to return.
    pub sentence_matches: Option<usize>,
}

/// Raw tokenizer settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTokenizerSettings {
    /// Base stopword list name.
    pub stopwords: Option<StopwordList>,
    /// Additional stopwords. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub extra_stopwords: Option<Vec<String>>,
    /// Minimum token length in characters.
    pub min_token_length: Option<usize>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks whether a config file sets `root = true`.
///
/// Unreadable or malformed files are treated as non-root; the error surfaces later
/// when the file is parsed for real.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
