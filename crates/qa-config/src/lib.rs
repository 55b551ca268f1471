//! Configuration system for qa.
//!
//! qa uses TOML configuration files named `.qa.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.qa.toml` files found,
//! then loading `~/.qa.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [ranking]
//! file_matches = 1       # documents searched for sentences
//! sentence_matches = 1   # sentences printed
//!
//! [tokenizer]
//! stopwords = "english"  # or "none"
//! extra_stopwords = ["chapter"]
//! min_token_length = 1
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod validate;

#[cfg(test)]
mod test_support;

use std::{
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawRankingSettings, RawTokenizerSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
use validate::validate_config;

/// Top-level merged configuration for qa.
///
/// This represents the fully resolved configuration after merging all discovered `.qa.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Result counts for the two ranking stages.
    pub ranking: RankingSettings,
    /// Text normalization settings.
    pub tokenizer: TokenizerSettings,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.qa.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.qa.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.qa.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    /// 5. Validates the merged values
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let config = merge_configs(&parsed);
        validate_config(&config)?;
        Ok(config)
    }

    /// Renders the effective settings as TOML, without `root` or source paths.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            ranking: &self.ranking,
            tokenizer: &self.tokenizer,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Borrowed view of the settings tables for serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// `[ranking]` table.
    ranking: &'a RankingSettings,
    /// `[tokenizer]` table.
    tokenizer: &'a TokenizerSettings,
}

/// Result counts for document and sentence ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingSettings {
    /// Number of top documents whose sentences are considered.
    pub file_matches: usize,
    /// Number of top sentences returned.
    pub sentence_matches: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

/// Settings for turning text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizerSettings {
    /// Base stopword list.
    pub stopwords: StopwordList,
    /// Additional words to drop, on top of the base list.
    pub extra_stopwords: Vec<String>,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_length: usize,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self {
            stopwords: StopwordList::English,
            extra_stopwords: Vec::new(),
            min_token_length: 1,
        }
    }
}

/// Built-in stopword lists.
///
/// Config files and the command line accept the same names, parsed by [`str::FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StopwordList {
    /// Standard English stopwords.
    #[default]
    English,
    /// No built-in stopwords; only `extra_stopwords` apply.
    None,
}

impl fmt::Display for StopwordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::None => write!(f, "none"),
        }
    }
}

impl TryFrom<String> for StopwordList {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl str::FromStr for StopwordList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "unknown stopword list '{s}', expected one of: english, none"
            )),
        }
    }
}
