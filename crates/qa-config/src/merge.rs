//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::PathBuf;

use crate::{
    Config, RankingSettings, TokenizerSettings,
    parse::{RawConfig, RawRankingSettings, RawTokenizerSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `extra_stopwords`: union of every file's list, duplicates dropped
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut ranking = RankingSettings::default();
    let mut tokenizer = TokenizerSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.ranking {
            apply_raw_ranking(&mut ranking, raw);
        }
        if let Some(ref raw) = parsed.config.tokenizer {
            apply_raw_tokenizer(&mut tokenizer, raw);
        }
    }

    Config {
        ranking,
        tokenizer,
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    }
}

/// Applies raw ranking settings to result, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(v) = raw.file_matches {
        result.file_matches = v;
    }
    if let Some(v) = raw.sentence_matches {
        result.sentence_matches = v;
    }
}

/// Applies raw tokenizer settings to result.
fn apply_raw_tokenizer(result: &mut TokenizerSettings, raw: &RawTokenizerSettings) {
    if let Some(v) = raw.stopwords {
        result.stopwords = v;
    }
    if let Some(ref words) = raw.extra_stopwords {
        for word in words {
            if !result.extra_stopwords.contains(word) {
                result.extra_stopwords.push(word.clone());
            }
        }
    }
    if let Some(v) = raw.min_token_length {
        result.min_token_length = v;
    }
}
