//! Configuration validation.
//!
//! Rejects merged values that the ranking engine can't use.

use crate::{Config, ConfigError};

/// Checks that every numeric setting is in range.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    require_positive("ranking.file_matches", config.ranking.file_matches)?;
    require_positive("ranking.sentence_matches", config.ranking.sentence_matches)?;
    require_positive(
        "tokenizer.min_token_length",
        config.tokenizer.min_token_length,
    )?;
    Ok(())
}

/// Fails with `InvalidValue` when `value` is zero.
fn require_positive(key: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
