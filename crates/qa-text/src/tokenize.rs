//! Word tokenization.

use qa_config::TokenizerSettings;

use crate::Stopwords;

/// Maps raw text to an ordered sequence of normalized tokens.
///
/// Implementations must be deterministic: the same text always yields the same
/// tokens, since queries and documents are normalized independently.
pub trait Tokenize {
    /// Tokenizes `text`, preserving token order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: lowercase, split on punctuation and whitespace, drop stopwords.
///
/// Any character that is not alphanumeric separates tokens, so punctuation never
/// survives into a token.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Words dropped after lowercasing.
    stopwords: Stopwords,
    /// Shorter tokens are dropped, counted in characters.
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with English stopwords that keeps tokens of any length.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::english(),
            min_token_length: 1,
        }
    }

    /// Creates a tokenizer with custom settings.
    pub fn with_settings(stopwords: Stopwords, min_token_length: usize) -> Self {
        Self {
            stopwords,
            min_token_length,
        }
    }

    /// Creates a tokenizer from the `[tokenizer]` configuration section.
    pub fn from_settings(settings: &TokenizerSettings) -> Self {
        let mut stopwords = Stopwords::for_list(settings.stopwords);
        stopwords.extend(&settings.extra_stopwords);
        Self::with_settings(stopwords, settings.min_token_length)
    }

    /// Returns the stopword filter in use.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .filter(|word| {
                word.chars().count() >= self.min_token_length && !self.stopwords.contains(word)
            })
            .collect()
    }
}
