//! Stopword filtering for tokenization.
//!
//! The built-in English list is NLTK's, shipped by the `stop-words` crate. It holds
//! function words only, so content words always survive tokenization.
//! Lists are plain values handed to the [`Tokenizer`](crate::Tokenizer); there is
//! no process-wide stopword table.

use std::collections::HashSet;

use qa_config::StopwordList;
use stop_words::LANGUAGE;

/// A set of words to drop during tokenization.
///
/// All words are stored lowercased and lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    /// Lowercased words to drop.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates the standard English stopword list.
    pub fn english() -> Self {
        let mut stopwords = Self::empty();
        let mut add_words = |slice: &[&str]| {
            for word in slice {
                stopwords.words.insert(word.to_lowercase());
            }
        };
        add_words(stop_words::get(LANGUAGE::English));
        stopwords
    }

    /// Creates a filter that drops nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Creates a filter from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::empty();
        stopwords.extend(words);
        stopwords
    }

    /// Creates the filter for a configured base list.
    pub fn for_list(list: StopwordList) -> Self {
        match list {
            StopwordList::English => Self::english(),
            StopwordList::None => Self::empty(),
        }
    }

    /// Adds words to the filter.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Checks if a term is a stopword, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        if self.words.contains(term) {
            return true;
        }
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
