//! Owned, serializable query results.

use qa_rank::{ScoredDocument, ScoredSentence};
use serde::Serialize;

/// The result of answering one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Normalized query terms, sorted.
    pub query: Vec<String>,
    /// Top documents, best first.
    pub files: Vec<FileMatch>,
    /// Top sentences from those documents, best first.
    pub sentences: Vec<SentenceMatch>,
}

/// A ranked document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileMatch {
    /// Document name.
    pub name: String,
    /// Summed TF-IDF over the query terms.
    pub score: f64,
}

impl From<&ScoredDocument<'_>> for FileMatch {
    fn from(scored: &ScoredDocument<'_>) -> Self {
        Self {
            name: scored.document.name().to_string(),
            score: scored.score,
        }
    }
}

/// A ranked sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceMatch {
    /// Sentence text as it appears in the document, trimmed.
    pub text: String,
    /// Summed sentence-level IDF of the query terms it contains.
    pub matching_word_measure: f64,
    /// Fraction of its tokens that are query terms.
    pub query_term_density: f64,
}

impl From<&ScoredSentence<'_>> for SentenceMatch {
    fn from(scored: &ScoredSentence<'_>) -> Self {
        Self {
            text: scored.sentence.text().to_string(),
            matching_word_measure: scored.matching_word_measure,
            query_term_density: scored.query_term_density,
        }
    }
}
