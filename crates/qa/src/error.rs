//! Error types for the qa pipeline.

use std::{io, path::PathBuf};

use qa_config::ConfigError;
use qa_rank::RankError;
use thiserror::Error;

/// Errors that can occur while loading a corpus or answering a query.
#[derive(Debug, Error)]
pub enum QaError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The working directory could not be determined.
    #[error("could not determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The corpus path does not exist or is not a directory.
    #[error("corpus directory not found: {path}")]
    CorpusNotFound {
        /// The path that was given.
        path: PathBuf,
    },

    /// Listing the corpus directory failed.
    #[error("failed to list corpus directory {path}: {source}")]
    ListCorpus {
        /// The corpus directory.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A document could not be read.
    #[error("failed to read document {path}: {source}")]
    ReadDocument {
        /// Path to the document.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A document is not valid UTF-8.
    #[error("document is not valid UTF-8: {path}")]
    NotUtf8 {
        /// Path to the document.
        path: PathBuf,
    },

    /// The corpus directory holds no readable documents.
    #[error("no documents found in {path}")]
    EmptyCorpus {
        /// The corpus directory.
        path: PathBuf,
    },

    /// None of the top documents has a sentence with a searchable term.
    #[error("no sentences with searchable terms in the top documents: {}", files.join(", "))]
    NoSentences {
        /// Names of the documents that were searched.
        files: Vec<String>,
    },

    /// Ranking failed.
    #[error(transparent)]
    Rank(#[from] RankError),

    /// The query could not be read from stdin.
    #[error("failed to read query: {0}")]
    ReadQuery(#[source] io::Error),

    /// The answer could not be rendered as JSON.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
