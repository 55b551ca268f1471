//! qa: question answering over a folder of text.
//!
//! Loads every document in a corpus directory, ranks the documents against a query by
//! TF-IDF, then ranks the sentences of the best documents and returns the top ones.
//!
//! The ranking itself lives in `qa-rank` and text normalization in `qa-text`. This crate
//! wires them together:
//!
//! - [`load_corpus`] reads the documents from disk
//! - [`Engine`] tokenizes and indexes them once, then answers queries
//! - [`cli`] holds the `qa` binary's argument parsing and output

#![warn(missing_docs)]

mod answer;
pub mod cli;
mod corpus;
mod engine;
mod error;

pub use answer::{Answer, FileMatch, SentenceMatch};
pub use corpus::{RawDocument, load_corpus};
pub use engine::{Engine, Limits};
pub use error::QaError;
