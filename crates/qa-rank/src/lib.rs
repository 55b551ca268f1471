//! Two-stage TF-IDF ranking for passage retrieval.
//!
//! A query is answered in two passes over plain token data:
//!
//! 1. **Document ranking**: every document in the corpus is scored by the sum of
//!    `tf × idf` over the query terms, using an [`IdfIndex<Document>`] built once
//!    over the whole corpus.
//! 2. **Passage ranking**: sentences drawn from the top documents are scored by
//!    the summed IDF of the query terms they contain, with query term density as
//!    the tie-break. This pass uses a fresh [`IdfIndex<Sentence>`] built over the
//!    candidate sentences only.
//!
//! The index type carries the kind of entry it was built from, so a corpus index
//! can't be handed to the passage ranker or the other way round.
//!
//! Everything here is a pure function of its inputs. Tokenization, sentence
//! splitting and file loading live in other crates and reach this one only as
//! token vectors.

#![warn(missing_docs)]

mod documents;
mod entry;
mod error;
mod idf;
mod limit;
mod passages;
mod tf;

pub use documents::{ScoredDocument, top_files};
pub use entry::{Document, Entry, Query, Sentence};
pub use error::RankError;
pub use idf::{IdfIndex, IdfProvider};
pub use passages::{ScoredSentence, top_sentences};
pub use tf::TermFrequencies;
