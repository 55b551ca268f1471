//! Text normalization for qa.
//!
//! Turns raw text into the token sequences the ranking engine works on:
//!
//! - [`Tokenizer`] lowercases, strips punctuation and drops stopwords
//! - [`SentenceSplitter`] breaks a document into passages and sentences
//! - [`Stopwords`] is the filter list, passed in explicitly rather than global
//!
//! Both stages sit behind traits ([`Tokenize`], [`SplitSentences`]) so callers
//! can swap the normalization policy without touching ranking code.

#![warn(missing_docs)]

mod sentence;
mod stopwords;
mod tokenize;

pub use sentence::{SentenceSplitter, SplitSentences};
pub use stopwords::Stopwords;
pub use tokenize::{Tokenize, Tokenizer};
