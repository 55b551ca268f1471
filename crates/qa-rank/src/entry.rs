//! Rankable entries and queries.
//!
//! Documents and sentences are both token sequences with a label. They are kept
//! as distinct types so that statistics computed over one kind of collection
//! stay attached to it (see [`IdfIndex`](crate::IdfIndex)).

use std::collections::{BTreeSet, btree_set};

/// A token sequence that can be counted into an IDF index.
pub trait Entry {
    /// Returns the normalized tokens of this entry, in order.
    fn tokens(&self) -> &[String];
}

/// A named document from the corpus with its normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document name, typically the file name.
    name: String,
    /// Normalized tokens in document order.
    tokens: Vec<String>,
}

impl Document {
    /// Creates a document from a name and its tokens.
    ///
    /// A document may have no tokens; it then scores zero for every query.
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Returns the document name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entry for Document {
    fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A candidate sentence with its normalized tokens.
///
/// Always holds at least one token, so density computations never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The literal sentence text.
    text: String,
    /// Normalized tokens in sentence order. Never empty.
    tokens: Vec<String>,
}

impl Sentence {
    /// Creates a sentence, or `None` if normalization left no tokens.
    pub fn new(text: impl Into<String>, tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            text: text.into(),
            tokens,
        })
    }

    /// Returns the literal sentence text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Entry for Sentence {
    fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A set of normalized query terms.
///
/// Duplicates collapse and input order is irrelevant. Terms iterate in sorted
/// order, which keeps floating point score sums reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Distinct query terms.
    terms: BTreeSet<String>,
}

impl Query {
    /// Returns true if `term` is part of the query.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Iterates over the distinct query terms in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.terms.iter()
    }

    /// Returns the number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
