//! Inverse document frequency over a collection of entries.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    marker::PhantomData,
};

use tracing::debug;

use crate::Entry;

/// Source of IDF values for entries of kind `S`.
///
/// The type parameter names the collection the values were computed over, so a
/// ranker for sentences only accepts sentence-scoped providers.
pub trait IdfProvider<S> {
    /// Returns the IDF value for a term, or `None` if no entry contains it.
    fn idf(&self, term: &str) -> Option<f64>;
}

/// Per-term statistics recorded while building the index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TermStats {
    /// Number of distinct entries containing the term.
    document_frequency: usize,
    /// `ln(collection_len / document_frequency)`.
    idf: f64,
}

/// IDF values computed over one collection of entries of kind `S`.
///
/// `IDF(t) = ln(D / df(t))`, where `D` is the number of entries and `df(t)` the
/// number of entries containing `t` at least once. Terms that appear in no entry
/// have no value. A term present in every entry has IDF 0.
pub struct IdfIndex<S> {
    /// Statistics for every term seen in the collection.
    terms: HashMap<String, TermStats>,
    /// Number of entries the index was built over.
    collection_len: usize,
    /// Ties the index to the kind of entry it was built from.
    scope: PhantomData<fn() -> S>,
}

impl<S: Entry> IdfIndex<S> {
    /// Builds the index over `entries`.
    ///
    /// Each entry counts at most once per term, however often the term repeats
    /// inside it. An empty collection gives an empty index.
    pub fn build(entries: &[S]) -> Self {
        let mut document_frequencies: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            let unique: HashSet<&str> = entry.tokens().iter().map(String::as_str).collect();
            for term in unique {
                *document_frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let collection_len = entries.len();
        let total = collection_len as f64;
        let terms: HashMap<String, TermStats> = document_frequencies
            .into_iter()
            .map(|(term, document_frequency)| {
                let idf = (total / document_frequency as f64).ln();
                (
                    term.to_string(),
                    TermStats {
                        document_frequency,
                        idf,
                    },
                )
            })
            .collect();

        debug!(
            entries = collection_len,
            terms = terms.len(),
            "built idf index"
        );

        Self {
            terms,
            collection_len,
            scope: PhantomData,
        }
    }
}

impl<S> IdfIndex<S> {
    /// Returns the number of entries containing `term`, zero when unseen.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, |s| s.document_frequency)
    }

    /// Returns the number of entries the index was built over.
    pub fn collection_len(&self) -> usize {
        self.collection_len
    }

    /// Iterates over `(term, idf)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms.iter().map(|(term, s)| (term.as_str(), s.idf))
    }

    /// Returns the number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no term was seen.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S> IdfProvider<S> for IdfIndex<S> {
    fn idf(&self, term: &str) -> Option<f64> {
        self.terms.get(term).map(|s| s.idf)
    }
}

impl<S> Clone for IdfIndex<S> {
    fn clone(&self) -> Self {
        Self {
            terms: self.terms.clone(),
            collection_len: self.collection_len,
            scope: PhantomData,
        }
    }
}

impl<S> fmt::Debug for IdfIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdfIndex")
            .field("collection_len", &self.collection_len)
            .field("terms", &self.terms.len())
            .finish()
    }
}
