//! Document ranking by summed TF-IDF.
//!
//! Each document is scored against the query using raw term counts and a
//! corpus-scoped IDF index:
//!
//! ```text
//! score(d) = Σ_{t ∈ query} idf(t) × tf(t, d)
//! ```
//!
//! Terms the index has never seen, or that the document lacks, contribute zero.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::{
    Document, Entry, IdfProvider, Query, RankError, TermFrequencies, limit::effective_limit,
};

/// A document with its TF-IDF score for one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    /// Position of the document in the slice passed to [`top_files`].
    pub index: usize,
    /// The ranked document.
    pub document: &'a Document,
    /// Summed TF-IDF over the query terms.
    pub score: f64,
}

/// Computes the summed TF-IDF score of `document` for `query`.
fn tf_idf_score<P: IdfProvider<Document>>(query: &Query, document: &Document, idf: &P) -> f64 {
    let tf = TermFrequencies::count(document.tokens());
    query.iter().fold(0.0, |score, term| {
        match (tf.get(term), idf.idf(term)) {
            (0, _) | (_, None) => score,
            (count, Some(value)) => score + value * f64::from(count),
        }
    })
}

/// Returns the `n` documents that best match `query`, best first.
///
/// Documents are sorted by descending score. Documents with exactly equal scores
/// keep their order from `documents`. A request for more documents than exist
/// returns them all.
///
/// # Errors
/// Returns [`RankError::ZeroLimit`] when `n` is zero and
/// [`RankError::EmptyCollection`] when `documents` is empty.
pub fn top_files<'a, P>(
    query: &Query,
    documents: &'a [Document],
    idf: &P,
    n: usize,
) -> Result<Vec<ScoredDocument<'a>>, RankError>
where
    P: IdfProvider<Document> + Sync,
{
    let limit = effective_limit(n, documents.len(), "documents")?;

    let mut ranked: Vec<ScoredDocument<'a>> = documents
        .par_iter()
        .enumerate()
        .map(|(index, document)| ScoredDocument {
            index,
            document,
            score: tf_idf_score(query, document, idf),
        })
        .collect();

    // Stable sort: exact ties keep corpus order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    Ok(ranked)
}
