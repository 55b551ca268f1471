//! Sentence ranking by matched IDF with a query term density tie-break.
//!
//! Sentences are compared on two keys, in order:
//!
//! 1. **Matching word measure**: the summed IDF of every query term that occurs
//!    in the sentence at least once. Repeats don't add anything here.
//! 2. **Query term density**: the number of sentence tokens that are query terms,
//!    repeats included, divided by the sentence length.
//!
//! The IDF values must come from an index built over the candidate sentences,
//! not over the corpus.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::{
    Entry, IdfProvider, Query, RankError, Sentence, TermFrequencies, limit::effective_limit,
};

/// A sentence with its ranking keys for one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSentence<'a> {
    /// The ranked sentence.
    pub sentence: &'a Sentence,
    /// Summed IDF of the query terms present in the sentence.
    pub matching_word_measure: f64,
    /// Fraction of the sentence's tokens that are query terms.
    pub query_term_density: f64,
}

impl ScoredSentence<'_> {
    /// Orders better matches first: higher measure, then higher density.
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .matching_word_measure
            .partial_cmp(&self.matching_word_measure)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .query_term_density
                    .partial_cmp(&self.query_term_density)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

/// Scores one sentence against the query.
fn score_sentence<'a, P: IdfProvider<Sentence>>(
    query: &Query,
    sentence: &'a Sentence,
    idf: &P,
) -> ScoredSentence<'a> {
    let tokens = sentence.tokens();
    let tf = TermFrequencies::count(tokens);

    let mut matching_word_measure = 0.0;
    let mut matched_tokens = 0_u32;
    for term in query {
        let count = tf.get(term);
        if count == 0 {
            continue;
        }
        matching_word_measure += idf.idf(term).unwrap_or(0.0);
        matched_tokens += count;
    }

    ScoredSentence {
        sentence,
        matching_word_measure,
        // Sentence guarantees at least one token
        query_term_density: f64::from(matched_tokens) / tokens.len() as f64,
    }
}

/// Returns the `n` sentences that best match `query`, best first.
///
/// Ranking uses matching word measure descending, then query term density
/// descending. Sentences equal on both keys keep their order from `sentences`.
/// A request for more sentences than exist returns them all.
///
/// # Errors
/// Returns [`RankError::ZeroLimit`] when `n` is zero and
/// [`RankError::EmptyCollection`] when `sentences` is empty.
pub fn top_sentences<'a, P>(
    query: &Query,
    sentences: &'a [Sentence],
    idf: &P,
    n: usize,
) -> Result<Vec<ScoredSentence<'a>>, RankError>
where
    P: IdfProvider<Sentence> + Sync,
{
    let limit = effective_limit(n, sentences.len(), "sentences")?;

    let mut ranked: Vec<ScoredSentence<'a>> = sentences
        .par_iter()
        .map(|sentence| score_sentence(query, sentence, idf))
        .collect();

    ranked.sort_by(ScoredSentence::rank_order);
    ranked.truncate(limit);

    Ok(ranked)
}
