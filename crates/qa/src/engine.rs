//! The two-stage question answering pipeline.

use std::{collections::HashSet, time::Instant};

use qa_config::RankingSettings;
use qa_rank::{
    Document, IdfIndex, Query, ScoredDocument, Sentence, top_files, top_sentences,
};
use qa_text::{SentenceSplitter, SplitSentences, Tokenize, Tokenizer};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{Answer, FileMatch, QaError, RawDocument, SentenceMatch};

/// How many results each ranking stage keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Documents whose sentences are considered.
    pub files: usize,
    /// Sentences returned.
    pub sentences: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::from(&RankingSettings::default())
    }
}

impl From<&RankingSettings> for Limits {
    fn from(settings: &RankingSettings) -> Self {
        Self {
            files: settings.file_matches,
            sentences: settings.sentence_matches,
        }
    }
}

/// A tokenized, indexed corpus that answers queries.
///
/// Documents are tokenized and the corpus IDF index is built once, in [`Engine::new`].
/// Each call to [`Engine::answer`] then ranks documents, splits the best ones into
/// sentences and ranks those against an index built over just those sentences.
#[derive(Debug)]
pub struct Engine<T = Tokenizer, S = SentenceSplitter> {
    /// Raw text of each document, parallel to `documents`.
    texts: Vec<String>,
    /// Tokenized documents in corpus order.
    documents: Vec<Document>,
    /// Corpus-wide IDF.
    idf: IdfIndex<Document>,
    /// Normalizes documents, sentences and queries alike.
    tokenizer: T,
    /// Breaks documents into sentences.
    splitter: S,
}

impl<T, S> Engine<T, S>
where
    T: Tokenize + Sync,
    S: SplitSentences,
{
    /// Tokenizes `corpus` and builds the corpus IDF index.
    pub fn new(corpus: Vec<RawDocument>, tokenizer: T, splitter: S) -> Self {
        let started = Instant::now();

        let documents: Vec<Document> = corpus
            .par_iter()
            .map(|raw| Document::new(raw.name.as_str(), tokenizer.tokenize(&raw.text)))
            .collect();
        let idf = IdfIndex::build(&documents);
        let texts = corpus.into_iter().map(|raw| raw.text).collect();

        info!(
            documents = documents.len(),
            terms = idf.len(),
            elapsed = ?started.elapsed(),
            "indexed corpus"
        );

        Self {
            texts,
            documents,
            idf,
            tokenizer,
            splitter,
        }
    }

    /// Tokenized documents, in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The corpus-wide IDF index.
    pub fn idf(&self) -> &IdfIndex<Document> {
        &self.idf
    }

    /// Normalizes query text into a set of terms.
    pub fn query(&self, text: &str) -> Query {
        self.tokenizer.tokenize(text).into_iter().collect()
    }

    /// Answers `query_text` with the best sentences from the best documents.
    ///
    /// A query with no terms left after normalization is answered anyway: every
    /// document and sentence scores zero, so the first ones in corpus order win.
    ///
    /// # Errors
    /// Returns [`QaError::Rank`] for a zero limit or an empty corpus, and
    /// [`QaError::NoSentences`] when the top documents hold no sentence with a
    /// searchable term.
    pub fn answer(&self, query_text: &str, limits: Limits) -> Result<Answer, QaError> {
        let started = Instant::now();

        let query = self.query(query_text);
        if query.is_empty() {
            warn!(query = query_text, "query has no searchable terms");
        }
        debug!(terms = query.len(), "normalized query");

        let files = top_files(&query, &self.documents, &self.idf, limits.files)?;
        debug!(files = files.len(), "ranked documents");

        let candidates = self.candidate_sentences(&files);
        if candidates.is_empty() {
            return Err(QaError::NoSentences {
                files: files
                    .iter()
                    .map(|scored| scored.document.name().to_string())
                    .collect(),
            });
        }

        let sentence_idf = IdfIndex::build(&candidates);
        let sentences = top_sentences(&query, &candidates, &sentence_idf, limits.sentences)?;
        debug!(
            candidates = candidates.len(),
            sentences = sentences.len(),
            "ranked sentences"
        );

        info!(elapsed = ?started.elapsed(), "answered query");

        Ok(Answer {
            query: query.iter().cloned().collect(),
            files: files.iter().map(FileMatch::from).collect(),
            sentences: sentences.iter().map(SentenceMatch::from).collect(),
        })
    }

    /// Splits and tokenizes the sentences of the ranked documents.
    ///
    /// Sentences keep rank order, then document order. A repeated sentence keeps
    /// only its first position, and sentences with no tokens are dropped.
    fn candidate_sentences(&self, files: &[ScoredDocument<'_>]) -> Vec<Sentence> {
        let mut seen = HashSet::new();
        let mut sentences = Vec::new();

        for scored in files {
            let Some(text) = self.texts.get(scored.index) else {
                continue;
            };
            for span in self.splitter.split(text) {
                if !seen.insert(span) {
                    continue;
                }
                if let Some(sentence) = Sentence::new(span, self.tokenizer.tokenize(span)) {
                    sentences.push(sentence);
                }
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use qa_rank::RankError;
    use qa_text::Stopwords;

    use super::*;

    /// Builds an engine over `(name, text)` pairs with a small fixed stopword list.
    fn engine(files: &[(&str, &str)]) -> Engine {
        let corpus = files
            .iter()
            .map(|(name, text)| RawDocument {
                name: (*name).to_string(),
                text: (*text).to_string(),
            })
            .collect();
        let stopwords = Stopwords::from_words(["the", "a", "on", "in", "are", "is", "and"]);
        Engine::new(
            corpus,
            Tokenizer::with_settings(stopwords, 1),
            SentenceSplitter::new(),
        )
    }

    /// Shorthand for building limits.
    fn limits(files: usize, sentences: usize) -> Limits {
        Limits { files, sentences }
    }

    /// Sentence texts of an answer, in rank order.
    fn texts(answer: &Answer) -> Vec<&str> {
        answer.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_answers_from_best_document() {
        let engine = engine(&[
            ("doc1", "The cat sat on the mat."),
            ("doc2", "The dog ran fast."),
        ]);

        let answer = engine.answer("cat", Limits::default()).unwrap();

        assert_eq!(answer.query, vec!["cat"]);
        assert_eq!(answer.files.len(), 1);
        assert_eq!(answer.files[0].name, "doc1");
        assert!((answer.files[0].score - 2.0_f64.ln()).abs() < 1e-12);
        assert_eq!(texts(&answer), vec!["The cat sat on the mat."]);
    }

    #[test]
    fn test_sentences_follow_file_rank_and_dedupe() {
        let engine = engine(&[
            ("a.txt", "Photosynthesis needs chloroplast cells. Leaves are green."),
            (
                "b.txt",
                "Photosynthesis needs chloroplast cells.\nRoots absorb water.",
            ),
            ("c.txt", "Telescopes watch distant galaxies."),
        ]);

        let answer = engine.answer("chloroplast", limits(2, 3)).unwrap();

        let names: Vec<_> = answer.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(
            texts(&answer),
            vec![
                "Photosynthesis needs chloroplast cells.",
                "Leaves are green.",
                "Roots absorb water.",
            ]
        );
    }

    #[test]
    fn test_sentence_idf_is_scoped_to_candidates() {
        let engine = engine(&[
            (
                "brain.txt",
                "Neuron fires signal.\nNeuron rests quietly here today.",
            ),
            ("sky.txt", "Stars shine brightly."),
        ]);

        let answer = engine.answer("neuron", limits(1, 2)).unwrap();

        // Rare in the corpus, but present in every candidate sentence
        assert!(answer.files[0].score > 0.0);
        assert!(
            answer
                .sentences
                .iter()
                .all(|s| s.matching_word_measure == 0.0)
        );
        // Density decides: 1/3 beats 1/5
        assert_eq!(
            texts(&answer),
            vec!["Neuron fires signal.", "Neuron rests quietly here today."]
        );
    }

    #[test]
    fn test_skips_sentences_without_tokens() {
        let engine = engine(&[("notes.txt", "The. Cat naps!")]);

        let answer = engine.answer("cat", limits(1, 5)).unwrap();

        assert_eq!(texts(&answer), vec!["Cat naps!"]);
    }

    #[test]
    fn test_no_sentences_in_top_document() {
        let engine = engine(&[("empty.txt", "The the. A."), ("other.txt", "Cat.")]);

        let err = engine.answer("dog", Limits::default()).unwrap_err();

        assert!(
            matches!(err, QaError::NoSentences { ref files } if files == &["empty.txt"]),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_stopword_only_query_still_answers() {
        let engine = engine(&[("first.txt", "Cat naps."), ("second.txt", "Dog runs.")]);

        let answer = engine.answer("the a", Limits::default()).unwrap();

        assert!(answer.query.is_empty());
        assert_eq!(answer.files[0].name, "first.txt");
        assert_eq!(answer.files[0].score, 0.0);
        assert_eq!(texts(&answer), vec!["Cat naps."]);
    }

    #[test]
    fn test_default_tokenizer_keeps_content_word_query() {
        let corpus = vec![
            RawDocument {
                name: "a.txt".to_string(),
                text: "Dogs bark loudly.".to_string(),
            },
            RawDocument {
                name: "b.txt".to_string(),
                text: "The computer system crashed during research.".to_string(),
            },
        ];
        let engine = Engine::new(corpus, Tokenizer::new(), SentenceSplitter::new());

        let answer = engine
            .answer("computer system research", Limits::default())
            .unwrap();

        assert_eq!(answer.query, vec!["computer", "research", "system"]);
        assert_eq!(answer.files[0].name, "b.txt");
        assert_eq!(
            texts(&answer),
            vec!["The computer system crashed during research."]
        );
    }

    #[test]
    fn test_duplicate_names_use_their_own_text() {
        let engine = engine(&[
            ("notes.txt", "Bread rises slowly."),
            ("notes.txt", "Glaciers carve valleys."),
        ]);

        let answer = engine.answer("glaciers", Limits::default()).unwrap();

        assert_eq!(texts(&answer), vec!["Glaciers carve valleys."]);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let engine = engine(&[("doc", "Cat naps.")]);

        let err = engine.answer("cat", limits(0, 1)).unwrap_err();

        assert!(matches!(
            err,
            QaError::Rank(RankError::ZeroLimit { what: "documents" })
        ));
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let engine = engine(&[]);

        let err = engine.answer("cat", Limits::default()).unwrap_err();

        assert!(matches!(
            err,
            QaError::Rank(RankError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn test_limits_from_settings() {
        let settings = RankingSettings {
            file_matches: 4,
            sentence_matches: 2,
        };

        assert_eq!(Limits::from(&settings), limits(4, 2));
        assert_eq!(Limits::default(), limits(1, 1));
    }
}
