//! Error types for the qa-rank crate.

use thiserror::Error;

/// Errors raised when a ranking call is given inputs it can't rank.
///
/// Unknown query terms are not errors: they contribute nothing to a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A result count of zero was requested.
    #[error("requested zero {what}; at least one result is required")]
    ZeroLimit {
        /// What was being ranked ("documents" or "sentences").
        what: &'static str,
    },

    /// Results were requested from an empty candidate set.
    #[error("no {what} to rank")]
    EmptyCollection {
        /// What was being ranked ("documents" or "sentences").
        what: &'static str,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_collection() {
        let err = RankError::ZeroLimit { what: "sentences" };
        assert_eq!(
            err.to_string(),
            "requested zero sentences; at least one result is required"
        );

        let err = RankError::EmptyCollection { what: "documents" };
        assert_eq!(err.to_string(), "no documents to rank");
    }
}
