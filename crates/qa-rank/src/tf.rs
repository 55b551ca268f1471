//! Raw term frequency counting.

use std::collections::HashMap;

/// Occurrence counts of each token within one document or sentence.
///
/// Counts are raw, not normalized by length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    /// Token to number of occurrences.
    counts: HashMap<String, u32>,
}

impl TermFrequencies {
    /// Counts every occurrence of every token, repeats included.
    pub fn count<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_string(), 1);
            }
        }
        Self { counts }
    }

    /// Returns the count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Adds the counts of `other` into this map.
    pub fn merge(&mut self, other: &Self) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0) += count;
        }
    }

    /// Iterates over `(token, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Returns the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
