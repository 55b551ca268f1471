//! Sentence splitting.
//!
//! Documents are split into passages at line breaks, then each passage is split
//! into sentences after terminal punctuation (`.`, `!`, `?`) that is followed by
//! whitespace or the end of the passage. Runs such as `?!` or `...` and closing
//! quotes or brackets stay attached to the sentence they end. A period inside a
//! number like `3.14` is not a boundary, and neither is the period after a common
//! title or abbreviation (`Mr.`, `Dr.`, `e.g.`) or a single capital initial.

/// Lowercased words whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "fig", "e.g", "i.e",
];

/// Splits text into sentence-level spans.
pub trait SplitSentences {
    /// Returns the sentences of `text` in order, trimmed and never empty.
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Default punctuation-based sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Creates a new splitter.
    pub fn new() -> Self {
        Self
    }
}

impl SplitSentences for SentenceSplitter {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        for passage in text.lines() {
            split_passage(passage, &mut sentences);
        }
        sentences
    }
}

/// Returns true for characters that end a sentence.
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Returns true for characters that may trail terminal punctuation.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

/// Appends the sentences of a single passage to `out`.
fn split_passage<'t>(passage: &'t str, out: &mut Vec<&'t str>) {
    let mut start = 0;
    let mut chars = passage.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        let mut end = passage.len();
        while let Some(&(i, next)) = chars.peek() {
            if is_terminal(next) || is_closing(next) {
                chars.next();
                continue;
            }
            end = i;
            break;
        }

        let at_boundary = passage[end..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);
        let lone_period = c == '.' && end == pos + 1;
        if at_boundary && !(lone_period && ends_with_abbreviation(&passage[start..pos])) {
            push_trimmed(&passage[start..end], out);
            start = end;
        }
    }

    push_trimmed(&passage[start..], out);
}

/// Checks whether the last word of `text` is a known abbreviation or an initial.
fn ends_with_abbreviation(text: &str) -> bool {
    let Some(word) = text.split_whitespace().next_back() else {
        return false;
    };
    let word = word.trim_start_matches(['(', '[', '"', '\'', '\u{201C}', '\u{2018}']);

    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_uppercase();
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Pushes `span` trimmed, unless it is blank.
fn push_trimmed<'t>(span: &'t str, out: &mut Vec<&'t str>) {
    let span = span.trim();
    if !span.is_empty() {
        out.push(span);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        SentenceSplitter::new().split(text)
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            split("The cat sat. The dog ran! Did it stop?"),
            vec!["The cat sat.", "The dog ran!", "Did it stop?"]
        );
    }

    #[test]
    fn keeps_trailing_fragment() {
        assert_eq!(
            split("First sentence. and a fragment"),
            vec!["First sentence.", "and a fragment"]
        );
    }

    #[test]
    fn lines_are_separate_passages() {
        assert_eq!(
            split("Title line\nBody text here. More text.\n\nLast line"),
            vec!["Title line", "Body text here.", "More text.", "Last line"]
        );
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(split("One.\r\nTwo."), vec!["One.", "Two."]);
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        assert_eq!(
            split("Pi is roughly 3.14 in value. Next."),
            vec!["Pi is roughly 3.14 in value.", "Next."]
        );
    }

    #[test]
    fn punctuation_runs_stay_together() {
        assert_eq!(
            split("Really?! Yes... Fine."),
            vec!["Really?!", "Yes...", "Fine."]
        );
    }

    #[test]
    fn closing_quotes_stay_attached() {
        assert_eq!(
            split("He said \"stop.\" Then he left. (It was late.) End"),
            vec!["He said \"stop.\"", "Then he left.", "(It was late.)", "End"]
        );
    }

    #[test]
    fn titles_do_not_end_sentences() {
        assert_eq!(
            split("Mr. Smith invented the telephone. Dr. Watson answered."),
            vec!["Mr. Smith invented the telephone.", "Dr. Watson answered."]
        );
    }

    #[test]
    fn initials_and_latin_abbreviations_stay_inside() {
        assert_eq!(
            split("J. R. Tolkien wrote (e.g. novels). Then he slept."),
            vec!["J. R. Tolkien wrote (e.g. novels).", "Then he slept."]
        );
    }

    #[test]
    fn abbreviation_with_extra_punctuation_still_ends() {
        assert_eq!(
            split("Ask the Dr.! She knows."),
            vec!["Ask the Dr.!", "She knows."]
        );
    }

    #[test]
    fn blank_input_gives_nothing() {
        assert!(split("").is_empty());
        assert!(split("   \n\n  ").is_empty());
    }
}
