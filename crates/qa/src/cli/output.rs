//! Answer rendering.

use crate::{Answer, QaError};

/// Prints the ranked sentences, one per line, or the whole answer as JSON.
pub fn print_answer(answer: &Answer, json: bool) -> Result<(), QaError> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
        return Ok(());
    }

    for sentence in &answer.sentences {
        println!("{}", sentence.text);
    }
    Ok(())
}
