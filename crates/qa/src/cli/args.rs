//! Clap argument definitions for the `qa` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use qa_config::StopwordList;

/// Parses a result count, rejecting zero.
fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Parses a built-in stopword list name.
fn parse_stopwords(s: &str) -> Result<StopwordList, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "qa")]
#[command(about = "Answer a question with the most relevant sentences from a corpus")]
pub struct Cli {
    /// Directory of text documents to search
    #[arg(required_unless_present = "show_config")]
    pub corpus: Option<PathBuf>,

    /// Question to answer (prompted on stdin when omitted)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Number of top documents to draw sentences from [default: 1]
    #[arg(short = 'f', long, value_parser = parse_limit)]
    pub files: Option<usize>,

    /// Number of sentences to print [default: 1]
    #[arg(short = 's', long, value_parser = parse_limit)]
    pub sentences: Option<usize>,

    /// Built-in stopword list: english or none [default: english]
    #[arg(long, value_parser = parse_stopwords)]
    pub stopwords: Option<StopwordList>,

    /// Output ranked files and sentences as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v for timing, -vv for ranking details)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
