//! CLI support for the `qa` binary.

pub mod args;
pub mod logging;
pub mod output;

use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use qa_config::Config;
use qa_text::{SentenceSplitter, Tokenizer};
use tracing::{debug, info};

pub use args::Cli;

use crate::{Engine, Limits, QaError, load_corpus};

/// Runs the CLI and maps the outcome to an exit status.
pub fn run(cli: &Cli) -> ExitCode {
    logging::init(cli.verbose);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads config and corpus, answers one query and prints the result.
fn execute(cli: &Cli) -> Result<(), QaError> {
    let cwd = env::current_dir().map_err(QaError::CurrentDir)?;
    let config = apply_overrides(Config::load(&cwd)?, cli);
    debug!(sources = ?config.sources, "loaded configuration");

    if cli.show_config {
        print!("{}", config.settings_to_toml()?);
        return Ok(());
    }

    // Clap enforces the corpus argument unless --show-config is given
    let Some(corpus_dir) = cli.corpus.as_deref() else {
        return Ok(());
    };

    let corpus = load_corpus(corpus_dir)?;
    info!(dir = %corpus_dir.display(), documents = corpus.len(), "loaded corpus");

    let engine = Engine::new(
        corpus,
        Tokenizer::from_settings(&config.tokenizer),
        SentenceSplitter::new(),
    );

    let query = match &cli.query {
        Some(query) => query.clone(),
        None => prompt_query()?,
    };

    let answer = engine.answer(&query, Limits::from(&config.ranking))?;
    output::print_answer(&answer, cli.json)
}

/// Layers command-line flags over the loaded configuration.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(files) = cli.files {
        config.ranking.file_matches = files;
    }
    if let Some(sentences) = cli.sentences {
        config.ranking.sentence_matches = sentences;
    }
    if let Some(stopwords) = cli.stopwords {
        config.tokenizer.stopwords = stopwords;
    }
    config
}

/// Prompts on stderr and reads one line of query text from stdin.
///
/// An empty line is a valid, empty query. Closed input is an error.
fn prompt_query() -> Result<String, QaError> {
    let mut stderr = io::stderr();
    write!(stderr, "Query: ")
        .and_then(|()| stderr.flush())
        .map_err(QaError::ReadQuery)?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(QaError::ReadQuery)?;
    if read == 0 {
        return Err(QaError::ReadQuery(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a query was entered",
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
