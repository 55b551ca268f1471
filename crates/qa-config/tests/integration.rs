//! Integration tests for qa-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge -> validate.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use qa_config::{CONFIG_FILENAME, Config, ConfigError, StopwordList, is_global_config};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_single_root_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
root = true

[ranking]
file_matches = 2
sentence_matches = 4

[tokenizer]
extra_stopwords = "chapter"
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.ranking.file_matches, 2);
    assert_eq!(config.ranking.sentence_matches, 4);
    assert_eq!(config.tokenizer.stopwords, StopwordList::English);
    assert_eq!(config.tokenizer.extra_stopwords, vec!["chapter"]);
    assert_eq!(config.sources, vec![env.path().join(CONFIG_FILENAME)]);
}

#[test]
fn test_load_nested_configs_closest_wins() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[ranking]\nfile_matches = 3\nsentence_matches = 3\n",
    );
    env.create_file(
        &format!("corpus/{CONFIG_FILENAME}"),
        "[ranking]\nsentence_matches = 1\n",
    );
    let cwd = env.create_dir("corpus/deep");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.ranking.file_matches, 3);
    assert_eq!(config.ranking.sentence_matches, 1);
    assert_eq!(config.sources.len(), 2);
}

#[test]
fn test_load_without_local_config() {
    let env = TestEnv::new();
    let cwd = env.create_dir("empty");

    let config = Config::load(&cwd).unwrap();

    // Only a global config, if the machine has one, may contribute
    assert!(config.sources.iter().all(|p| is_global_config(p)));
}

#[test]
fn test_load_rejects_zero_limit() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[ranking]\nsentence_matches = 0\n",
    );

    let err = Config::load(env.path()).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            key: "ranking.sentence_matches",
            ..
        }
    ));
}

#[test]
fn test_load_reports_parse_errors_with_path() {
    let env = TestEnv::new();
    let path = env.create_file(CONFIG_FILENAME, "root = true\n[ranking\n");

    let err = Config::load(env.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}
