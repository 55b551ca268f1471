//! Corpus loading.
//!
//! A corpus is a flat directory of text files. Subdirectories and dotfiles are ignored.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::QaError;

/// A document as read from disk, before tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// File name, without the corpus directory.
    pub name: String,
    /// Full file contents.
    pub text: String,
}

/// Reads every regular, non-hidden file directly inside `dir`.
///
/// Documents are returned sorted by file name. Symlinks to files are followed.
/// Fails if `dir` is not a directory, if any file is unreadable or not UTF-8,
/// or if no documents are found.
pub fn load_corpus(dir: &Path) -> Result<Vec<RawDocument>, QaError> {
    if !dir.is_dir() {
        return Err(QaError::CorpusNotFound {
            path: dir.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| QaError::ListCorpus {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() || is_hidden(entry.file_name()) {
            continue;
        }

        let text = read_document(entry.path())?;
        documents.push(RawDocument {
            name: entry.file_name().to_string_lossy().into_owned(),
            text,
        });
    }

    if documents.is_empty() {
        return Err(QaError::EmptyCorpus {
            path: dir.to_path_buf(),
        });
    }

    debug!(dir = %dir.display(), documents = documents.len(), "loaded corpus");
    Ok(documents)
}

/// Reads one file as UTF-8.
fn read_document(path: &Path) -> Result<String, QaError> {
    fs::read_to_string(path).map_err(|source| {
        let path = PathBuf::from(path);
        if source.kind() == io::ErrorKind::InvalidData {
            QaError::NotUtf8 { path }
        } else {
            QaError::ReadDocument { path, source }
        }
    })
}

/// Checks if a file name starts with a dot.
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
