//! Reads documents from disk.
//!
//! The loader sits outside the search core: it turns a directory and a glob
//! into a list of [`Document`]s and reports its own failures through
//! [`LoadError`].
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::document::Document;
use crate::filters::{normalized, should_include_file};

/// Errors raised while locating or reading documents
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("No documents match '{pattern}' under {root}")]
    NoDocuments { pattern: String, root: PathBuf },
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

impl LoadError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

fn compile(pattern: &str) -> Result<Pattern, LoadError> {
    Pattern::new(pattern).map_err(|source| LoadError::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    })
}

/// Loads every file under `root` selected by `file_pattern`.
///
/// Hidden files and paths excluded by `.gitignore` are skipped, as are likely
/// binary files and anything matching `ignore_patterns`. Documents are
/// returned sorted by path; each id is the path relative to `root`.
pub fn load_documents(
    root: &Path,
    file_pattern: &str,
    ignore_patterns: &[String],
) -> Result<Vec<Document>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::RootNotFound(root.to_path_buf()));
    }

    let file_glob = compile(file_pattern)?;
    let ignore_globs = ignore_patterns
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut walker = WalkBuilder::new(root);
    walker
        .hidden(true)
        .ignore(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true);

    let mut paths: Vec<(PathBuf, PathBuf)> = Vec::new();
    for entry in walker.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if should_include_file(&relative, &file_glob, &ignore_globs) {
            trace!("Selected {}", relative.display());
            paths.push((relative, path));
        }
    }

    if paths.is_empty() {
        return Err(LoadError::NoDocuments {
            pattern: file_pattern.to_string(),
            root: root.to_path_buf(),
        });
    }

    paths.sort();
    debug!("Found {} files to load", paths.len());

    let documents = paths
        .into_iter()
        .map(|(relative, path)| {
            let bytes = std::fs::read(&path).map_err(|e| LoadError::from_io(&path, e))?;
            Ok(Document::new(normalized(&relative), bytes))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    info!(
        "Loaded {} documents from {}",
        documents.len(),
        root.display()
    );
    Ok(documents)
}
