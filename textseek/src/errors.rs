//! Error types for the search core.
//!
//! The core only knows two failure modes:
//!
//! 1. **Configuration errors** are raised before any document is touched, for
//!    example when the pattern is empty. The caller can re-prompt and retry.
//! 2. **Document errors** are raised while searching one document and carry
//!    that document's identifier plus the underlying cause. They terminate the
//!    current run.
//!
//! Loader failures (missing files, unreadable directories) live in
//! [`crate::loader::LoadError`] and are never folded into [`SearchError`].
//!
//! ```rust,ignore
//! match textseek::run(&documents, &config) {
//!     Ok(records) => // Render records,
//!     Err(SearchError::ConfigError(msg)) => // Ask for a new pattern,
//!     Err(e) => // Report the failing document,
//! }
//! ```
use std::str::Utf8Error;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during a search run
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to search document {document_id}: {cause}")]
    DocumentError {
        document_id: String,
        #[source]
        cause: Utf8Error,
    },
}

impl SearchError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn document_error(document_id: impl Into<String>, cause: Utf8Error) -> Self {
        Self::DocumentError {
            document_id: document_id.into(),
            cause,
        }
    }

    /// The document this error occurred in, if any.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::DocumentError { document_id, .. } => Some(document_id),
            Self::ConfigError(_) => None,
        }
    }
}
