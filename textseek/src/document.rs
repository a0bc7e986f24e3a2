use std::borrow::Cow;
use std::str::Utf8Error;
use tracing::warn;

use crate::config::EncodingMode;

/// A named piece of content to search.
///
/// Content is kept as the raw bytes the loader read; decoding happens inside
/// the search run so that malformed content is reported against the document
/// that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier, unique within a search run (usually a relative path)
    pub id: String,
    /// Raw content
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, text.as_bytes())
    }

    /// Decodes the content as UTF-8 according to `mode`.
    pub fn text(&self, mode: EncodingMode) -> Result<Cow<'_, str>, Utf8Error> {
        match mode {
            EncodingMode::FailFast => std::str::from_utf8(&self.content).map(Cow::Borrowed),
            EncodingMode::Lossy => {
                let text = String::from_utf8_lossy(&self.content);
                if let Cow::Owned(_) = text {
                    warn!("Invalid UTF-8 replaced in document: {}", self.id);
                }
                Ok(text)
            }
        }
    }
}
