//! Reading schema documents from their URIs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use url::Url;

use crate::error::ResolutionError;

/// Source of raw schema documents, addressed by absolute URL.
///
/// The store strips any fragment before calling [`read`](Self::read), so
/// implementations only ever see whole-document URLs.
pub trait DocumentReader {
    fn read(&self, uri: &Url) -> Result<Value, ResolutionError>;
}

/// Reads schema documents from the local filesystem via `file://` URLs.
#[derive(Debug, Default, Clone)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for FileReader {
    fn read(&self, uri: &Url) -> Result<Value, ResolutionError> {
        if uri.scheme() != "file" {
            return Err(ResolutionError::unsupported_scheme(uri.as_str(), uri.scheme()));
        }
        let path = uri
            .to_file_path()
            .map_err(|()| ResolutionError::invalid_uri(uri.as_str(), "not a local file path"))?;
        let text = fs::read_to_string(&path)
            .map_err(|e| ResolutionError::unreachable(uri.as_str(), e))?;
        serde_json::from_str(&text).map_err(|e| ResolutionError::invalid_document(uri.as_str(), e))
    }
}

/// In-memory document source, useful in tests and for embedding schemas.
#[derive(Debug, Default, Clone)]
pub struct InMemoryReader {
    documents: HashMap<String, Value>,
}

impl InMemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under its absolute URL.
    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), document);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }
}

impl DocumentReader for InMemoryReader {
    fn read(&self, uri: &Url) -> Result<Value, ResolutionError> {
        self.documents.get(uri.as_str()).cloned().ok_or_else(|| {
            ResolutionError::unreachable(
                uri.as_str(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "document not registered"),
            )
        })
    }
}

/// Turn a user-supplied schema location into an absolute URL.
///
/// Absolute URLs pass through untouched. Anything else is treated as a
/// filesystem path relative to the current directory; re-parsing the built
/// file URL collapses `.` and `..` segments so equivalent spellings of the
/// same document share one cache entry.
pub fn document_url(source: &str) -> Result<Url, ResolutionError> {
    match Url::parse(source) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::env::current_dir()
                .map_err(|e| ResolutionError::unreachable(source, e))?
                .join(source);
            url_for_path(&path)
        }
        Err(e) => Err(ResolutionError::invalid_uri(source, e.to_string())),
    }
}

/// Build a normalized `file://` URL for an absolute path.
pub fn url_for_path(path: &Path) -> Result<Url, ResolutionError> {
    let url = Url::from_file_path(path).map_err(|()| {
        ResolutionError::invalid_uri(path.display().to_string(), "cannot express path as file URL")
    })?;
    Url::parse(url.as_str())
        .map_err(|e| ResolutionError::invalid_uri(path.display().to_string(), e.to_string()))
}
