//! Schema document discovery.
//!
//! Walks an input directory for `.json` documents and returns them sorted by
//! path, so repeated runs feed the generator in the same order and produce
//! the same classes.

use crate::error::{CliResult, ScanError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A discovered JSON Schema document.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    /// Absolute path to the document.
    pub path: PathBuf,

    /// Path relative to the scan root.
    pub relative_path: PathBuf,
}

impl SchemaFile {
    /// Name under which the document enters generation, taken from the file
    /// stem. `schemas/user-profile.json` becomes a `UserProfile` class.
    pub fn document_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schema".to_string())
    }
}

/// Scanner for discovering schema documents.
#[derive(Debug)]
pub struct SchemaScanner {
    /// File or directory to scan.
    root: PathBuf,
}

impl SchemaScanner {
    /// Create a new scanner for the given input path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scan the input path and return all discovered documents.
    ///
    /// A file input yields that single document regardless of extension; a
    /// directory input is walked recursively for `.json` files.
    pub fn scan(&self) -> CliResult<Vec<SchemaFile>> {
        if !self.root.exists() {
            return Err(ScanError::input_not_found(self.root.clone()).into());
        }

        if self.root.is_file() {
            let relative_path = self
                .root
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_default();
            return Ok(vec![SchemaFile {
                path: self.root.clone(),
                relative_path,
            }]);
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            files.push(SchemaFile {
                path: path.to_path_buf(),
                relative_path: self.relative_path(path),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));

        if files.is_empty() {
            return Err(ScanError::no_schema_documents(self.root.clone()).into());
        }

        Ok(files)
    }

    /// Scan without failing on empty results.
    ///
    /// Returns an empty vector if no documents are found.
    pub fn scan_allow_empty(&self) -> CliResult<Vec<SchemaFile>> {
        match self.scan() {
            Ok(files) => Ok(files),
            Err(crate::error::CliError::Scan(ScanError::NoSchemaDocuments { .. })) => {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Get the relative path from root.
    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Get the scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
