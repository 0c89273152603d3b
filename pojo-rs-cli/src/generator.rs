//! Batch class generation across schema documents.
//!
//! Drives the core generator over every discovered document through one
//! shared schema store, so a `$ref` from one file into another resolves to
//! the class already generated for the target, then emits Java source for
//! each class in the resulting model.

use crate::config::Config;
use crate::error::CliResult;
use crate::scanner::SchemaFile;
use pojo_rs::{url_for_path, Generator, JavaEmitter};
use std::path::PathBuf;

/// Generated output containing all emitted classes.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Emitted classes in definition order.
    pub classes: Vec<GeneratedClass>,
}

/// A single emitted Java class.
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    /// Simple class name.
    pub name: String,

    /// Package the class lives in. Empty for the default package.
    pub package: String,

    /// Fully qualified class name.
    pub fully_qualified_name: String,

    /// Complete Java source for the class.
    pub content: String,
}

impl GeneratedClass {
    /// Output path relative to the target directory: package segments as
    /// directories, then `Name.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.name));
        path
    }
}

/// Generator driving the class model over many schema documents.
pub struct ClassGenerator {
    config: Config,
}

impl ClassGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate Java classes for a set of schema documents.
    ///
    /// Each document enters generation under its file stem; classes for
    /// inline objects and referenced documents accumulate in one model.
    pub fn generate(&self, files: &[SchemaFile]) -> CliResult<GeneratedOutput> {
        let generation = self.config.to_generation_config()?;
        let mut generator = Generator::new(generation);

        for file in files {
            // Scanned paths are relative when the input was; file URLs need
            // absolute paths.
            let path = std::fs::canonicalize(&file.path)?;
            let source = url_for_path(&path).map_err(pojo_rs::Error::from)?;
            generator.generate(&file.document_name(), &source)?;
        }

        let emitter = JavaEmitter::new(generator.model(), generator.config());
        let classes = generator
            .model()
            .classes()
            .map(|(id, class)| GeneratedClass {
                name: class.name().to_string(),
                package: class.package().to_string(),
                fully_qualified_name: class.fully_qualified_name(),
                content: emitter.emit(id),
            })
            .collect();

        Ok(GeneratedOutput { classes })
    }
}
