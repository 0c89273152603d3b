//! Generation entry point.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::model::{CodeModel, JavaType};
use crate::rules::RuleFactory;
use crate::schema::{DocumentReader, SchemaStore};

/// Drives the rule pipeline over schema documents, accumulating classes in
/// one code model.
///
/// A generator is scoped to one run: documents resolved through it share a
/// schema store, so `$ref`s across documents land on the same instances and
/// re-generating a document is a no-op. Call [`generate`](Self::generate)
/// once per document, then render the model with
/// [`JavaEmitter`](crate::emit::JavaEmitter).
pub struct Generator {
    factory: RuleFactory,
    model: CodeModel,
}

impl Generator {
    /// A generator reading documents from the local filesystem.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            factory: RuleFactory::new(config),
            model: CodeModel::new(),
        }
    }

    /// A generator reading documents through the given reader.
    pub fn with_reader(config: GenerationConfig, reader: Box<dyn DocumentReader>) -> Self {
        Self {
            factory: RuleFactory::with_store(config, SchemaStore::with_reader(reader)),
            model: CodeModel::new(),
        }
    }

    /// Resolve `source` and run the rule pipeline over it. `name` seeds the
    /// root type's class name when the document describes an object.
    ///
    /// Returns the document's root type: a generated class for object
    /// documents, a container for array documents, a scalar otherwise.
    pub fn generate(&mut self, name: &str, source: &Url) -> Result<JavaType> {
        debug!(source = %source, name, "generating type model");
        let schema = self.factory.store().create(source)?;
        let content: Value = schema.content().clone();
        let Self { factory, model } = self;
        factory
            .schema_rule()
            .apply(factory, model, name, &content, None, &schema)
    }

    /// The classes generated so far.
    pub fn model(&self) -> &CodeModel {
        &self.model
    }

    pub fn into_model(self) -> CodeModel {
        self.model
    }

    pub fn config(&self) -> &GenerationConfig {
        self.factory.config()
    }
}
