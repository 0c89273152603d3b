//! Resolution and memoization of schema documents.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;
use url::Url;

use super::reader::{DocumentReader, FileReader};
use super::{Schema, SchemaRef};
use crate::error::ResolutionError;

/// Characters stripped from the end of a `$ref` before it is resolved
/// against the referring schema's id.
const REF_STRIP_CHARS: &[char] = &['#', '?', '&', '/'];

/// Resolves schema URIs to [`Schema`] instances, one per canonical URL.
///
/// Resolving the same location twice, under any equivalent spelling, yields
/// the same instance. That identity is what cycle handling relies on, so the
/// store must live at least as long as one whole generation run.
pub struct SchemaStore {
    reader: Box<dyn DocumentReader>,
    cache: RefCell<HashMap<Url, SchemaRef>>,
    ref_fragment_path_delimiters: String,
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaStore {
    /// A store reading `file://` documents, walking fragments on `#`, `/`
    /// and `.`.
    pub fn new() -> Self {
        Self::with_reader(Box::new(FileReader::new()))
    }

    /// A store with a custom document source.
    pub fn with_reader(reader: Box<dyn DocumentReader>) -> Self {
        Self {
            reader,
            cache: RefCell::new(HashMap::new()),
            ref_fragment_path_delimiters: "#/.".to_string(),
        }
    }

    /// Override the characters treated as fragment path delimiters.
    pub fn with_fragment_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.ref_fragment_path_delimiters = delimiters.into();
        self
    }

    /// Resolve an absolute schema URL to its schema instance.
    ///
    /// A URL without a fragment (or with an empty one) names a document
    /// root. A URL with a fragment names a node inside that document; the
    /// root is registered first and becomes the node's parent.
    pub fn create(&self, id: &Url) -> Result<SchemaRef, ResolutionError> {
        let normalized = remove_empty_fragment(id);
        if let Some(existing) = self.cached(&normalized) {
            return Ok(existing);
        }

        let mut base_id = normalized.clone();
        base_id.set_fragment(None);

        let schema = match normalized.fragment() {
            Some(fragment) => {
                let root = self.create(&base_id)?;
                let content = self.resolve_fragment(root.content(), fragment, &normalized)?;
                Rc::new(Schema::new(
                    normalized.clone(),
                    content,
                    Some(Rc::downgrade(&root)),
                ))
            }
            None => {
                let content = self.reader.read(&base_id)?;
                Rc::new(Schema::new(normalized.clone(), content, None))
            }
        };

        debug!(id = %normalized, "registered schema");
        self.insert(normalized, Rc::clone(&schema));
        Ok(schema)
    }

    /// Resolve a `$ref` value relative to the schema that contains it.
    ///
    /// A lone `#` names the referring schema's document root. Everything
    /// else is resolved against the referring schema's id after trailing
    /// `#?&/` characters are stripped, so `other.json#` and `other.json`
    /// reach the same instance.
    pub fn create_from(
        &self,
        parent: &SchemaRef,
        reference: &str,
    ) -> Result<SchemaRef, ResolutionError> {
        if reference == "#" {
            let mut root_id = parent.id().clone();
            root_id.set_fragment(None);
            return self.create(&root_id);
        }

        let path = reference.trim_end_matches(REF_STRIP_CHARS);
        let id = parent
            .id()
            .join(path)
            .map_err(|e| ResolutionError::invalid_uri(reference, e.to_string()))?;
        self.create(&id)
    }

    /// Drop every memoized schema. Bindings held through existing
    /// [`SchemaRef`]s survive; subsequent lookups start fresh.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Number of schemas currently memoized.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    fn cached(&self, id: &Url) -> Option<SchemaRef> {
        self.cache.borrow().get(id).cloned()
    }

    fn insert(&self, id: Url, schema: SchemaRef) {
        self.cache.borrow_mut().insert(id, schema);
    }

    /// Walk `document` along the fragment path, splitting on the configured
    /// delimiter characters. Arrays are indexed numerically, objects by key.
    fn resolve_fragment(
        &self,
        document: &Value,
        fragment: &str,
        id: &Url,
    ) -> Result<Value, ResolutionError> {
        let mut node = document;
        for segment in
            fragment.split(|c| self.ref_fragment_path_delimiters.contains(c))
        {
            if segment.is_empty() {
                continue;
            }
            node = match node {
                Value::Array(items) => {
                    segment.parse::<usize>().ok().and_then(|index| items.get(index))
                }
                Value::Object(map) => map.get(segment),
                _ => None,
            }
            .ok_or_else(|| ResolutionError::missing_fragment(id.as_str(), segment))?;
        }
        Ok(node.clone())
    }
}

fn remove_empty_fragment(id: &Url) -> Url {
    let mut normalized = id.clone();
    if normalized.fragment() == Some("") {
        normalized.set_fragment(None);
    }
    normalized
}
