//! Schema documents, their canonical identities, and the store that resolves
//! references between them.
//!
//! Every schema node is identified by an absolute URL (document URL plus
//! optional fragment) and carries a Java type binding. Binding the type
//! before descending into child nodes is what lets cyclic `$ref` chains
//! terminate: the second visit observes the binding instead of recursing.

mod reader;
mod store;

pub use reader::{document_url, url_for_path, DocumentReader, FileReader, InMemoryReader};
pub use store::SchemaStore;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;
use url::Url;

use crate::model::JavaType;

/// Shared handle to a resolved schema node.
///
/// The store hands out one instance per canonical URL, so two references to
/// the same node compare equal with [`Rc::ptr_eq`] and share a type binding.
pub type SchemaRef = Rc<Schema>;

/// A resolved schema node: a document root or a fragment within one.
#[derive(Debug)]
pub struct Schema {
    id: Url,
    content: Value,
    parent: Option<Weak<Schema>>,
    java_type: RefCell<Option<JavaType>>,
}

impl Schema {
    pub(crate) fn new(id: Url, content: Value, parent: Option<Weak<Schema>>) -> Self {
        Self {
            id,
            content,
            parent,
            java_type: RefCell::new(None),
        }
    }

    /// Canonical identity of this node.
    pub fn id(&self) -> &Url {
        &self.id
    }

    /// The JSON content of this node.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// True for document roots.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The document root this node belongs to, or the node itself.
    pub fn root(self: &Rc<Self>) -> SchemaRef {
        match self.parent.as_ref().and_then(Weak::upgrade) {
            Some(parent) => parent.root(),
            None => Rc::clone(self),
        }
    }

    /// Bind a Java type to this node unless one is already bound, and return
    /// the winning binding either way. First binding wins.
    pub fn bind_type_if_empty(&self, java_type: JavaType) -> JavaType {
        self.java_type.borrow_mut().get_or_insert(java_type).clone()
    }

    /// Replace the binding outright. Only the array rule does this, to
    /// promote a root-level array document from its item type to the
    /// collection type.
    pub(crate) fn rebind_type(&self, java_type: JavaType) {
        *self.java_type.borrow_mut() = Some(java_type);
    }

    /// The bound Java type, if any.
    pub fn java_type(&self) -> Option<JavaType> {
        self.java_type.borrow().clone()
    }

    /// True once a Java type has been bound.
    pub fn is_bound(&self) -> bool {
        self.java_type.borrow().is_some()
    }
}
