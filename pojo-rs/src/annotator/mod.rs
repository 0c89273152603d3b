//! Serialization-library annotations for generated classes.
//!
//! An [`Annotator`] decorates the class model with whatever a particular
//! serialization library needs to round-trip the original JSON property
//! names. The rules call these hooks at fixed points; styles that have no
//! use for a hook inherit the no-op default.

mod gson;
mod jackson;

pub use gson::GsonAnnotator;
pub use jackson::Jackson2Annotator;

use serde_json::Value;

use crate::config::{AnnotationStyle, GenerationConfig};
use crate::model::{AnnotationDescriptor, ClassDef, FieldDef};

/// Hooks for decorating generated classes and fields with
/// serialization annotations.
pub trait Annotator {
    /// Called once per generated class, with the schema's `properties` node.
    fn property_order(&self, _class: &mut ClassDef, _properties: &Value) {}

    /// Called once per generated class, with the full schema node.
    fn property_inclusion(&self, _class: &mut ClassDef, _node: &Value) {}

    /// Called for each generated field, with the original property name and
    /// the property's schema node.
    fn property_field(&self, _field: &mut FieldDef, _wire_name: &str, _node: &Value) {}

    /// Called for the additional-properties map field, when one is added.
    fn additional_properties_field(&self, _field: &mut FieldDef, _name: &str) {}

    /// Annotation for the additional-properties map's whole-map getter.
    fn additional_properties_getter(&self) -> Option<AnnotationDescriptor> {
        None
    }

    /// Annotation for the additional-properties map's per-entry setter.
    fn additional_properties_setter(&self) -> Option<AnnotationDescriptor> {
        None
    }
}

/// Annotator that produces plain, annotation-free classes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnnotator;

impl Annotator for NoopAnnotator {}

/// The annotator for the configured annotation style.
pub fn annotator_for(config: &GenerationConfig) -> Box<dyn Annotator> {
    match config.annotation_style {
        AnnotationStyle::Jackson2 => Box::new(Jackson2Annotator::new(config)),
        AnnotationStyle::Gson => Box::new(GsonAnnotator::new()),
        AnnotationStyle::None => Box::new(NoopAnnotator),
    }
}
