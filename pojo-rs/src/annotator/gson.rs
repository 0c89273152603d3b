//! Gson annotations.

use serde_json::Value;

use super::Annotator;
use crate::model::{AnnotationDescriptor, AnnotationParam, FieldDef};

const SERIALIZED_NAME: &str = "com.google.gson.annotations.SerializedName";
const EXPOSE: &str = "com.google.gson.annotations.Expose";

/// Decorates fields for `com.google.gson` data binding. Gson has no class
/// level ordering or inclusion concepts, so only the field hook does work.
#[derive(Debug, Default, Clone, Copy)]
pub struct GsonAnnotator;

impl GsonAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for GsonAnnotator {
    fn property_field(&self, field: &mut FieldDef, wire_name: &str, _node: &Value) {
        field.annotate(
            AnnotationDescriptor::new(SERIALIZED_NAME)
                .with_param("value", AnnotationParam::Str(wire_name.to_string())),
        );
        field.annotate(AnnotationDescriptor::new(EXPOSE));
    }
}
