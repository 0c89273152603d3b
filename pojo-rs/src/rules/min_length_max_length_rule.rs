//! The `@Size` constraint from `minLength`/`maxLength`.

use serde_json::Value;

use super::RuleFactory;
use crate::model::{AnnotationDescriptor, AnnotationParam, CodeModel, FieldDef, ValidationAnnotation};
use crate::schema::SchemaRef;

const APPLICABLE_TYPES: &[&str] = &[
    "java.lang.String",
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.Map",
];

/// Emits a single `@Size` carrying `min` and/or `max`, whichever of the
/// length keywords are present.
pub struct MinLengthMaxLengthRule;

impl MinLengthMaxLengthRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &CodeModel,
        _node_name: &str,
        node: &Value,
        _parent: Option<&Value>,
        field: &mut FieldDef,
        _schema: &SchemaRef,
    ) {
        if !factory.config().include_jsr303_annotations {
            return;
        }
        let min = node.get("minLength").and_then(Value::as_i64);
        let max = node.get("maxLength").and_then(Value::as_i64);
        if min.is_none() && max.is_none() {
            return;
        }
        if !is_applicable(field, model) {
            return;
        }

        let mut descriptor = AnnotationDescriptor::new(
            ValidationAnnotation::Size.class_name(factory.config().use_jakarta_validation),
        );
        if let Some(min) = min {
            descriptor = descriptor.with_param("min", AnnotationParam::Int(min));
        }
        if let Some(max) = max {
            descriptor = descriptor.with_param("max", AnnotationParam::Int(max));
        }
        field.annotate(descriptor);
    }
}

fn is_applicable(field: &FieldDef, model: &CodeModel) -> bool {
    field.java_type().is_array()
        || APPLICABLE_TYPES.contains(&field.java_type().base_boxed_name(model).as_str())
}
