//! The `@Size` constraint from `minItems`/`maxItems`.

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

/// Emits a single `@Size` carrying `min` and/or `max` from the item count
/// keywords. Same shape as the length rule, aimed at collections.
pub struct MinItemsMaxItemsRule;

impl MinItemsMaxItemsRule {
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
        let min = node.get("minItems").and_then(Value::as_i64);
        let max = node.get("maxItems").and_then(Value::as_i64);
        if min.is_none() && max.is_none() {
            return;
        }
        let applicable = field.java_type().is_array()
            || APPLICABLE_TYPES.contains(&field.java_type().base_boxed_name(model).as_str());
        if !applicable {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::model::{JavaType, PrimitiveKind};
    use crate::rules::test_support::{blank_schema, factory};
    use serde_json::json;

    const SIZE: &str = "javax.validation.constraints.Size";

    fn apply(config: GenerationConfig, node: Value, java_type: JavaType) -> FieldDef {
        let factory = factory(config);
        let model = CodeModel::new();
        let mut field = FieldDef::new("entries", "entries", java_type);
        MinItemsMaxItemsRule.apply(
            &factory,
            &model,
            "entries",
            &node,
            None,
            &mut field,
            &blank_schema(),
        );
        field
    }

    fn jsr303() -> GenerationConfig {
        GenerationConfig::default().with_jsr303_annotations(true)
    }

    #[test]
    fn item_bounds_produce_a_size_annotation() {
        let field = apply(
            jsr303(),
            json!({"minItems": 1, "maxItems": 8}),
            JavaType::list(JavaType::string()),
        );

        let size = field.annotation(SIZE).unwrap();
        assert_eq!(size.param("min"), Some(&AnnotationParam::Int(1)));
        assert_eq!(size.param("max"), Some(&AnnotationParam::Int(8)));
    }

    #[test]
    fn sets_and_arrays_are_applicable() {
        let field = apply(
            jsr303(),
            json!({"maxItems": 3}),
            JavaType::set(JavaType::string()),
        );
        assert!(field.has_annotation(SIZE));

        let field = apply(
            jsr303(),
            json!({"maxItems": 3}),
            JavaType::array(JavaType::Primitive(PrimitiveKind::Int)),
        );
        assert!(field.has_annotation(SIZE));
    }

    #[test]
    fn scalar_fields_are_not_applicable() {
        let field = apply(
            jsr303(),
            json!({"minItems": 1}),
            JavaType::Boxed(PrimitiveKind::Int),
        );
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn disabled_jsr303_suppresses_the_annotation() {
        let field = apply(
            GenerationConfig::default(),
            json!({"minItems": 1}),
            JavaType::list(JavaType::string()),
        );
        assert!(field.annotations().is_empty());
    }
}
