//! The `@DecimalMin`/`@DecimalMax` constraints from `minimum`/`maximum`.

use serde_json::Value;

use super::RuleFactory;
use crate::model::{AnnotationDescriptor, AnnotationParam, CodeModel, FieldDef, ValidationAnnotation};
use crate::schema::SchemaRef;

const APPLICABLE_TYPES: &[&str] = &[
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.lang.String",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
];

/// Emits `@DecimalMin` for `minimum` and `@DecimalMax` for `maximum`.
///
/// The two bounds are independent; either may appear alone. Bound values
/// are carried as the decimal text the schema declared.
pub struct MinimumMaximumRule;

impl MinimumMaximumRule {
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
        if !APPLICABLE_TYPES.contains(&field.java_type().base_boxed_name(model).as_str()) {
            return;
        }

        let use_jakarta = factory.config().use_jakarta_validation;
        if let Some(minimum) = node.get("minimum").and_then(bound_text) {
            field.annotate(
                AnnotationDescriptor::new(ValidationAnnotation::DecimalMin.class_name(use_jakarta))
                    .with_param("value", AnnotationParam::Str(minimum)),
            );
        }
        if let Some(maximum) = node.get("maximum").and_then(bound_text) {
            field.annotate(
                AnnotationDescriptor::new(ValidationAnnotation::DecimalMax.class_name(use_jakarta))
                    .with_param("value", AnnotationParam::Str(maximum)),
            );
        }
    }
}

/// The bound as decimal text. Numbers keep their declared form, strings
/// pass through, anything else declines the annotation.
fn bound_text(node: &Value) -> Option<String> {
    match node {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::model::{JavaType, PrimitiveKind};
    use crate::rules::test_support::{blank_schema, factory};
    use serde_json::json;

    const DECIMAL_MIN: &str = "javax.validation.constraints.DecimalMin";
    const DECIMAL_MAX: &str = "javax.validation.constraints.DecimalMax";

    fn apply(config: GenerationConfig, node: Value, java_type: JavaType) -> FieldDef {
        let factory = factory(config);
        let model = CodeModel::new();
        let mut field = FieldDef::new("amount", "amount", java_type);
        MinimumMaximumRule.apply(
            &factory,
            &model,
            "amount",
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
    fn bounds_are_independent() {
        let field = apply(jsr303(), json!({"minimum": 0}), JavaType::Boxed(PrimitiveKind::Int));
        assert!(field.has_annotation(DECIMAL_MIN));
        assert!(!field.has_annotation(DECIMAL_MAX));

        let field = apply(jsr303(), json!({"maximum": 10}), JavaType::Boxed(PrimitiveKind::Int));
        assert!(!field.has_annotation(DECIMAL_MIN));
        assert!(field.has_annotation(DECIMAL_MAX));

        let field = apply(
            jsr303(),
            json!({"minimum": 0, "maximum": 10}),
            JavaType::Boxed(PrimitiveKind::Int),
        );
        assert!(field.has_annotation(DECIMAL_MIN));
        assert!(field.has_annotation(DECIMAL_MAX));
    }

    #[test]
    fn bound_values_keep_their_declared_text() {
        let field = apply(
            jsr303(),
            json!({"minimum": 1.5, "maximum": "99.9"}),
            JavaType::reference("java.math.BigDecimal"),
        );

        assert_eq!(
            field.annotation(DECIMAL_MIN).unwrap().param("value"),
            Some(&AnnotationParam::Str("1.5".to_string()))
        );
        assert_eq!(
            field.annotation(DECIMAL_MAX).unwrap().param("value"),
            Some(&AnnotationParam::Str("99.9".to_string()))
        );
    }

    #[test]
    fn non_numeric_bounds_decline() {
        let field = apply(
            jsr303(),
            json!({"minimum": null, "maximum": {"nested": true}}),
            JavaType::Boxed(PrimitiveKind::Int),
        );
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn double_fields_are_not_annotated() {
        // DecimalMin is undefined for double and float
        let field = apply(
            jsr303(),
            json!({"minimum": 0}),
            JavaType::Boxed(PrimitiveKind::Double),
        );
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn primitive_fields_match_through_their_boxed_name() {
        let field = apply(
            jsr303(),
            json!({"minimum": 0}),
            JavaType::Primitive(PrimitiveKind::Int),
        );
        assert!(field.has_annotation(DECIMAL_MIN));
    }

    #[test]
    fn disabled_jsr303_suppresses_the_annotations() {
        let field = apply(
            GenerationConfig::default(),
            json!({"minimum": 0, "maximum": 10}),
            JavaType::Boxed(PrimitiveKind::Int),
        );
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn jakarta_namespace_is_used_when_selected() {
        let field = apply(
            jsr303().with_jakarta_validation(true),
            json!({"minimum": 0}),
            JavaType::Boxed(PrimitiveKind::Int),
        );
        assert!(field.has_annotation("jakarta.validation.constraints.DecimalMin"));
    }
}
