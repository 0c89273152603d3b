//! The `@Pattern` constraint from the `pattern` keyword.

use serde_json::Value;

use super::RuleFactory;
use crate::model::{AnnotationDescriptor, AnnotationParam, CodeModel, FieldDef, ValidationAnnotation};
use crate::schema::SchemaRef;

/// Emits `@Pattern(regexp = ...)` on string fields, carrying the schema's
/// regular expression verbatim. No other type can hold a pattern.
pub struct PatternRule;

impl PatternRule {
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
        let Some(pattern) = node.get("pattern").and_then(Value::as_str) else {
            return;
        };
        if field.java_type().base_boxed_name(model) != "java.lang.String" {
            return;
        }

        let class_name =
            ValidationAnnotation::Pattern.class_name(factory.config().use_jakarta_validation);
        field.annotate(
            AnnotationDescriptor::new(class_name)
                .with_param("regexp", AnnotationParam::Str(pattern.to_string())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::model::JavaType;
    use crate::rules::test_support::{blank_schema, factory};
    use serde_json::json;

    const PATTERN: &str = "javax.validation.constraints.Pattern";

    fn apply(config: GenerationConfig, node: Value, java_type: JavaType) -> FieldDef {
        let factory = factory(config);
        let model = CodeModel::new();
        let mut field = FieldDef::new("code", "code", java_type);
        PatternRule.apply(
            &factory,
            &model,
            "code",
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
    fn the_expression_is_carried_verbatim() {
        let field = apply(
            jsr303(),
            json!({"pattern": "^[A-Z]{2}-\\d+$"}),
            JavaType::string(),
        );

        let annotation = field.annotation(PATTERN).unwrap();
        assert_eq!(
            annotation.param("regexp"),
            Some(&AnnotationParam::Str("^[A-Z]{2}-\\d+$".to_string()))
        );
    }

    #[test]
    fn only_string_fields_are_applicable() {
        let node = json!({"pattern": "[0-9a-f-]+"});
        let field = apply(jsr303(), node.clone(), JavaType::reference("java.util.UUID"));
        assert!(field.annotations().is_empty());

        let field = apply(jsr303(), node, JavaType::list(JavaType::string()));
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn disabled_jsr303_suppresses_the_annotation() {
        let field = apply(
            GenerationConfig::default(),
            json!({"pattern": "[A-Z]+"}),
            JavaType::string(),
        );
        assert!(field.annotations().is_empty());
    }

    #[test]
    fn jakarta_namespace_is_used_when_selected() {
        let field = apply(
            jsr303().with_jakarta_validation(true),
            json!({"pattern": "[A-Z]+"}),
            JavaType::string(),
        );
        assert!(field.has_annotation("jakarta.validation.constraints.Pattern"));
    }
}
