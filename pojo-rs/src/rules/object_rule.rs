//! Generation of a Java class from an object schema.

use serde_json::Value;
use tracing::debug;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{ClassEntry, CodeModel, JavaType};
use crate::schema::SchemaRef;

/// Creates a class for an object node and populates it.
///
/// The schema is bound to the new class before any property is visited, so
/// a property that refers back to this schema resolves to the class under
/// construction instead of recursing into it.
pub struct ObjectRule;

impl ObjectRule {
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: &Value,
        _parent: Option<&Value>,
        schema: &SchemaRef,
    ) -> Result<JavaType> {
        let class_name = factory.name_helper().class_name(node_name);
        let package = factory.config().target_package.clone();

        let class_id = match model.define_class(&package, &class_name) {
            ClassEntry::Existing(id) => {
                debug!(class = %class_name, "reusing existing class");
                return Ok(JavaType::Class(id));
            }
            ClassEntry::Created(id) => id,
        };

        schema.bind_type_if_empty(JavaType::Class(class_id));

        factory.annotator().property_inclusion(model.class_mut(class_id), node);
        if let Some(properties) = node.get("properties") {
            factory.annotator().property_order(model.class_mut(class_id), properties);
        }

        factory.properties_rule().apply(
            factory,
            model,
            node_name,
            node.get("properties"),
            node,
            class_id,
            schema,
        )?;
        factory.additional_properties_rule().apply(
            factory,
            model,
            node_name,
            node.get("additionalProperties"),
            node,
            class_id,
            schema,
        )?;

        if factory.config().include_dynamic_accessors {
            factory
                .dynamic_properties_rule()
                .apply(factory, model, node_name, node, class_id)?;
        }

        Ok(JavaType::Class(class_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnnotationStyle, GenerationConfig};
    use crate::rules::test_support::{blank_schema, factory};
    use serde_json::json;

    fn object_node() -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "integer" }
            }
        })
    }

    #[test]
    fn creates_a_class_named_after_the_node() {
        let factory = factory(GenerationConfig::default().with_target_package("com.example"));
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "address details", &object_node(), None, &schema)
            .unwrap();

        let JavaType::Class(id) = java_type else {
            panic!("expected a generated class");
        };
        assert_eq!(model.class(id).name(), "AddressDetails");
        assert_eq!(model.class(id).package(), "com.example");
    }

    #[test]
    fn binds_the_schema_before_visiting_properties() {
        let factory = factory(GenerationConfig::default());
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "thing", &object_node(), None, &schema)
            .unwrap();

        assert_eq!(schema.java_type(), Some(java_type));
    }

    #[test]
    fn declared_properties_become_fields_in_order() {
        let factory = factory(GenerationConfig::default());
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "person", &object_node(), None, &schema)
            .unwrap();

        let JavaType::Class(id) = java_type else {
            panic!("expected a generated class");
        };
        let names: Vec<&str> = model.class(id).fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "age", "additionalProperties"]);
    }

    #[test]
    fn jackson_style_annotates_the_class() {
        let factory = factory(GenerationConfig::default());
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "person", &object_node(), None, &schema)
            .unwrap();

        let JavaType::Class(id) = java_type else {
            panic!("expected a generated class");
        };
        let names: Vec<&str> = model
            .class(id)
            .annotations()
            .iter()
            .map(|a| a.class_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "com.fasterxml.jackson.annotation.JsonInclude",
                "com.fasterxml.jackson.annotation.JsonPropertyOrder",
            ]
        );
    }

    #[test]
    fn none_style_annotates_nothing() {
        let factory = factory(
            GenerationConfig::default().with_annotation_style(AnnotationStyle::None),
        );
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "person", &object_node(), None, &schema)
            .unwrap();

        let JavaType::Class(id) = java_type else {
            panic!("expected a generated class");
        };
        assert!(model.class(id).annotations().is_empty());
        assert!(model
            .class(id)
            .fields()
            .iter()
            .all(|f| f.annotations().is_empty()));
    }

    #[test]
    fn colliding_names_reuse_the_existing_class() {
        let factory = factory(GenerationConfig::default());
        let mut model = CodeModel::new();

        let first = ObjectRule
            .apply(&factory, &mut model, "thing", &object_node(), None, &blank_schema())
            .unwrap();
        let second = ObjectRule
            .apply(&factory, &mut model, "thing", &json!({"type": "object"}), None, &blank_schema())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn dynamic_accessors_add_the_not_found_sentinel() {
        let factory = factory(GenerationConfig {
            include_dynamic_accessors: true,
            ..GenerationConfig::default()
        });
        let schema = blank_schema();
        let mut model = CodeModel::new();

        let java_type = ObjectRule
            .apply(&factory, &mut model, "thing", &object_node(), None, &schema)
            .unwrap();

        let JavaType::Class(id) = java_type else {
            panic!("expected a generated class");
        };
        assert!(model.class(id).has_field("NOT_FOUND_VALUE"));
    }
}
