//! Jackson 2.x annotations.

use serde_json::Value;

use super::Annotator;
use crate::config::{GenerationConfig, InclusionLevel};
use crate::model::{AnnotationDescriptor, AnnotationParam, ClassDef, FieldDef};

const JSON_PROPERTY_ORDER: &str = "com.fasterxml.jackson.annotation.JsonPropertyOrder";
const JSON_INCLUDE: &str = "com.fasterxml.jackson.annotation.JsonInclude";
const JSON_PROPERTY: &str = "com.fasterxml.jackson.annotation.JsonProperty";
const JSON_PROPERTY_DESCRIPTION: &str = "com.fasterxml.jackson.annotation.JsonPropertyDescription";
const JSON_IGNORE: &str = "com.fasterxml.jackson.annotation.JsonIgnore";
const JSON_ANY_GETTER: &str = "com.fasterxml.jackson.annotation.JsonAnyGetter";
const JSON_ANY_SETTER: &str = "com.fasterxml.jackson.annotation.JsonAnySetter";

/// Decorates classes for `com.fasterxml.jackson` data binding.
#[derive(Debug, Clone)]
pub struct Jackson2Annotator {
    inclusion_level: InclusionLevel,
}

impl Jackson2Annotator {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            inclusion_level: config.inclusion_level,
        }
    }
}

impl Annotator for Jackson2Annotator {
    fn property_order(&self, class: &mut ClassDef, properties: &Value) {
        let order: Vec<String> = properties
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        class.annotate(
            AnnotationDescriptor::new(JSON_PROPERTY_ORDER)
                .with_param("value", AnnotationParam::StrArray(order)),
        );
    }

    fn property_inclusion(&self, class: &mut ClassDef, _node: &Value) {
        let level = format!(
            "com.fasterxml.jackson.annotation.JsonInclude.Include.{}",
            self.inclusion_level.as_str()
        );
        class.annotate(
            AnnotationDescriptor::new(JSON_INCLUDE)
                .with_param("value", AnnotationParam::Literal(level)),
        );
    }

    fn property_field(&self, field: &mut FieldDef, wire_name: &str, node: &Value) {
        field.annotate(
            AnnotationDescriptor::new(JSON_PROPERTY)
                .with_param("value", AnnotationParam::Str(wire_name.to_string())),
        );
        if let Some(description) = node.get("description").and_then(Value::as_str) {
            field.annotate(
                AnnotationDescriptor::new(JSON_PROPERTY_DESCRIPTION)
                    .with_param("value", AnnotationParam::Str(description.to_string())),
            );
        }
    }

    fn additional_properties_field(&self, field: &mut FieldDef, _name: &str) {
        // the map itself is ignored for binding; its accessors carry the
        // any-getter/any-setter pair instead
        field.annotate(AnnotationDescriptor::new(JSON_IGNORE));
    }

    fn additional_properties_getter(&self) -> Option<AnnotationDescriptor> {
        Some(AnnotationDescriptor::new(JSON_ANY_GETTER))
    }

    fn additional_properties_setter(&self) -> Option<AnnotationDescriptor> {
        Some(AnnotationDescriptor::new(JSON_ANY_SETTER))
    }
}
