//! The catch-all map for properties the schema does not declare.

use serde_json::Value;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{ClassId, CodeModel, FieldDef, JavaType};
use crate::schema::SchemaRef;

pub const ADDITIONAL_PROPERTIES_FIELD: &str = "additionalProperties";

/// Adds a `Map<String, T>` field for undeclared properties.
///
/// `additionalProperties: false` suppresses the field. A schema-valued
/// node types the map values through the schema rule; `true`, `{}` or an
/// absent node fall back to `Object` values.
pub struct AdditionalPropertiesRule;

impl AdditionalPropertiesRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: Option<&Value>,
        parent: &Value,
        class: ClassId,
        schema: &SchemaRef,
    ) -> Result<()> {
        if node.and_then(Value::as_bool) == Some(false) {
            return Ok(());
        }
        if !factory.config().include_additional_properties {
            return Ok(());
        }
        if model.class(class).has_field(ADDITIONAL_PROPERTIES_FIELD) {
            return Ok(());
        }

        let value_type = match node {
            Some(n) if n.as_object().is_some_and(|o| !o.is_empty()) => {
                let value_name = format!("{node_name}Property");
                factory
                    .schema_rule()
                    .apply(factory, model, &value_name, n, Some(parent), schema)?
            }
            _ => JavaType::object(),
        };

        let key_name = JavaType::string().full_name(model);
        let value_name = value_type.full_name(model);
        let initializer = format!("new java.util.HashMap<{key_name}, {value_name}>()");

        let mut field = FieldDef::new(
            ADDITIONAL_PROPERTIES_FIELD,
            ADDITIONAL_PROPERTIES_FIELD,
            JavaType::map(JavaType::string(), value_type),
        )
        .with_initializer(initializer);
        factory.annotator().additional_properties_field(&mut field, ADDITIONAL_PROPERTIES_FIELD);

        model.class_mut(class).add_field(field);
        Ok(())
    }
}
