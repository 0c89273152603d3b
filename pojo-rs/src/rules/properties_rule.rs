//! Iteration over a schema's `properties` node.

use serde_json::Value;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{ClassId, CodeModel};
use crate::schema::SchemaRef;

/// Applies the property rule to each declared property, in declaration
/// order. Declaration order is what fixes field order, accessor order and
/// the serialization order annotation.
pub struct PropertiesRule;

impl PropertiesRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        _node_name: &str,
        node: Option<&Value>,
        parent: &Value,
        class: ClassId,
        schema: &SchemaRef,
    ) -> Result<()> {
        let Some(properties) = node.and_then(Value::as_object) else {
            return Ok(());
        };
        for (name, property_node) in properties {
            factory
                .property_rule()
                .apply(factory, model, name, property_node, parent, class, schema)?;
        }
        Ok(())
    }
}
