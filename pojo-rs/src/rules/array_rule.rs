//! Mapping of array schemas onto Java collections.

use serde_json::Value;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{CodeModel, JavaType};
use crate::schema::SchemaRef;

/// Maps an array node to `List<T>`, or `Set<T>` under `uniqueItems`.
///
/// The item type comes from applying the schema rule to `items`; a missing
/// `items` node, or the tuple form, yields a collection of `Object`.
pub struct ArrayRule;

impl ArrayRule {
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: &Value,
        _parent: Option<&Value>,
        schema: &SchemaRef,
    ) -> Result<JavaType> {
        let unique_items = node
            .get("uniqueItems")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        // an unbound schema here means this document IS the array
        let root_schema_is_array = !schema.is_bound();

        let item_type = match node.get("items") {
            Some(items) if items.is_object() => factory
                .schema_rule()
                .apply(factory, model, node_name, items, Some(node), schema)?,
            _ => JavaType::object(),
        };

        let array_type = if unique_items {
            JavaType::set(item_type)
        } else {
            JavaType::list(item_type)
        };

        if root_schema_is_array {
            schema.rebind_type(array_type.clone());
        }

        Ok(array_type)
    }
}
