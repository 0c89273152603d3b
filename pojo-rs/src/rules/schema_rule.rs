//! Entry point of the pipeline: `$ref` resolution and type binding.

use serde_json::Value;
use tracing::debug;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{CodeModel, JavaType};
use crate::schema::SchemaRef;

/// Applied to every schema node before anything else looks at it.
///
/// A node carrying `$ref` is swapped for its resolution target first. A
/// target that already has a Java type bound short-circuits to that type,
/// which is both the memoization and the cycle guard: re-entering a schema
/// that is mid-generation observes the type bound before descent began.
pub struct SchemaRule;

impl SchemaRule {
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: &Value,
        parent: Option<&Value>,
        schema: &SchemaRef,
    ) -> Result<JavaType> {
        if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
            let resolved = factory.store().create_from(schema, reference)?;
            if let Some(bound) = resolved.java_type() {
                debug!(reference, "reusing generated type for reference");
                return Ok(bound);
            }
            return self.apply(factory, model, node_name, resolved.content(), parent, &resolved);
        }

        let java_type = factory
            .type_rule()
            .apply(factory, model, node_name, node, parent, schema)?;
        schema.bind_type_if_empty(java_type.clone());
        Ok(java_type)
    }
}
