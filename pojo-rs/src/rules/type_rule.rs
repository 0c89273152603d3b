//! Mapping of the `type` keyword onto Java types.

use serde_json::Value;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{CodeModel, JavaType, PrimitiveKind};
use crate::schema::SchemaRef;

/// Selects the Java type for a schema node.
///
/// `object` (explicit, or implied by a non-empty `properties` node) and
/// `array` delegate to their structural rules; the scalar names map
/// directly; anything else is `java.lang.Object`. A `format` keyword gets
/// the last word on scalar nodes.
pub struct TypeRule;

impl TypeRule {
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: &Value,
        parent: Option<&Value>,
        schema: &SchemaRef,
    ) -> Result<JavaType> {
        let type_name = type_name(node);

        let java_type = if type_name == "object" || has_nonempty_properties(node) {
            factory
                .object_rule()
                .apply(factory, model, node_name, node, parent, schema)?
        } else if type_name == "string" {
            JavaType::string()
        } else if type_name == "number" {
            scalar(factory, PrimitiveKind::Double)
        } else if type_name == "integer" {
            integer_type(factory, node)
        } else if type_name == "boolean" {
            scalar(factory, PrimitiveKind::Boolean)
        } else if type_name == "array" {
            factory
                .array_rule()
                .apply(factory, model, node_name, node, parent, schema)?
        } else {
            JavaType::object()
        };

        let java_type = match node.get("format") {
            Some(format) => {
                factory
                    .format_rule()
                    .apply(factory, node_name, format, Some(node), java_type, schema)
            }
            None => java_type,
        };

        Ok(java_type)
    }
}

fn type_name(node: &Value) -> &str {
    node.get("type").and_then(Value::as_str).unwrap_or("")
}

fn has_nonempty_properties(node: &Value) -> bool {
    node.get("properties")
        .and_then(Value::as_object)
        .is_some_and(|properties| !properties.is_empty())
}

fn scalar(factory: &RuleFactory, kind: PrimitiveKind) -> JavaType {
    if factory.config().use_primitives {
        JavaType::Primitive(kind)
    } else {
        JavaType::Boxed(kind)
    }
}

/// `integer` maps to `Integer` unless a declared bound needs more room.
fn integer_type(factory: &RuleFactory, node: &Value) -> JavaType {
    let out_of_int_range = ["minimum", "maximum"].iter().any(|key| {
        node.get(*key)
            .and_then(Value::as_i64)
            .is_some_and(|bound| {
                bound < i64::from(i32::MIN) || bound > i64::from(i32::MAX)
            })
    });
    let kind = if out_of_int_range {
        PrimitiveKind::Long
    } else {
        PrimitiveKind::Int
    };
    scalar(factory, kind)
}
