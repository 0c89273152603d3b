//! Mapping of the `format` keyword onto richer Java types.

use serde_json::Value;
use tracing::debug;

use super::RuleFactory;
use crate::model::JavaType;
use crate::schema::SchemaRef;

/// Built-in format names and the types they select.
const FORMAT_TYPES: &[(&str, &str)] = &[
    ("date-time", "java.util.Date"),
    ("date", "java.lang.String"),
    ("time", "java.lang.String"),
    ("utc-millisec", "java.lang.Long"),
    ("regex", "java.util.regex.Pattern"),
    ("color", "java.lang.String"),
    ("style", "java.lang.String"),
    ("phone", "java.lang.String"),
    ("uri", "java.net.URI"),
    ("email", "java.lang.String"),
    ("ip-address", "java.lang.String"),
    ("ipv6", "java.lang.String"),
    ("host-name", "java.lang.String"),
    ("uuid", "java.util.UUID"),
];

/// Swaps a node's base type for the type its `format` names.
///
/// Configured overrides are consulted before the built-in table and may
/// name any type, including primitives and `[]` array forms. An unknown
/// format leaves the base type untouched.
pub struct FormatRule;

impl FormatRule {
    pub fn apply(
        &self,
        factory: &RuleFactory,
        _node_name: &str,
        format: &Value,
        _parent: Option<&Value>,
        base_type: JavaType,
        _schema: &SchemaRef,
    ) -> JavaType {
        let Some(name) = format.as_str() else {
            return base_type;
        };

        let mapped = factory
            .config()
            .format_type_mapping
            .get(name)
            .map(String::as_str)
            .or_else(|| builtin_format_type(name));

        match mapped {
            Some(type_name) => {
                let java_type = JavaType::parse(type_name);
                if factory.config().use_primitives {
                    java_type.unboxed()
                } else {
                    java_type
                }
            }
            None => {
                debug!(format = name, "unknown format, keeping base type");
                base_type
            }
        }
    }
}

fn builtin_format_type(name: &str) -> Option<&'static str> {
    FORMAT_TYPES
        .iter()
        .find(|(format, _)| *format == name)
        .map(|(_, type_name)| *type_name)
}
