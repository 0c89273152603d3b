//! Support for dynamic by-name accessors.

use serde_json::Value;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{ClassDef, ClassId, CodeModel, FieldDef, JavaType, Visibility};

/// Name of the sentinel returned by dynamic lookups that match nothing.
pub const NOT_FOUND_VALUE_FIELD: &str = "NOT_FOUND_VALUE";

/// Equips a class for dynamic `get("name")`/`set("name", value)` access.
///
/// Dynamic lookups need a sentinel distinguishing "property absent" from a
/// stored `null`, so the class gets a `protected static final Object
/// NOT_FOUND_VALUE` to compare against. Emission of the accessor methods
/// keys off this field.
pub struct DynamicPropertiesRule;

impl DynamicPropertiesRule {
    pub fn apply(
        &self,
        _factory: &RuleFactory,
        model: &mut CodeModel,
        _node_name: &str,
        _node: &Value,
        class: ClassId,
    ) -> Result<()> {
        self.get_or_add_not_found_field(model.class_mut(class));
        Ok(())
    }

    /// The sentinel field, adding it on first use. Idempotent.
    pub fn get_or_add_not_found_field<'a>(&self, class: &'a mut ClassDef) -> &'a FieldDef {
        let index = class
            .fields()
            .iter()
            .position(|field| field.name() == NOT_FOUND_VALUE_FIELD);
        let index = match index {
            Some(existing) => existing,
            None => {
                class.add_field(
                    FieldDef::new(NOT_FOUND_VALUE_FIELD, NOT_FOUND_VALUE_FIELD, JavaType::object())
                        .with_visibility(Visibility::Protected)
                        .with_static(true)
                        .with_final(true)
                        .with_initializer("new java.lang.Object()"),
                );
                class.fields().len() - 1
            }
        };
        &class.fields()[index]
    }
}
