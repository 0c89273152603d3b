//! Generation of one field from one property schema.

use serde_json::Value;
use tracing::debug;

use super::RuleFactory;
use crate::error::Result;
use crate::model::{ClassId, CodeModel, FieldDef};
use crate::schema::SchemaRef;

/// Adds a field for a property: derives the Java name, resolves the type
/// through the schema rule, then lets the annotator and the constraint
/// rules decorate the field before it is attached to the class.
pub struct PropertyRule;

impl PropertyRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &mut CodeModel,
        node_name: &str,
        node: &Value,
        parent: &Value,
        class: ClassId,
        schema: &SchemaRef,
    ) -> Result<()> {
        let property_name = factory.name_helper().property_name(node_name);
        if model.class(class).has_field(&property_name) {
            debug!(
                class = %model.class(class).name(),
                property = %property_name,
                "derived field name already taken, skipping property"
            );
            return Ok(());
        }

        let java_type = factory
            .schema_rule()
            .apply(factory, model, node_name, node, Some(parent), schema)?;

        let mut field = FieldDef::new(property_name, node_name, java_type);
        factory.annotator().property_field(&mut field, node_name, node);

        let parent = Some(parent);
        factory
            .minimum_maximum_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);
        factory
            .min_items_max_items_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);
        factory
            .min_length_max_length_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);
        factory
            .digits_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);
        factory
            .pattern_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);
        factory
            .valid_rule()
            .apply(factory, model, node_name, node, parent, &mut field, schema);

        model.class_mut(class).add_field(field);
        Ok(())
    }
}
