//! The composable rule pipeline.
//!
//! Each rule handles one schema concern: a keyword, a constraint, or a
//! structural shape. Rules are stateless; everything they need at apply time
//! comes from the [`RuleFactory`] they are handed, which owns the run's
//! configuration, schema store, annotator and name helper. Rules reach each
//! other through the factory, mirroring how a schema node delegates to its
//! child nodes.

mod additional_properties_rule;
mod array_rule;
mod digits_rule;
mod dynamic_properties_rule;
mod format_rule;
mod min_items_max_items_rule;
mod min_length_max_length_rule;
mod minimum_maximum_rule;
mod object_rule;
mod pattern_rule;
mod properties_rule;
mod property_rule;
mod schema_rule;
mod type_rule;
mod valid_rule;

pub use additional_properties_rule::{AdditionalPropertiesRule, ADDITIONAL_PROPERTIES_FIELD};
pub use array_rule::ArrayRule;
pub use digits_rule::DigitsRule;
pub use dynamic_properties_rule::{DynamicPropertiesRule, NOT_FOUND_VALUE_FIELD};
pub use format_rule::FormatRule;
pub use min_items_max_items_rule::MinItemsMaxItemsRule;
pub use min_length_max_length_rule::MinLengthMaxLengthRule;
pub use minimum_maximum_rule::MinimumMaximumRule;
pub use object_rule::ObjectRule;
pub use pattern_rule::PatternRule;
pub use properties_rule::PropertiesRule;
pub use property_rule::PropertyRule;
pub use schema_rule::SchemaRule;
pub use type_rule::TypeRule;
pub use valid_rule::ValidRule;

use crate::annotator::{annotator_for, Annotator};
use crate::config::GenerationConfig;
use crate::naming::NameHelper;
use crate::schema::SchemaStore;

/// Owns the run-wide collaborators and hands out rules.
pub struct RuleFactory {
    config: GenerationConfig,
    annotator: Box<dyn Annotator>,
    store: SchemaStore,
    name_helper: NameHelper,
    schema_rule: SchemaRule,
    type_rule: TypeRule,
    object_rule: ObjectRule,
    properties_rule: PropertiesRule,
    property_rule: PropertyRule,
    array_rule: ArrayRule,
    additional_properties_rule: AdditionalPropertiesRule,
    format_rule: FormatRule,
    digits_rule: DigitsRule,
    minimum_maximum_rule: MinimumMaximumRule,
    min_length_max_length_rule: MinLengthMaxLengthRule,
    min_items_max_items_rule: MinItemsMaxItemsRule,
    pattern_rule: PatternRule,
    valid_rule: ValidRule,
    dynamic_properties_rule: DynamicPropertiesRule,
}

impl RuleFactory {
    /// A factory resolving schemas from the local filesystem.
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_store(config, SchemaStore::new())
    }

    /// A factory resolving schemas through the given store. The store picks
    /// up the configured fragment path delimiters.
    pub fn with_store(config: GenerationConfig, store: SchemaStore) -> Self {
        let store = store.with_fragment_delimiters(config.ref_fragment_path_delimiters.clone());
        let annotator = annotator_for(&config);
        let name_helper = NameHelper::new(&config);
        Self {
            config,
            annotator,
            store,
            name_helper,
            schema_rule: SchemaRule,
            type_rule: TypeRule,
            object_rule: ObjectRule,
            properties_rule: PropertiesRule,
            property_rule: PropertyRule,
            array_rule: ArrayRule,
            additional_properties_rule: AdditionalPropertiesRule,
            format_rule: FormatRule,
            digits_rule: DigitsRule,
            minimum_maximum_rule: MinimumMaximumRule,
            min_length_max_length_rule: MinLengthMaxLengthRule,
            min_items_max_items_rule: MinItemsMaxItemsRule,
            pattern_rule: PatternRule,
            valid_rule: ValidRule,
            dynamic_properties_rule: DynamicPropertiesRule,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn annotator(&self) -> &dyn Annotator {
        self.annotator.as_ref()
    }

    pub fn store(&self) -> &SchemaStore {
        &self.store
    }

    pub fn name_helper(&self) -> &NameHelper {
        &self.name_helper
    }

    pub fn schema_rule(&self) -> &SchemaRule {
        &self.schema_rule
    }

    pub fn type_rule(&self) -> &TypeRule {
        &self.type_rule
    }

    pub fn object_rule(&self) -> &ObjectRule {
        &self.object_rule
    }

    pub fn properties_rule(&self) -> &PropertiesRule {
        &self.properties_rule
    }

    pub fn property_rule(&self) -> &PropertyRule {
        &self.property_rule
    }

    pub fn array_rule(&self) -> &ArrayRule {
        &self.array_rule
    }

    pub fn additional_properties_rule(&self) -> &AdditionalPropertiesRule {
        &self.additional_properties_rule
    }

    pub fn format_rule(&self) -> &FormatRule {
        &self.format_rule
    }

    pub fn digits_rule(&self) -> &DigitsRule {
        &self.digits_rule
    }

    pub fn minimum_maximum_rule(&self) -> &MinimumMaximumRule {
        &self.minimum_maximum_rule
    }

    pub fn min_length_max_length_rule(&self) -> &MinLengthMaxLengthRule {
        &self.min_length_max_length_rule
    }

    pub fn min_items_max_items_rule(&self) -> &MinItemsMaxItemsRule {
        &self.min_items_max_items_rule
    }

    pub fn pattern_rule(&self) -> &PatternRule {
        &self.pattern_rule
    }

    pub fn valid_rule(&self) -> &ValidRule {
        &self.valid_rule
    }

    pub fn dynamic_properties_rule(&self) -> &DynamicPropertiesRule {
        &self.dynamic_properties_rule
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}
