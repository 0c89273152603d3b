//! The `@Valid` cascade annotation.

use serde_json::Value;

use super::RuleFactory;
use crate::model::{AnnotationDescriptor, CodeModel, FieldDef, ValidationAnnotation};
use crate::schema::SchemaRef;

/// Emits `@Valid` so nested constraints are validated through the field.
///
/// Applies to reference-typed fields. Primitives carry no nested state and
/// collections and maps cascade through their elements, so both decline.
pub struct ValidRule;

impl ValidRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        _model: &CodeModel,
        _node_name: &str,
        _node: &Value,
        _parent: Option<&Value>,
        field: &mut FieldDef,
        _schema: &SchemaRef,
    ) {
        if !factory.config().include_jsr303_annotations {
            return;
        }
        let java_type = field.java_type();
        if java_type.is_primitive() || java_type.is_container() {
            return;
        }

        let class_name =
            ValidationAnnotation::Valid.class_name(factory.config().use_jakarta_validation);
        field.annotate(AnnotationDescriptor::new(class_name));
    }
}
