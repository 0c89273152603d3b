//! The `@Digits` constraint from `integerDigits`/`fractionalDigits`.

use serde_json::Value;

use super::RuleFactory;
use crate::model::{AnnotationDescriptor, AnnotationParam, CodeModel, FieldDef, ValidationAnnotation};
use crate::schema::SchemaRef;

/// Types `@Digits` may constrain, by boxed name with generics stripped.
const APPLICABLE_TYPES: &[&str] = &[
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.lang.String",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
];

/// Emits `@Digits(integer = ..., fraction = ...)`.
///
/// Both digit keywords must be present; a single one is not enough to
/// state the constraint. The namespace flag is only consulted once every
/// gate has passed, so toggling it can never turn a declined annotation
/// into an emitted one.
pub struct DigitsRule;

impl DigitsRule {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &self,
        factory: &RuleFactory,
        model: &CodeModel,
        _node_name: &str,
        node: &Value,
        _parent: Option<&Value>,
        field: &mut FieldDef,
        _schema: &SchemaRef,
    ) {
        if !factory.config().include_jsr303_annotations {
            return;
        }
        let (Some(integer_node), Some(fractional_node)) =
            (node.get("integerDigits"), node.get("fractionalDigits"))
        else {
            return;
        };
        if !APPLICABLE_TYPES.contains(&field.java_type().base_boxed_name(model).as_str()) {
            return;
        }

        let class_name =
            ValidationAnnotation::Digits.class_name(factory.config().use_jakarta_validation);
        let integer = integer_node.as_i64().unwrap_or(0);
        let fraction = fractional_node.as_i64().unwrap_or(0);
        field.annotate(
            AnnotationDescriptor::new(class_name)
                .with_param("integer", AnnotationParam::Int(integer))
                .with_param("fraction", AnnotationParam::Int(fraction)),
        );
    }
}
