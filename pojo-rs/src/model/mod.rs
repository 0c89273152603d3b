//! The generated code model: Java types, classes, fields and annotations.

mod annotation;
mod class;
mod types;

pub use annotation::{AnnotationDescriptor, AnnotationParam, ValidationAnnotation};
pub use class::{ClassDef, ClassEntry, ClassId, CodeModel, FieldDef, Visibility};
pub use types::{JavaType, PrimitiveKind};
