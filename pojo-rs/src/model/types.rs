//! Java type representation.
//!
//! [`JavaType`] is the value handed between rules: primitives and their boxed
//! forms, named references, collections, maps, arrays, and generated classes
//! (by id into the [`CodeModel`]). Constraint rules classify fields by their
//! *boxed* type name with any generic suffix stripped, so the applicability
//! checks live here next to the name derivation.

use super::class::{ClassId, CodeModel};

/// The Java primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Void,
}

impl PrimitiveKind {
    /// The primitive type name (`int`, `boolean`, ...).
    pub fn primitive_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Void => "void",
        }
    }

    /// The fully-qualified wrapper class name.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Short => "java.lang.Short",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Float => "java.lang.Float",
            Self::Double => "java.lang.Double",
            Self::Char => "java.lang.Character",
            Self::Void => "java.lang.Void",
        }
    }

    /// Parse a fully-qualified wrapper class name.
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        match name {
            "java.lang.Boolean" => Some(Self::Boolean),
            "java.lang.Byte" => Some(Self::Byte),
            "java.lang.Short" => Some(Self::Short),
            "java.lang.Integer" => Some(Self::Int),
            "java.lang.Long" => Some(Self::Long),
            "java.lang.Float" => Some(Self::Float),
            "java.lang.Double" => Some(Self::Double),
            "java.lang.Character" => Some(Self::Char),
            "java.lang.Void" => Some(Self::Void),
            _ => None,
        }
    }

    /// Parse a primitive type name.
    pub fn from_primitive_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "char" => Some(Self::Char),
            "void" => Some(Self::Void),
            _ => None,
        }
    }
}

/// A type as it appears in a field declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaType {
    /// Primitive scalar (`int`, `boolean`, ...).
    Primitive(PrimitiveKind),
    /// Boxed scalar (`java.lang.Integer`, ...).
    Boxed(PrimitiveKind),
    /// Named external type, generic suffix allowed verbatim
    /// (`java.util.Date`, `java.util.List<java.lang.String>`).
    Reference(String),
    /// `java.util.List<T>`, or `java.util.Set<T>` when `unique` is set.
    Collection { element: Box<JavaType>, unique: bool },
    /// `java.util.Map<K, V>`.
    Map { key: Box<JavaType>, value: Box<JavaType> },
    /// `T[]`.
    Array(Box<JavaType>),
    /// A class generated during this run.
    Class(ClassId),
}

impl JavaType {
    /// Named reference type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// `java.lang.String`.
    pub fn string() -> Self {
        Self::Reference("java.lang.String".to_string())
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::Reference("java.lang.Object".to_string())
    }

    /// `java.util.List<element>`.
    pub fn list(element: JavaType) -> Self {
        Self::Collection {
            element: Box::new(element),
            unique: false,
        }
    }

    /// `java.util.Set<element>`.
    pub fn set(element: JavaType) -> Self {
        Self::Collection {
            element: Box::new(element),
            unique: true,
        }
    }

    /// `java.util.Map<key, value>`.
    pub fn map(key: JavaType, value: JavaType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// `element[]`.
    pub fn array(element: JavaType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Parse a type name from configuration: primitive names, wrapper names,
    /// arbitrary references, and a trailing `[]` array marker.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if let Some(element) = name.strip_suffix("[]") {
            return Self::array(Self::parse(element));
        }
        if let Some(kind) = PrimitiveKind::from_primitive_name(name) {
            return Self::Primitive(kind);
        }
        if let Some(kind) = PrimitiveKind::from_boxed_name(name) {
            return Self::Boxed(kind);
        }
        Self::Reference(name.to_string())
    }

    /// Fully-qualified name as it appears in a declaration.
    pub fn full_name(&self, model: &CodeModel) -> String {
        match self {
            Self::Primitive(kind) => kind.primitive_name().to_string(),
            Self::Boxed(kind) => kind.boxed_name().to_string(),
            Self::Reference(name) => name.clone(),
            Self::Collection { element, unique } => {
                let base = if *unique { "java.util.Set" } else { "java.util.List" };
                format!("{}<{}>", base, element.full_name(model))
            }
            Self::Map { key, value } => format!(
                "java.util.Map<{}, {}>",
                key.full_name(model),
                value.full_name(model)
            ),
            Self::Array(element) => format!("{}[]", element.full_name(model)),
            Self::Class(id) => model.class(*id).fully_qualified_name(),
        }
    }

    /// The boxed counterpart of this type. Non-primitive types are unchanged.
    pub fn boxify(&self) -> JavaType {
        match self {
            Self::Primitive(kind) => Self::Boxed(*kind),
            other => other.clone(),
        }
    }

    /// The primitive counterpart of this type, where one exists. Everything
    /// except boxed scalars is unchanged; arrays keep their element type.
    pub fn unboxed(&self) -> JavaType {
        match self {
            Self::Boxed(kind) => Self::Primitive(*kind),
            other => other.clone(),
        }
    }

    /// Boxed fully-qualified name with any generic suffix stripped. This is
    /// the key constraint rules match against their allow-lists.
    pub fn base_boxed_name(&self, model: &CodeModel) -> String {
        let name = self.boxify().full_name(model);
        match name.find('<') {
            Some(i) => name[..i].to_string(),
            None => name,
        }
    }

    /// Collection or map.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Collection { .. } | Self::Map { .. })
    }

    /// Array type.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Primitive scalar.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// A class generated during this run.
    pub fn is_generated_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// The scalar kind, for primitive or boxed scalars.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) | Self::Boxed(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class::CodeModel;

    #[test]
    fn parse_recognizes_primitives_wrappers_and_arrays() {
        assert_eq!(JavaType::parse("int"), JavaType::Primitive(PrimitiveKind::Int));
        assert_eq!(JavaType::parse("java.lang.Integer"), JavaType::Boxed(PrimitiveKind::Int));
        assert_eq!(
            JavaType::parse("java.util.Date"),
            JavaType::Reference("java.util.Date".to_string())
        );
        assert_eq!(
            JavaType::parse("java.lang.String[]"),
            JavaType::array(JavaType::string())
        );
        assert_eq!(
            JavaType::parse("int[]"),
            JavaType::array(JavaType::Primitive(PrimitiveKind::Int))
        );
    }

    #[test]
    fn full_names_render_generics_and_arrays() {
        let model = CodeModel::new();
        assert_eq!(
            JavaType::list(JavaType::string()).full_name(&model),
            "java.util.List<java.lang.String>"
        );
        assert_eq!(
            JavaType::set(JavaType::string()).full_name(&model),
            "java.util.Set<java.lang.String>"
        );
        assert_eq!(
            JavaType::map(JavaType::string(), JavaType::object()).full_name(&model),
            "java.util.Map<java.lang.String, java.lang.Object>"
        );
        assert_eq!(
            JavaType::array(JavaType::Primitive(PrimitiveKind::Byte)).full_name(&model),
            "byte[]"
        );
    }

    #[test]
    fn base_boxed_name_boxes_and_strips_generics() {
        let model = CodeModel::new();
        assert_eq!(
            JavaType::Primitive(PrimitiveKind::Int).base_boxed_name(&model),
            "java.lang.Integer"
        );
        assert_eq!(
            JavaType::list(JavaType::string()).base_boxed_name(&model),
            "java.util.List"
        );
        assert_eq!(
            JavaType::reference("java.util.List<java.lang.Integer>").base_boxed_name(&model),
            "java.util.List"
        );
    }

    #[test]
    fn boxify_and_unboxed_are_inverses_on_scalars() {
        let int = JavaType::Primitive(PrimitiveKind::Int);
        assert_eq!(int.boxify(), JavaType::Boxed(PrimitiveKind::Int));
        assert_eq!(int.boxify().unboxed(), int);
        // References are untouched in both directions.
        let decimal = JavaType::reference("java.math.BigDecimal");
        assert_eq!(decimal.boxify(), decimal);
        assert_eq!(decimal.unboxed(), decimal);
    }

    #[test]
    fn container_classification() {
        assert!(JavaType::list(JavaType::string()).is_container());
        assert!(JavaType::map(JavaType::string(), JavaType::object()).is_container());
        assert!(!JavaType::array(JavaType::string()).is_container());
        assert!(!JavaType::string().is_container());
    }
}
