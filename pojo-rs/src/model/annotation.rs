//! Annotation descriptors.
//!
//! Rules and annotators never render annotations; they attach descriptors to
//! model nodes. A descriptor is a fully-qualified annotation class name plus
//! an ordered parameter list. Descriptors are keyed by class name, so a rule
//! that fires twice for the same field attaches one descriptor, not two.

/// Parameter value carried by an annotation descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationParam {
    /// String value, rendered quoted.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Verbatim text, rendered unquoted. Used for numeric bounds that must
    /// keep their exact source text and for enum constant references.
    Literal(String),
    /// Array of string values.
    StrArray(Vec<String>),
}

/// An annotation to be rendered on a class or field.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationDescriptor {
    class_name: String,
    params: Vec<(String, AnnotationParam)>,
}

impl AnnotationDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter, keeping declaration order.
    pub fn with_param(mut self, name: impl Into<String>, value: AnnotationParam) -> Self {
        self.params.push((name.into(), value));
        self
    }

    /// Fully-qualified annotation class name. This is the descriptor's
    /// identity for idempotent attachment.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Simple (unqualified) annotation name.
    pub fn simple_name(&self) -> &str {
        match self.class_name.rfind('.') {
            Some(i) => &self.class_name[i + 1..],
            None => &self.class_name,
        }
    }

    /// All parameters in declaration order.
    pub fn params(&self) -> &[(String, AnnotationParam)] {
        &self.params
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&AnnotationParam> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Bean-validation annotation kinds. Each resolves to one of two class-name
/// families depending on the namespace flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationAnnotation {
    DecimalMax,
    DecimalMin,
    Digits,
    Pattern,
    Size,
    Valid,
}

impl ValidationAnnotation {
    /// Fully-qualified class name under the selected namespace.
    pub fn class_name(&self, use_jakarta: bool) -> &'static str {
        match (self, use_jakarta) {
            (Self::DecimalMax, false) => "javax.validation.constraints.DecimalMax",
            (Self::DecimalMax, true) => "jakarta.validation.constraints.DecimalMax",
            (Self::DecimalMin, false) => "javax.validation.constraints.DecimalMin",
            (Self::DecimalMin, true) => "jakarta.validation.constraints.DecimalMin",
            (Self::Digits, false) => "javax.validation.constraints.Digits",
            (Self::Digits, true) => "jakarta.validation.constraints.Digits",
            (Self::Pattern, false) => "javax.validation.constraints.Pattern",
            (Self::Pattern, true) => "jakarta.validation.constraints.Pattern",
            (Self::Size, false) => "javax.validation.constraints.Size",
            (Self::Size, true) => "jakarta.validation.constraints.Size",
            (Self::Valid, false) => "javax.validation.Valid",
            (Self::Valid, true) => "jakarta.validation.Valid",
        }
    }
}
