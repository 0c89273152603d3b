//! Generated class and field models.
//!
//! Classes live in a [`CodeModel`] arena and are addressed by [`ClassId`], so
//! an in-progress class can be bound to a schema node (the cycle placeholder)
//! while rules keep appending fields to it. Field order is declaration order
//! and is preserved through emission.

use std::collections::HashMap;

use super::annotation::AnnotationDescriptor;
use super::types::JavaType;

/// Handle to a class in a [`CodeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Outcome of a class definition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassEntry {
    /// A new class was created.
    Created(ClassId),
    /// A class with this name already existed and is returned instead.
    Existing(ClassId),
}

impl ClassEntry {
    /// The class id regardless of outcome.
    pub fn id(&self) -> ClassId {
        match self {
            Self::Created(id) | Self::Existing(id) => *id,
        }
    }
}

/// Arena of classes generated during one run.
#[derive(Debug, Default)]
pub struct CodeModel {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
}

impl CodeModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a class, or return the existing one when the fully-qualified
    /// name is already taken.
    pub fn define_class(&mut self, package: &str, name: &str) -> ClassEntry {
        let fq_name = if package.is_empty() {
            name.to_string()
        } else {
            format!("{package}.{name}")
        };
        if let Some(id) = self.by_name.get(&fq_name) {
            return ClassEntry::Existing(*id);
        }
        let id = ClassId(self.classes.len());
        self.classes.push(ClassDef::new(package, name));
        self.by_name.insert(fq_name, id);
        ClassEntry::Created(id)
    }

    /// Look up a class by fully-qualified name.
    pub fn lookup(&self, fq_name: &str) -> Option<ClassId> {
        self.by_name.get(fq_name).copied()
    }

    /// Borrow a class.
    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.0]
    }

    /// Mutably borrow a class.
    pub fn class_mut(&mut self, id: ClassId) -> &mut ClassDef {
        &mut self.classes[id.0]
    }

    /// All classes in definition order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes.iter().enumerate().map(|(i, c)| (ClassId(i), c))
    }

    /// Number of classes defined.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no class has been defined.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Field visibility modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Protected,
    Public,
}

impl Visibility {
    /// The Java modifier keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
        }
    }
}

/// A generated class: package, name, ordered fields, class-level annotations.
#[derive(Debug, Clone)]
pub struct ClassDef {
    package: String,
    name: String,
    fields: Vec<FieldDef>,
    annotations: Vec<AnnotationDescriptor>,
}

impl ClassDef {
    fn new(package: &str, name: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            fields: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Package, empty for the default package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Simple class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified class name.
    pub fn fully_qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Append a field, keeping declaration order.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// True when a field with this Java identifier exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    /// Look up a field by Java identifier.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Mutably look up a field by Java identifier.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDef> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Attach a class-level annotation descriptor. A descriptor with the same
    /// class name is attached at most once; the first attachment wins.
    pub fn annotate(&mut self, descriptor: AnnotationDescriptor) {
        if !self.annotations.iter().any(|a| a.class_name() == descriptor.class_name()) {
            self.annotations.push(descriptor);
        }
    }

    /// Class-level annotations in attachment order.
    pub fn annotations(&self) -> &[AnnotationDescriptor] {
        &self.annotations
    }
}

/// A generated field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    wire_name: String,
    java_type: JavaType,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    initializer: Option<String>,
    annotations: Vec<AnnotationDescriptor>,
}

impl FieldDef {
    /// Create a private instance field.
    pub fn new(name: impl Into<String>, wire_name: impl Into<String>, java_type: JavaType) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            java_type,
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            initializer: None,
            annotations: Vec::new(),
        }
    }

    /// Set the visibility modifier.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark the field static.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Mark the field final.
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Set an initializer expression, rendered verbatim after `=`.
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    /// Java identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original property name as it appears on the wire.
    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    /// Declared type.
    pub fn java_type(&self) -> &JavaType {
        &self.java_type
    }

    /// Replace the declared type. Substitution replaces, never wraps.
    pub fn set_java_type(&mut self, java_type: JavaType) {
        self.java_type = java_type;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Initializer expression, when set.
    pub fn initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    /// Attach an annotation descriptor. A descriptor with the same class name
    /// is attached at most once; the first attachment wins, making rule
    /// re-application idempotent.
    pub fn annotate(&mut self, descriptor: AnnotationDescriptor) {
        if !self.annotations.iter().any(|a| a.class_name() == descriptor.class_name()) {
            self.annotations.push(descriptor);
        }
    }

    /// Annotations in attachment order.
    pub fn annotations(&self) -> &[AnnotationDescriptor] {
        &self.annotations
    }

    /// Look up an annotation by fully-qualified class name.
    pub fn annotation(&self, class_name: &str) -> Option<&AnnotationDescriptor> {
        self.annotations.iter().find(|a| a.class_name() == class_name)
    }

    /// True when an annotation with this class name is attached.
    pub fn has_annotation(&self, class_name: &str) -> bool {
        self.annotation(class_name).is_some()
    }
}
