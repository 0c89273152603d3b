//! Java source emitter.
//!
//! Renders a finished [`CodeModel`] class to a compilation unit: package
//! declaration, class and field annotations, field declarations, bean
//! accessors and, when enabled, the dynamic by-name accessors. All type
//! references are emitted fully qualified so no import tracking is needed.
//!
//! Emission is purely a function of the model and configuration; field order
//! is rendered exactly as declared, so identical input produces identical
//! source.

use crate::annotator::{annotator_for, Annotator};
use crate::config::GenerationConfig;
use crate::model::{AnnotationDescriptor, AnnotationParam, ClassDef, ClassId, CodeModel, FieldDef, JavaType};
use crate::naming::NameHelper;
use crate::rules::{ADDITIONAL_PROPERTIES_FIELD, NOT_FOUND_VALUE_FIELD};

const INDENT: &str = "    ";

/// Renders model classes to Java source text.
///
/// # Example
///
/// ```rust,ignore
/// let emitter = JavaEmitter::new(&model, &config);
/// for (id, class) in model.classes() {
///     std::fs::write(format!("{}.java", class.name()), emitter.emit(id))?;
/// }
/// ```
pub struct JavaEmitter<'a> {
    model: &'a CodeModel,
    config: &'a GenerationConfig,
    name_helper: NameHelper,
    annotator: Box<dyn Annotator>,
}

impl<'a> JavaEmitter<'a> {
    pub fn new(model: &'a CodeModel, config: &'a GenerationConfig) -> Self {
        Self {
            model,
            config,
            name_helper: NameHelper::new(config),
            annotator: annotator_for(config),
        }
    }

    /// Render one class as a complete compilation unit.
    pub fn emit(&self, class: ClassId) -> String {
        let class_def = self.model.class(class);
        let mut out = String::new();

        if !class_def.package().is_empty() {
            out.push_str(&format!("package {};\n\n", class_def.package()));
        }
        for annotation in class_def.annotations() {
            out.push_str(&self.render_annotation(annotation, ""));
            out.push('\n');
        }
        out.push_str(&format!("public class {} {{\n\n", class_def.name()));

        for field in class_def.fields() {
            self.emit_field(&mut out, field);
        }
        for field in class_def.fields() {
            if field.is_static() {
                continue;
            }
            if field.name() == ADDITIONAL_PROPERTIES_FIELD {
                self.emit_overflow_accessors(&mut out, field);
                continue;
            }
            if self.config.include_getters {
                self.emit_getter(&mut out, field);
            }
            if self.config.include_setters && !field.is_final() {
                self.emit_setter(&mut out, field);
            }
        }
        if self.config.include_dynamic_accessors && class_def.has_field(NOT_FOUND_VALUE_FIELD) {
            self.emit_dynamic_accessors(&mut out, class_def);
        }

        out.push_str("\n}\n");
        out
    }

    fn emit_field(&self, out: &mut String, field: &FieldDef) {
        for annotation in field.annotations() {
            out.push_str(&self.render_annotation(annotation, INDENT));
            out.push('\n');
        }
        let mut decl = format!("{INDENT}{}", field.visibility().as_str());
        if field.is_static() {
            decl.push_str(" static");
        }
        if field.is_final() {
            decl.push_str(" final");
        }
        decl.push_str(&format!(
            " {} {}",
            field.java_type().full_name(self.model),
            field.name()
        ));
        if let Some(initializer) = field.initializer() {
            decl.push_str(&format!(" = {initializer}"));
        }
        decl.push_str(";\n");
        out.push_str(&decl);
    }

    fn emit_getter(&self, out: &mut String, field: &FieldDef) {
        let java_type = field.java_type().full_name(self.model);
        let getter = self.name_helper.getter_name(field.name(), field.java_type());
        out.push_str(&format!(
            "\n{INDENT}public {java_type} {getter}() {{\n\
             {INDENT}{INDENT}return {};\n\
             {INDENT}}}\n",
            field.name()
        ));
    }

    fn emit_setter(&self, out: &mut String, field: &FieldDef) {
        let java_type = field.java_type().full_name(self.model);
        let setter = self.name_helper.setter_name(field.name());
        let name = field.name();
        out.push_str(&format!(
            "\n{INDENT}public void {setter}({java_type} {name}) {{\n\
             {INDENT}{INDENT}this.{name} = {name};\n\
             {INDENT}}}\n"
        ));
    }

    /// The additional-properties map's accessor pair: a whole-map getter and
    /// a per-entry setter, each carrying the annotation the active style
    /// hands out (Jackson's `@JsonAnyGetter`/`@JsonAnySetter`).
    fn emit_overflow_accessors(&self, out: &mut String, field: &FieldDef) {
        let value_type = match field.java_type() {
            JavaType::Map { value, .. } => value.full_name(self.model),
            _ => JavaType::object().full_name(self.model),
        };
        if self.config.include_getters {
            let java_type = field.java_type().full_name(self.model);
            let getter = self.name_helper.getter_name(field.name(), field.java_type());
            out.push('\n');
            if let Some(annotation) = self.annotator.additional_properties_getter() {
                out.push_str(&self.render_annotation(&annotation, INDENT));
                out.push('\n');
            }
            out.push_str(&format!(
                "{INDENT}public {java_type} {getter}() {{\n\
                 {INDENT}{INDENT}return {};\n\
                 {INDENT}}}\n",
                field.name()
            ));
        }
        if self.config.include_setters {
            out.push('\n');
            if let Some(annotation) = self.annotator.additional_properties_setter() {
                out.push_str(&self.render_annotation(&annotation, INDENT));
                out.push('\n');
            }
            out.push_str(&format!(
                "{INDENT}public void setAdditionalProperty(java.lang.String name, {value_type} value) {{\n\
                 {INDENT}{INDENT}{}.put(name, value);\n\
                 {INDENT}}}\n",
                field.name()
            ));
        }
    }

    /// The `get("name")`/`set("name", value)`/`with("name", value)` trio plus
    /// the protected lookup helpers they dispatch through. Lookup keys are
    /// wire names, so dynamic access follows the document's spelling rather
    /// than the Java identifiers.
    fn emit_dynamic_accessors(&self, out: &mut String, class_def: &ClassDef) {
        let declared: Vec<&FieldDef> = class_def
            .fields()
            .iter()
            .filter(|field| !field.is_static() && field.name() != ADDITIONAL_PROPERTIES_FIELD)
            .collect();
        let overflow_value_cast = class_def
            .field(ADDITIONAL_PROPERTIES_FIELD)
            .map(|field| match field.java_type() {
                JavaType::Map { value, .. } => value.full_name(self.model),
                _ => JavaType::object().full_name(self.model),
            });

        out.push_str(&format!(
            "\n{INDENT}protected java.lang.Object declaredPropertyOrNotFound(java.lang.String name, java.lang.Object notFoundValue) {{\n\
             {INDENT}{INDENT}switch (name) {{\n"
        ));
        for field in &declared {
            out.push_str(&format!(
                "{INDENT}{INDENT}{INDENT}case \"{}\":\n\
                 {INDENT}{INDENT}{INDENT}{INDENT}return {};\n",
                escape_java_string(field.wire_name()),
                field.name()
            ));
        }
        out.push_str(&format!(
            "{INDENT}{INDENT}{INDENT}default:\n\
             {INDENT}{INDENT}{INDENT}{INDENT}return notFoundValue;\n\
             {INDENT}{INDENT}}}\n\
             {INDENT}}}\n"
        ));

        out.push_str(&format!(
            "\n{INDENT}public java.lang.Object get(java.lang.String name) {{\n\
             {INDENT}{INDENT}java.lang.Object value = declaredPropertyOrNotFound(name, {NOT_FOUND_VALUE_FIELD});\n\
             {INDENT}{INDENT}if ({NOT_FOUND_VALUE_FIELD} != value) {{\n\
             {INDENT}{INDENT}{INDENT}return value;\n\
             {INDENT}{INDENT}}}\n"
        ));
        if overflow_value_cast.is_some() {
            out.push_str(&format!(
                "{INDENT}{INDENT}return {ADDITIONAL_PROPERTIES_FIELD}.get(name);\n"
            ));
        } else {
            out.push_str(&format!(
                "{INDENT}{INDENT}throw new java.lang.IllegalArgumentException(\"property \\\"\" + name + \"\\\" is not defined\");\n"
            ));
        }
        out.push_str(&format!("{INDENT}}}\n"));

        out.push_str(&format!(
            "\n{INDENT}protected boolean declaredProperty(java.lang.String name, java.lang.Object value) {{\n\
             {INDENT}{INDENT}switch (name) {{\n"
        ));
        for field in &declared {
            let cast = field.java_type().boxify().full_name(self.model);
            out.push_str(&format!(
                "{INDENT}{INDENT}{INDENT}case \"{}\":\n\
                 {INDENT}{INDENT}{INDENT}{INDENT}{} = (({cast}) value);\n\
                 {INDENT}{INDENT}{INDENT}{INDENT}return true;\n",
                escape_java_string(field.wire_name()),
                field.name()
            ));
        }
        out.push_str(&format!(
            "{INDENT}{INDENT}{INDENT}default:\n\
             {INDENT}{INDENT}{INDENT}{INDENT}return false;\n\
             {INDENT}{INDENT}}}\n\
             {INDENT}}}\n"
        ));

        out.push_str(&format!(
            "\n{INDENT}public void set(java.lang.String name, java.lang.Object value) {{\n\
             {INDENT}{INDENT}if (!declaredProperty(name, value)) {{\n"
        ));
        match &overflow_value_cast {
            Some(cast) => out.push_str(&format!(
                "{INDENT}{INDENT}{INDENT}{ADDITIONAL_PROPERTIES_FIELD}.put(name, (({cast}) value));\n"
            )),
            None => out.push_str(&format!(
                "{INDENT}{INDENT}{INDENT}throw new java.lang.IllegalArgumentException(\"property \\\"\" + name + \"\\\" is not defined\");\n"
            )),
        }
        out.push_str(&format!("{INDENT}{INDENT}}}\n{INDENT}}}\n"));

        out.push_str(&format!(
            "\n{INDENT}public {class_name} with(java.lang.String name, java.lang.Object value) {{\n\
             {INDENT}{INDENT}set(name, value);\n\
             {INDENT}{INDENT}return this;\n\
             {INDENT}}}\n",
            class_name = class_def.name()
        ));
    }

    fn render_annotation(&self, annotation: &AnnotationDescriptor, indent: &str) -> String {
        let mut out = format!("{indent}@{}", annotation.class_name());
        let params = annotation.params();
        if params.is_empty() {
            return out;
        }
        if let [(name, value)] = params {
            if name == "value" {
                out.push('(');
                out.push_str(&render_param_value(value, indent));
                out.push(')');
                return out;
            }
        }
        let rendered: Vec<String> = params
            .iter()
            .map(|(name, value)| format!("{name} = {}", render_param_value(value, indent)))
            .collect();
        out.push('(');
        out.push_str(&rendered.join(", "));
        out.push(')');
        out
    }
}

fn render_param_value(value: &AnnotationParam, indent: &str) -> String {
    match value {
        AnnotationParam::Str(text) => format!("\"{}\"", escape_java_string(text)),
        AnnotationParam::Int(number) => number.to_string(),
        AnnotationParam::Literal(text) => text.clone(),
        AnnotationParam::StrArray(items) if items.is_empty() => "{}".to_string(),
        AnnotationParam::StrArray(items) => {
            let body: Vec<String> = items
                .iter()
                .map(|item| format!("{indent}{INDENT}\"{}\"", escape_java_string(item)))
                .collect();
            format!("{{\n{}\n{indent}}}", body.join(",\n"))
        }
    }
}

/// Escape a string for a Java string literal.
fn escape_java_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
