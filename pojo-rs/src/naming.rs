//! Translation of JSON property names into legal Java identifiers.
//!
//! Property names arrive containing whatever the schema author wrote:
//! hyphens, spaces, leading digits, reserved words. [`NameHelper`] maps each
//! of those to a deterministic, legal Java identifier so the same input
//! always produces the same field, class, getter and setter names.

use crate::config::GenerationConfig;
use crate::model::{JavaType, PrimitiveKind};

/// Java keywords plus the `true`, `false` and `null` literals, sorted.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// True when `name` cannot be used as a Java identifier.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.binary_search(&name).is_ok()
}

/// Derives Java identifiers from raw JSON property names.
#[derive(Debug, Clone)]
pub struct NameHelper {
    word_delimiters: Vec<char>,
}

impl NameHelper {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            word_delimiters: config.property_word_delimiters.clone(),
        }
    }

    /// Replace every character outside `[0-9a-zA-Z_$]` with an underscore.
    pub fn replace_illegal_characters(&self, name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Camel-case a delimited name: the character after each word delimiter
    /// is upper-cased, the delimiters themselves are removed, and the leading
    /// character keeps its original case. Names containing no delimiter are
    /// returned unchanged.
    pub fn capitalize_trailing_words(&self, name: &str) -> String {
        if !name.chars().any(|c| self.word_delimiters.contains(&c)) {
            return name.to_string();
        }
        let mut out = String::with_capacity(name.len());
        let mut capitalize_next = false;
        for (i, c) in name.chars().enumerate() {
            if self.word_delimiters.contains(&c) {
                capitalize_next = true;
                continue;
            }
            if i == 0 {
                out.push(c);
                capitalize_next = false;
            } else if capitalize_next {
                out.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Derive the Java field name for a JSON property.
    pub fn property_name(&self, raw: &str) -> String {
        let name = self.replace_illegal_characters(raw);
        let name = self.capitalize_trailing_words(&name);
        let name = normalize(name);
        if is_java_keyword(&name) {
            format!("_{name}")
        } else {
            name
        }
    }

    /// Derive a Java class name for a schema node. Same derivation as
    /// [`property_name`](Self::property_name) except the leading character is
    /// upper-cased, which also takes the result out of keyword territory.
    pub fn class_name(&self, raw: &str) -> String {
        let name = self.replace_illegal_characters(raw);
        let name = self.capitalize_trailing_words(&name);
        let name = capitalize_first(&normalize(name));
        if is_java_keyword(&name) {
            format!("_{name}")
        } else {
            name
        }
    }

    /// Getter name for a property: `is` prefix for booleans, `get` otherwise.
    pub fn getter_name(&self, property_name: &str, java_type: &JavaType) -> String {
        let prefix = if is_boolean(java_type) { "is" } else { "get" };
        format!("{prefix}{}", bean_capitalize(property_name))
    }

    /// Setter name for a property.
    pub fn setter_name(&self, property_name: &str) -> String {
        format!("set{}", bean_capitalize(property_name))
    }

    /// Fluent builder name for a property.
    pub fn builder_name(&self, property_name: &str) -> String {
        format!("with{}", bean_capitalize(property_name))
    }
}

fn normalize(name: String) -> String {
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
        None => "_".to_string(),
    }
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// JavaBeans capitalization: a name whose second character is upper case is
/// left untouched, so `xIndex` yields `getxIndex`.
fn bean_capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(_), Some(second)) if second.is_uppercase() => name.to_string(),
        (Some(first), _) => first.to_uppercase().chain(name.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}

fn is_boolean(java_type: &JavaType) -> bool {
    matches!(
        java_type,
        JavaType::Primitive(PrimitiveKind::Boolean) | JavaType::Boxed(PrimitiveKind::Boolean)
    )
}
