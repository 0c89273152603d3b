//! Generation configuration.
//!
//! A [`GenerationConfig`] is an immutable per-run record consumed by the rule
//! pipeline. Enumerated options ([`AnnotationStyle`], [`InclusionLevel`]) are
//! parsed fail-fast: an unrecognized name is a configuration error carrying
//! the offending value.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Serialization annotation style applied to generated classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationStyle {
    /// Jackson 2.x annotations (`com.fasterxml.jackson`).
    #[default]
    Jackson2,
    /// Gson annotations (`com.google.gson`).
    Gson,
    /// No serialization annotations.
    None,
}

impl AnnotationStyle {
    /// Parse a style name. `jackson` is accepted as an alias for `jackson2`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "jackson" | "jackson2" => Ok(Self::Jackson2),
            "gson" => Ok(Self::Gson),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::unknown_annotation_style(value)),
        }
    }

    /// Canonical name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jackson2 => "jackson2",
            Self::Gson => "gson",
            Self::None => "none",
        }
    }
}

impl FromStr for AnnotationStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Null-inclusion policy attached to generated classes by annotators that
/// support one (Jackson's `@JsonInclude`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InclusionLevel {
    Always,
    NonAbsent,
    NonDefault,
    NonEmpty,
    #[default]
    NonNull,
    UseDefaults,
}

impl InclusionLevel {
    /// Parse an inclusion level name (case-insensitive, `NON_NULL` style).
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_uppercase().as_str() {
            "ALWAYS" => Ok(Self::Always),
            "NON_ABSENT" => Ok(Self::NonAbsent),
            "NON_DEFAULT" => Ok(Self::NonDefault),
            "NON_EMPTY" => Ok(Self::NonEmpty),
            "NON_NULL" => Ok(Self::NonNull),
            "USE_DEFAULTS" => Ok(Self::UseDefaults),
            _ => Err(ConfigError::unknown_inclusion_level(value)),
        }
    }

    /// Constant name as it appears in the Jackson `Include` enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::NonAbsent => "NON_ABSENT",
            Self::NonDefault => "NON_DEFAULT",
            Self::NonEmpty => "NON_EMPTY",
            Self::NonNull => "NON_NULL",
            Self::UseDefaults => "USE_DEFAULTS",
        }
    }
}

impl FromStr for InclusionLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InclusionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-run generation options.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Package for generated classes. Empty means the default package.
    pub target_package: String,

    /// Serialization annotation style.
    pub annotation_style: AnnotationStyle,

    /// Null-inclusion policy for annotators that support one.
    pub inclusion_level: InclusionLevel,

    /// Whether validation constraint annotations are generated at all.
    pub include_jsr303_annotations: bool,

    /// Use the `jakarta.validation` namespace instead of `javax.validation`
    /// for constraint annotations.
    pub use_jakarta_validation: bool,

    /// Use primitive scalars (`int`, `double`, ...) instead of their boxed
    /// forms where a primitive counterpart exists.
    pub use_primitives: bool,

    /// Custom `format` keyword → Java type name overrides, consulted before
    /// the built-in format table.
    pub format_type_mapping: HashMap<String, String>,

    /// Characters treated as word delimiters when deriving identifiers from
    /// property names.
    pub property_word_delimiters: Vec<char>,

    /// Characters treated as path delimiters when walking ref fragments.
    pub ref_fragment_path_delimiters: String,

    /// Add a `Map<String, T>` field for schemas that allow additional
    /// properties.
    pub include_additional_properties: bool,

    /// Add dynamic by-name accessors (and the not-found sentinel field) to
    /// generated classes that carry additional properties.
    pub include_dynamic_accessors: bool,

    /// Emit getter methods.
    pub include_getters: bool,

    /// Emit setter methods.
    pub include_setters: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_package: String::new(),
            annotation_style: AnnotationStyle::Jackson2,
            inclusion_level: InclusionLevel::NonNull,
            include_jsr303_annotations: false,
            use_jakarta_validation: false,
            use_primitives: false,
            format_type_mapping: HashMap::new(),
            property_word_delimiters: vec!['-', ' ', '_'],
            ref_fragment_path_delimiters: "#/.".to_string(),
            include_additional_properties: true,
            include_dynamic_accessors: false,
            include_getters: true,
            include_setters: true,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target package.
    pub fn with_target_package(mut self, package: impl Into<String>) -> Self {
        self.target_package = package.into();
        self
    }

    /// Set the annotation style.
    pub fn with_annotation_style(mut self, style: AnnotationStyle) -> Self {
        self.annotation_style = style;
        self
    }

    /// Enable or disable validation constraint annotations.
    pub fn with_jsr303_annotations(mut self, enabled: bool) -> Self {
        self.include_jsr303_annotations = enabled;
        self
    }

    /// Select the Jakarta namespace for constraint annotations.
    pub fn with_jakarta_validation(mut self, enabled: bool) -> Self {
        self.use_jakarta_validation = enabled;
        self
    }

    /// Enable or disable primitive scalar substitution.
    pub fn with_primitives(mut self, enabled: bool) -> Self {
        self.use_primitives = enabled;
        self
    }

    /// Add a custom format → type name override.
    pub fn with_format_mapping(
        mut self,
        format: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.format_type_mapping.insert(format.into(), type_name.into());
        self
    }

    /// Set the property word delimiter characters.
    pub fn with_word_delimiters(mut self, delimiters: &[char]) -> Self {
        self.property_word_delimiters = delimiters.to_vec();
        self
    }
}
