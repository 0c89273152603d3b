//! Configuration management for the CLI.
//!
//! Settings load from a `pojo-rs.toml` file, command-line arguments layer on
//! top, and the result converts into the core [`GenerationConfig`]. The
//! enumerated options (`annotation_style`, `inclusion_level`) stay strings in
//! the TOML layer and are parsed fail-fast during conversion so a typo aborts
//! the run with the offending key named.

use crate::error::{CliResult, ConfigError};
use pojo_rs::{AnnotationStyle, GenerationConfig, InclusionLevel};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "pojo-rs.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Generated class options.
    pub target: TargetConfig,

    /// Validation annotation options.
    pub validation: ValidationConfig,

    /// Naming conventions.
    pub naming: NamingConfig,

    /// Format keyword handling.
    pub format: FormatConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated Java sources. Class files land under
    /// package subdirectories of this root.
    pub dir: PathBuf,
}

/// Options shaping the generated classes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Package for generated classes. Empty means the default package.
    pub package: String,

    /// Annotation style name (`jackson2`, `gson`, `none`).
    pub annotation_style: String,

    /// Null-inclusion policy name (`NON_NULL`, `ALWAYS`, ...).
    pub inclusion_level: String,

    /// Use primitive scalars instead of boxed types where possible.
    pub use_primitives: bool,

    /// Add a `Map<String, Object>` field to classes whose schema allows
    /// additional properties.
    pub include_additional_properties: bool,

    /// Add dynamic by-name get/set/with accessors.
    pub include_dynamic_accessors: bool,

    /// Emit getter methods.
    pub include_getters: bool,

    /// Emit setter methods.
    pub include_setters: bool,
}

/// Validation annotation configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Generate validation constraint annotations from schema keywords.
    pub include_jsr303_annotations: bool,

    /// Use the `jakarta.validation` namespace instead of `javax.validation`.
    pub use_jakarta_validation: bool,
}

/// Naming convention configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Characters treated as word boundaries in property names.
    pub word_delimiters: String,

    /// Characters that split a `$ref` fragment into path segments.
    pub ref_fragment_path_delimiters: String,
}

/// Format keyword configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Custom `format` keyword to Java type overrides, consulted before the
    /// built-in format table.
    pub type_mapping: HashMap<String, String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            annotation_style: "jackson2".to_string(),
            inclusion_level: "NON_NULL".to_string(),
            use_primitives: false,
            include_additional_properties: true,
            include_dynamic_accessors: false,
            include_getters: true,
            include_setters: true,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            word_delimiters: "- _".to_string(),
            ref_fragment_path_delimiters: "#/.".to_string(),
        }
    }
}

impl Config {
    /// Convert into the core generation options, parsing the enumerated
    /// string settings. An unrecognized name aborts with the TOML key that
    /// held it.
    pub fn to_generation_config(&self) -> CliResult<GenerationConfig> {
        let annotation_style = AnnotationStyle::parse(&self.target.annotation_style)
            .map_err(|e| ConfigError::invalid_value("target.annotation_style", e.to_string()))?;
        let inclusion_level = InclusionLevel::parse(&self.target.inclusion_level)
            .map_err(|e| ConfigError::invalid_value("target.inclusion_level", e.to_string()))?;

        Ok(GenerationConfig {
            target_package: self.target.package.clone(),
            annotation_style,
            inclusion_level,
            include_jsr303_annotations: self.validation.include_jsr303_annotations,
            use_jakarta_validation: self.validation.use_jakarta_validation,
            use_primitives: self.target.use_primitives,
            format_type_mapping: self.format.type_mapping.clone(),
            property_word_delimiters: self.naming.word_delimiters.chars().collect(),
            ref_fragment_path_delimiters: self.naming.ref_fragment_path_delimiters.clone(),
            include_additional_properties: self.target.include_additional_properties,
            include_dynamic_accessors: self.target.include_dynamic_accessors,
            include_getters: self.target.include_getters,
            include_setters: self.target.include_setters,
        })
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// An explicit path must exist. With no path, `pojo-rs.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::not_found(explicit.to_path_buf()).into());
                }
                Self::load_file(explicit)
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                Self::load_file(&default_path)
            }
        }
    }

    fn load_file(path: &Path) -> CliResult<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(path.to_path_buf(), e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref package) = args.package {
            config.target.package = package.clone();
        }

        if let Some(ref style) = args.annotation_style {
            config.target.annotation_style = style.clone();
        }

        config
    }

    /// Get default configuration.
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r##"# pojo-rs configuration file

[output]
# Output directory for generated Java sources
dir = "./generated"

[target]
# Package for generated classes, e.g. "com.example.model" (empty means the default package)
package = ""

# Annotation style: jackson2, gson, none
annotation_style = "jackson2"

# Null-inclusion policy attached via Jackson's @JsonInclude
inclusion_level = "NON_NULL"

# Use primitive scalars (int, long, double) instead of boxed types where possible
use_primitives = false

# Add a Map<String, Object> field to classes whose schema allows additional properties
include_additional_properties = true

# Add dynamic by-name get/set/with accessors to classes with additional properties
include_dynamic_accessors = false

# Emit getter and setter methods
include_getters = true
include_setters = true

[validation]
# Generate validation constraint annotations from schema keywords
include_jsr303_annotations = false

# Use the jakarta.validation namespace instead of javax.validation
use_jakarta_validation = false

[naming]
# Characters treated as word boundaries in property names
word_delimiters = "- _"

# Characters that split a $ref fragment into path segments
ref_fragment_path_delimiters = "#/."

[format]
# Custom format keyword -> Java type overrides, e.g.
# [format.type_mapping]
# date-time = "java.time.OffsetDateTime"
"##
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Target package override.
    pub package: Option<String>,

    /// Annotation style override.
    pub annotation_style: Option<String>,
}
