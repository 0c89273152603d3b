//! # pojo-rs
//!
//! Generates Java class sources from JSON Schema documents.
//!
//! ## Overview
//!
//! `pojo-rs` walks a schema document depth-first through a pipeline of small
//! rules, building an in-memory model of JavaBean-style classes: fields in
//! declared property order, serialization annotations (Jackson 2 or Gson),
//! and optional JSR-303 validation annotations. The finished model renders to
//! plain Java source with fully qualified type names.
//!
//! `$ref`s are resolved through a per-run [`SchemaStore`] that memoizes every
//! document and fragment by canonical URL, so a schema referenced from many
//! places produces exactly one class, and self-referential schemas terminate
//! instead of recursing forever.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pojo_rs::{GenerationConfig, Generator, JavaEmitter};
//! use url::Url;
//!
//! let config = GenerationConfig::default()
//!     .with_target_package("com.example")
//!     .with_jsr303_annotations(true);
//!
//! let mut generator = Generator::new(config.clone());
//! let source = Url::parse("file:///schemas/person.json")?;
//! generator.generate("person", &source)?;
//!
//! let model = generator.model();
//! let emitter = JavaEmitter::new(model, &config);
//! for (id, class) in model.classes() {
//!     std::fs::write(format!("{}.java", class.name()), emitter.emit(id))?;
//! }
//! ```
//!
//! ## Type Mappings
//!
//! | Schema | Java |
//! |--------|------|
//! | `"type": "object"` | generated class |
//! | `"type": "string"` | `java.lang.String` |
//! | `"type": "integer"` | `Integer` (`Long` when a bound exceeds 32 bits) |
//! | `"type": "number"` | `Double` |
//! | `"type": "boolean"` | `Boolean` |
//! | `"type": "array"` | `java.util.List<T>` (`Set<T>` under `uniqueItems`) |
//! | `"type": "null"`, unknown | `java.lang.Object` |
//! | `additionalProperties` | `java.util.Map<String, T>` field |
//!
//! `format` refines the base type (`date-time` → `java.util.Date`, `uuid` →
//! `java.util.UUID`, `uri` → `java.net.URI`, ...), and
//! [`GenerationConfig::with_format_mapping`] overrides the built-in table.
//! With [`GenerationConfig::with_primitives`] boxed scalars become `int`,
//! `long`, `boolean`, and so on.
//!
//! ## Validation Annotations
//!
//! With [`GenerationConfig::with_jsr303_annotations`]:
//!
//! | Keywords | Annotation |
//! |----------|------------|
//! | `minimum` / `maximum` | `@DecimalMin` / `@DecimalMax` |
//! | `minLength` / `maxLength` | `@Size` |
//! | `minItems` / `maxItems` | `@Size` |
//! | `integerDigits` + `fractionalDigits` | `@Digits` |
//! | `pattern` | `@Pattern` |
//! | object-typed property | `@Valid` |
//!
//! Annotations come from `javax.validation` by default;
//! [`GenerationConfig::with_jakarta_validation`] switches the namespace to
//! `jakarta.validation`.
//!
//! ## `$ref` Resolution
//!
//! References resolve against the enclosing document's URL, so relative
//! `$ref`s work across files. A lone `#` refers to the current document
//! root; fragment paths (`#/definitions/address`) walk the document by
//! object key and array index, splitting on the configured delimiter set
//! (`#`, `/` and `.` by default). Object schemas bind their class before
//! walking properties, which is what makes cyclic reference chains safe.

pub mod annotator;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod rules;
pub mod schema;

pub use config::{AnnotationStyle, GenerationConfig, InclusionLevel};
pub use emit::JavaEmitter;
pub use error::{ConfigError, Error, ResolutionError, Result};
pub use generator::Generator;
pub use model::{ClassDef, ClassId, CodeModel, FieldDef, JavaType};
pub use naming::NameHelper;
pub use rules::RuleFactory;
pub use schema::{
    document_url, url_for_path, DocumentReader, FileReader, InMemoryReader, Schema, SchemaRef,
    SchemaStore,
};
