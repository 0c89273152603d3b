//! # pojo-rs-cli
//!
//! CLI library for generating Java classes from JSON Schema documents.
//!
//! This crate provides the core functionality for the `pojo-rs` CLI tool,
//! including schema document discovery, batch class generation, and file
//! output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - Schema document discovery
//! - [`generator`] - Batch generation over the class model
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod scanner;
pub mod writer;

// Re-export main types for convenience
pub use config::{CliArgs, Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{ClassGenerator, GeneratedClass, GeneratedOutput};
pub use scanner::{SchemaFile, SchemaScanner};
pub use writer::{FileWriter, WriteResult};
