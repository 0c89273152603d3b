//! # pojo-rs-cli
//!
//! CLI tool for generating Java classes from JSON Schema documents.
//!
//! ## Usage
//!
//! ```bash
//! # Generate classes from schemas in the current directory
//! pojo-rs generate
//!
//! # Generate into a specific output directory and package
//! pojo-rs generate --input ./schemas --output ./src/main/java --package com.example.model
//!
//! # Preview changes without writing files
//! pojo-rs generate --dry-run
//!
//! # Initialize configuration
//! pojo-rs init
//!
//! # Validate generated classes are up-to-date
//! pojo-rs validate --path ./src/main/java --input ./schemas
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use pojo_rs_cli::{
    config::{CliArgs, ConfigManager},
    error::CliError,
    generator::ClassGenerator,
    scanner::SchemaScanner,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "pojo-rs")]
#[command(author, version, about = "Generate Java classes from JSON Schema documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java classes from JSON Schema documents
    Generate {
        /// Input file or directory containing JSON Schema documents
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Output directory for generated Java sources
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package for generated classes
        #[arg(short, long)]
        package: Option<String>,

        /// Annotation style (jackson2, gson, none)
        #[arg(long)]
        annotation_style: Option<String>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new pojo-rs configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "pojo-rs.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated classes are up-to-date
    Validate {
        /// Directory holding previously generated Java sources
        #[arg(short, long)]
        path: PathBuf,

        /// Input file or directory containing JSON Schema documents
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            package,
            annotation_style,
            dry_run,
            config,
        } => cmd_generate(input, output, package, annotation_style, dry_run, config),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate {
            path,
            input,
            config,
        } => cmd_validate(path, input, config),
    }
}

/// Generate command implementation.
fn cmd_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    package: Option<String>,
    annotation_style: Option<String>,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            package,
            annotation_style,
        },
    );

    println!("{}", "Scanning for JSON Schema documents...".cyan());

    let scanner = SchemaScanner::new(&input);
    let files = scanner.scan_allow_empty()?;

    if files.is_empty() {
        println!("{}", "No schema documents found.".yellow());
        return Ok(());
    }

    println!(
        "  Found {} schema document(s)",
        files.len().to_string().green()
    );

    println!("{}", "Generating Java classes...".cyan());

    let generator = ClassGenerator::new(config.clone());
    let generated = generator.generate(&files)?;

    if generated.classes.is_empty() {
        println!("{}", "No classes to generate.".yellow());
        return Ok(());
    }

    println!(
        "  Generated {} class(es)",
        generated.classes.len().to_string().green()
    );

    let writer = FileWriter::new(&config.output.dir, dry_run);

    for class in &generated.classes {
        match writer.write_class(class)? {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::DryRun { content, path } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    target_path: PathBuf,
    input: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    println!("{}", "Validating generated classes...".cyan());

    if !target_path.exists() {
        return Err(CliError::Validation(format!(
            "Output directory not found: {}",
            target_path.display()
        )));
    }

    let config = ConfigManager::load(config_path.as_deref())?;

    let scanner = SchemaScanner::new(&input);
    let files = scanner.scan_allow_empty()?;

    let generator = ClassGenerator::new(config);
    let generated = generator.generate(&files)?;

    let mut stale = Vec::new();
    for class in &generated.classes {
        let expected = target_path.join(class.relative_path());
        match std::fs::read_to_string(&expected) {
            Ok(existing) if existing.trim() == class.content.trim() => {}
            Ok(_) => stale.push(format!("{} is out of date", class.fully_qualified_name)),
            Err(_) => stale.push(format!("{} is missing", class.fully_qualified_name)),
        }
    }

    if stale.is_empty() {
        println!("{} Generated classes are up-to-date", "✓".green());
        Ok(())
    } else {
        for line in &stale {
            println!("{} {}", "✗".red(), line);
        }
        println!("  Run 'pojo-rs generate' to update");
        Err(CliError::Validation(
            "Generated classes are out of date".to_string(),
        ))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
