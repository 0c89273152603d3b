//! Property-based tests for pojo-rs-cli.
//!
//! These tests verify cross-cutting guarantees of the pipeline using the
//! proptest framework:
//!
//! - Discovery completeness: every schema document in the tree is found
//! - Ordering: scans are sorted and stable across runs
//! - Configuration precedence: CLI arguments win over file values
//! - Dry-run safety: previews never touch disk
//! - Path mapping: class files mirror their package segments
//! - Determinism: identical inputs emit identical Java source

use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pojo_rs_cli::{
    config::{CliArgs, Config, ConfigManager},
    generator::{ClassGenerator, GeneratedClass},
    scanner::SchemaScanner,
    writer::FileWriter,
};

// =============================================================================
// Discovery completeness
//
// For any directory tree containing .json documents, the scanner discovers
// all of them recursively and nothing else.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_file_discovery_completeness(
        file_count in 1usize..10,
        depth in 1usize..4,
    ) {
        let dir = TempDir::new().unwrap();
        let mut expected_files = HashSet::new();

        for i in 0..file_count {
            let subdir = (0..(i % depth))
                .map(|j| format!("dir{}", j))
                .collect::<Vec<_>>()
                .join("/");

            let file_path = if subdir.is_empty() {
                format!("schema{}.json", i)
            } else {
                format!("{}/schema{}.json", subdir, i)
            };

            let full_path = dir.path().join(&file_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full_path, r#"{"type": "object"}"#).unwrap();
            expected_files.insert(file_path);
        }

        // Noise that must be ignored.
        fs::write(dir.path().join("README.md"), "# Test").unwrap();
        fs::write(dir.path().join("data.txt"), "data").unwrap();

        let scanner = SchemaScanner::new(dir.path());
        let files = scanner.scan().unwrap();

        prop_assert_eq!(
            files.len(),
            expected_files.len(),
            "Scanner should find exactly {} .json documents, found {}",
            expected_files.len(),
            files.len()
        );

        for file in &files {
            prop_assert!(
                file.path.extension().is_some_and(|ext| ext == "json"),
                "All discovered files should be .json documents"
            );
        }
    }
}

// =============================================================================
// Ordering
//
// Scans return documents sorted by path, and two scans of the same tree
// return the same sequence.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_scan_order_is_sorted_and_stable(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..6),
    ) {
        let dir = TempDir::new().unwrap();
        for name in &names {
            fs::write(
                dir.path().join(format!("{}.json", name)),
                r#"{"type": "object"}"#,
            )
            .unwrap();
        }

        let scanner = SchemaScanner::new(dir.path());
        let first: Vec<PathBuf> = scanner.scan().unwrap().into_iter().map(|f| f.path).collect();
        let second: Vec<PathBuf> = scanner.scan().unwrap().into_iter().map(|f| f.path).collect();

        let mut sorted = first.clone();
        sorted.sort();

        prop_assert_eq!(&first, &sorted, "Scan results should be sorted by path");
        prop_assert_eq!(first, second, "Scans of the same tree should be stable");
    }
}

// =============================================================================
// Configuration precedence
//
// When both a config file value and a CLI argument are provided, the CLI
// argument wins; unset arguments leave the file value in place.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_config_override_precedence(
        file_dir in "[a-z]{3,8}",
        cli_dir in "[a-z]{3,8}",
        file_package in "[a-z]{3,8}",
        cli_package in "[a-z]{3,8}",
    ) {
        prop_assume!(file_dir != cli_dir);
        prop_assume!(file_package != cli_package);

        let mut file_config = Config::default();
        file_config.output.dir = PathBuf::from(&file_dir);
        file_config.target.package = file_package.clone();

        let cli_args = CliArgs {
            output: Some(PathBuf::from(&cli_dir)),
            package: Some(cli_package.clone()),
            annotation_style: None,
        };

        let merged = ConfigManager::merge_cli_args(file_config, &cli_args);

        prop_assert_eq!(
            merged.output.dir,
            PathBuf::from(&cli_dir),
            "CLI output dir should override the file value"
        );
        prop_assert_eq!(
            merged.target.package,
            cli_package,
            "CLI package should override the file value"
        );
        prop_assert_eq!(
            merged.target.annotation_style,
            "jackson2".to_string(),
            "Unset CLI arguments should leave file values untouched"
        );
    }
}

// =============================================================================
// Dry-run safety
//
// A dry-run writer never creates files or directories, whatever the class
// package depth or content.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dry_run_safety(
        package in "[a-z]{2,5}(\\.[a-z]{2,5}){0,2}",
        content_length in 10usize..500,
    ) {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");

        let content: String = (0..content_length)
            .map(|i| ((i % 26) as u8 + b'a') as char)
            .collect();

        let class = GeneratedClass {
            name: "Thing".to_string(),
            fully_qualified_name: format!("{}.Thing", package),
            package,
            content,
        };

        let writer = FileWriter::new(&target, true);
        let result = writer.write_class(&class).unwrap();

        prop_assert!(
            !result.was_written(),
            "Dry run should not report the class as written"
        );
        prop_assert_eq!(result.bytes(), 0, "Dry run should report 0 bytes");
        prop_assert!(
            !target.exists(),
            "Dry run should not create the output directory"
        );
    }
}

// =============================================================================
// Path mapping
//
// A class file lands under one directory per package segment, named after
// the class.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_class_paths_mirror_packages(
        package in "[a-z]{2,6}(\\.[a-z]{2,6}){0,3}",
        name in "[A-Z][a-zA-Z0-9]{0,10}",
    ) {
        let class = GeneratedClass {
            name: name.clone(),
            fully_qualified_name: format!("{}.{}", package, name),
            package: package.clone(),
            content: String::new(),
        };

        let mut expected = PathBuf::new();
        for segment in package.split('.') {
            expected.push(segment);
        }
        expected.push(format!("{}.java", name));

        prop_assert_eq!(class.relative_path(), expected);
    }
}

// =============================================================================
// Determinism
//
// Generating the same documents twice emits byte-identical Java source.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_generation_is_deterministic(
        properties in prop::collection::hash_set("[a-z][a-z0-9]{0,8}", 1..5),
    ) {
        let dir = TempDir::new().unwrap();

        let fields = properties
            .iter()
            .map(|p| format!("\"{}\": {{\"type\": \"string\"}}", p))
            .collect::<Vec<_>>()
            .join(", ");
        let document = format!(
            "{{\"type\": \"object\", \"properties\": {{{}}}}}",
            fields
        );
        fs::write(dir.path().join("record.json"), document).unwrap();

        let mut config = Config::default();
        config.target.package = "com.example".to_string();

        let files = SchemaScanner::new(dir.path()).scan().unwrap();

        let first = ClassGenerator::new(config.clone()).generate(&files).unwrap();
        let second = ClassGenerator::new(config).generate(&files).unwrap();

        prop_assert_eq!(first.classes.len(), 1);
        prop_assert_eq!(first.classes.len(), second.classes.len());
        prop_assert_eq!(
            &first.classes[0].content,
            &second.classes[0].content,
            "Generation should be deterministic"
        );
    }
}
