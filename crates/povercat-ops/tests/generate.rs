use std::fs;
use std::path::{Path, PathBuf};

use povercat_ops::ops_generate::{generate, GenerateOptions, SkipReason};
use tempfile::TempDir;

const CATALOG: &str = r#"
[versions]
kotlin = "2.1.0"

[libraries]
kotlin-stdlib = { module = "org.jetbrains.kotlin:kotlin-stdlib", version.ref = "kotlin" }

[bundles]
kotlin = ["kotlin-stdlib"]

[plugins]
kotlin-jvm = { id = "org.jetbrains.kotlin.jvm", version.ref = "kotlin" }
"#;

fn options(root: &Path, catalogs: Vec<PathBuf>) -> GenerateOptions {
    GenerateOptions {
        package: "com.example.catalog".to_string(),
        catalogs,
        output_dir: root.join("out"),
        version: "1.0.0".to_string(),
        copyright_year: 2025,
    }
}

#[test]
fn test_generates_one_class_per_catalog() {
    let tmp = TempDir::new().unwrap();
    let libs = tmp.path().join("libs.versions.toml");
    let tools = tmp.path().join("tools.toml");
    fs::write(&libs, CATALOG).unwrap();
    fs::write(&tools, "[versions]\ndetekt = \"1.23.7\"\n").unwrap();

    let report = generate(&options(tmp.path(), vec![libs, tools])).unwrap();

    let package_dir = tmp.path().join("out/com/example/catalog");
    let libs_class = package_dir.join("LibsVersionsCatalog.kt");
    let tools_class = package_dir.join("ToolsCatalog.kt");
    assert_eq!(report.written, vec![libs_class.clone(), tools_class.clone()]);
    assert!(report.skipped.is_empty());

    let content = fs::read_to_string(&libs_class).unwrap();
    assert!(content.contains("package com.example.catalog"));
    assert!(content.contains("class LibsVersions private constructor()"));
    assert!(content.contains("Bundles.kotlin.add(Libraries.kotlinStdlib)"));
    assert!(content.contains("val kotlinJvm: PluginDependency"));

    let tools_content = fs::read_to_string(&tools_class).unwrap();
    assert!(tools_content.contains("class Tools private constructor()"));
}

#[test]
fn test_creates_package_directory() {
    let tmp = TempDir::new().unwrap();
    let package_dir = tmp.path().join("out/com/example/catalog");
    assert!(!package_dir.exists());

    generate(&options(tmp.path(), Vec::new())).unwrap();

    assert!(package_dir.is_dir());
}

#[test]
fn test_existing_package_directory_is_fine() {
    let tmp = TempDir::new().unwrap();
    let package_dir = tmp.path().join("out/com/example/catalog");
    fs::create_dir_all(&package_dir).unwrap();

    generate(&options(tmp.path(), Vec::new())).unwrap();

    assert!(package_dir.is_dir());
}

#[test]
fn test_missing_catalog_fails_before_writing() {
    let tmp = TempDir::new().unwrap();
    let present = tmp.path().join("libs.toml");
    fs::write(&present, CATALOG).unwrap();
    let missing = tmp.path().join("missing.toml");

    let err = generate(&options(tmp.path(), vec![present, missing])).unwrap_err();

    assert!(
        err.to_string().contains("Version catalog file not found"),
        "got: {err}"
    );
    assert!(err.to_string().contains("missing.toml"));
    assert!(!tmp
        .path()
        .join("out/com/example/catalog/LibsCatalog.kt")
        .exists());
}

#[test]
fn test_blank_catalog_writes_no_file() {
    let tmp = TempDir::new().unwrap();
    let empty = tmp.path().join("TestEmpty.toml");
    fs::write(&empty, "[versions]\n").unwrap();

    let report = generate(&options(tmp.path(), vec![empty.clone()])).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.skipped, vec![(empty, SkipReason::NothingToEmit)]);
    assert!(!tmp
        .path()
        .join("out/com/example/catalog/TestEmptyCatalog.kt")
        .exists());
}

#[test]
fn test_non_toml_inputs_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("libs.json");
    fs::write(&json, "{}").unwrap();

    let report = generate(&options(tmp.path(), vec![json.clone()])).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.skipped, vec![(json, SkipReason::NotToml)]);
}

#[test]
fn test_invalid_catalog_does_not_block_the_rest_of_the_batch() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken.toml");
    let good = tmp.path().join("good.toml");
    fs::write(&broken, "[versions\nkotlin = ").unwrap();
    fs::write(&good, "[versions]\na = \"1.0\"\n").unwrap();

    let report = generate(&options(tmp.path(), vec![broken.clone(), good])).unwrap();

    let good_class = tmp.path().join("out/com/example/catalog/GoodCatalog.kt");
    assert_eq!(report.written, vec![good_class.clone()]);
    assert!(good_class.is_file());
    assert!(report.has_failures());
    assert_eq!(report.failed.len(), 1);
    let (path, message) = &report.failed[0];
    assert_eq!(path, &broken);
    assert!(message.contains("Invalid version catalog"), "got: {message}");
    assert!(!tmp
        .path()
        .join("out/com/example/catalog/BrokenCatalog.kt")
        .exists());
}

#[test]
fn test_regeneration_overwrites_with_identical_content() {
    let tmp = TempDir::new().unwrap();
    let libs = tmp.path().join("libs.toml");
    fs::write(&libs, CATALOG).unwrap();
    let opts = options(tmp.path(), vec![libs]);

    let first = generate(&opts).unwrap();
    let before = fs::read_to_string(&first.written[0]).unwrap();
    let second = generate(&opts).unwrap();
    let after = fs::read_to_string(&second.written[0]).unwrap();

    assert_eq!(before, after);
}
