//! Core of povercat, the portable version catalog generator.
//!
//! Turns a Gradle version catalog (TOML) into a Kotlin class exposing every
//! version, library, bundle and plugin as a typed, immutable constant.
//! The pipeline runs one way: [`document`] parses TOML into a generic tree,
//! [`parser`] normalizes it into a [`catalog::Catalog`], and [`emit`]
//! renders the Kotlin source.
//!
//! This crate does no file I/O apart from loading [`config`].

pub mod catalog;
pub mod config;
pub mod document;
pub mod emit;
pub mod naming;
pub mod parser;

use emit::EmitOptions;

/// Generate Kotlin source from catalog text.
///
/// Returns an empty string when the catalog has nothing to emit. Fails only
/// when `text` is not valid TOML.
pub fn generate_source(text: &str, options: &EmitOptions) -> Result<String, toml_edit::TomlError> {
    let document = document::parse(text)?;
    let catalog = parser::parse_catalog(&document);
    Ok(emit::emit(&catalog, options))
}
