//! Operation: summarize what a version catalog would generate.

use std::path::Path;

use povercat_core::catalog::{Catalog, VersionConstraint};
use povercat_core::naming::to_camel_case;
use povercat_core::{document, parser};
use povercat_util::errors::{PovercatError, PovercatResult};

use crate::read_catalog_text;

/// Parse a catalog file into the normalized model.
pub fn load_catalog(path: &Path) -> PovercatResult<Catalog> {
    let text = read_catalog_text(path)?;
    let document = document::parse(&text).map_err(|e| PovercatError::Catalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parser::parse_catalog(&document))
}

/// Human-readable listing of a catalog, one line per entry grouped by
/// section. Entries that would be skipped are marked `(skipped)`.
pub fn describe(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();

    if !catalog.versions.is_empty() {
        lines.push("[versions]".to_string());
        for (key, version) in catalog.versions.iter() {
            lines.push(entry_line(key, &describe_version(version), version.is_empty()));
        }
    }

    if !catalog.libraries.is_empty() {
        lines.push("[libraries]".to_string());
        for (key, library) in catalog.libraries.iter() {
            let value = format!(
                "{}:{}{}",
                library.group,
                library.name,
                version_suffix(&library.version)
            );
            lines.push(entry_line(key, &value, library.is_empty()));
        }
    }

    if !catalog.bundles.is_empty() {
        lines.push("[bundles]".to_string());
        for (key, bundle) in catalog.bundles.iter() {
            lines.push(entry_line(key, &bundle.libraries.join(", "), bundle.is_empty()));
        }
    }

    if !catalog.plugins.is_empty() {
        lines.push("[plugins]".to_string());
        for (key, plugin) in catalog.plugins.iter() {
            let value = format!("{}{}", plugin.id, version_suffix(&plugin.version));
            lines.push(entry_line(key, &value, plugin.is_empty()));
        }
    }

    if catalog.is_blank() {
        lines.push("Nothing to generate".to_string());
    }

    lines
}

fn entry_line(key: &str, value: &str, skipped: bool) -> String {
    let marker = if skipped { " (skipped)" } else { "" };
    format!("  {} = {value}{marker}", to_camel_case(key))
}

fn describe_version(version: &VersionConstraint) -> String {
    if version.is_reject_all() {
        "reject all".to_string()
    } else {
        version.display_version().to_string()
    }
}

fn version_suffix(version: &VersionConstraint) -> String {
    if version.is_empty() {
        String::new()
    } else {
        format!(":{}", describe_version(version))
    }
}
