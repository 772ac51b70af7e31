//! Catalog parser: document tree to [`Catalog`].
//!
//! Parsing is permissive. Malformed entries become empty values and are
//! skipped later by the emitter; nothing here fails.

use crate::catalog::{
    Bundle, Catalog, LibraryCoordinate, PluginCoordinate, Section, VersionConstraint,
};
use crate::document::Node;
use crate::naming::to_camel_case;

/// Build a catalog from a parsed document.
///
/// Versions are parsed first so library and plugin `version.ref` lookups
/// see the complete versions section.
pub fn parse_catalog(document: &Node) -> Catalog {
    let versions: Section<VersionConstraint> = section(document, "versions")
        .iter()
        .map(|(key, raw)| (key.as_str(), parse_version(raw)))
        .collect();

    let libraries = section(document, "libraries")
        .iter()
        .map(|(key, raw)| (key.as_str(), parse_library(raw, &versions)))
        .collect();

    let plugins = section(document, "plugins")
        .iter()
        .map(|(key, raw)| (key.as_str(), parse_plugin(raw, &versions)))
        .collect();

    let bundles = section(document, "bundles")
        .iter()
        .map(|(key, raw)| (key.as_str(), parse_bundle(raw)))
        .collect();

    let catalog = Catalog {
        versions,
        libraries,
        plugins,
        bundles,
    };
    tracing::debug!(
        "Parsed catalog: {} versions, {} libraries, {} plugins, {} bundles",
        catalog.versions.len(),
        catalog.libraries.len(),
        catalog.plugins.len(),
        catalog.bundles.len()
    );
    catalog
}

/// Parse a `[versions]` entry.
///
/// A scalar is the required version. A table may carry `rejectAll`,
/// `require`, `strictly`, `prefer` and `reject`; `rejectAll = true` wins over
/// everything else.
pub fn parse_version(raw: &Node) -> VersionConstraint {
    match raw {
        Node::Str(s) | Node::Literal(s) => VersionConstraint::required(s.as_str()),
        Node::Table(_) => {
            if raw.get("rejectAll").and_then(Node::as_bool) == Some(true) {
                return VersionConstraint::reject_all();
            }
            VersionConstraint {
                required: text_field(raw, "require"),
                strict: text_field(raw, "strictly"),
                preferred: text_field(raw, "prefer"),
                rejected: raw
                    .get("reject")
                    .and_then(Node::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Node::as_text)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        }
        Node::Bool(_) | Node::Array(_) => VersionConstraint::default(),
    }
}

/// Parse a `[libraries]` entry, resolving `version.ref` against `versions`.
pub fn parse_library(raw: &Node, versions: &Section<VersionConstraint>) -> LibraryCoordinate {
    match raw {
        Node::Str(notation) => parse_library_notation(notation),
        Node::Table(_) => {
            let version = resolve_inline_version(raw.get("version"), versions);
            let (group, name) = match raw.get("module").and_then(Node::as_str) {
                Some(module) => split_module(module),
                None => (text_field(raw, "group"), text_field(raw, "name")),
            };
            LibraryCoordinate::new(group, name, version)
        }
        _ => LibraryCoordinate::default(),
    }
}

/// Parse a `[plugins]` entry. Only the table form is recognized.
pub fn parse_plugin(raw: &Node, versions: &Section<VersionConstraint>) -> PluginCoordinate {
    if !raw.is_table() {
        return PluginCoordinate::default();
    }
    PluginCoordinate::new(
        text_field(raw, "id"),
        resolve_inline_version(raw.get("version"), versions),
    )
}

/// Parse a `[bundles]` entry: an array of library keys, normalized to the
/// identifiers the libraries are emitted under.
pub fn parse_bundle(raw: &Node) -> Bundle {
    match raw.as_array() {
        Some(items) => Bundle::new(
            items
                .iter()
                .filter_map(Node::as_str)
                .map(to_camel_case)
                .collect(),
        ),
        None => Bundle::default(),
    }
}

/// Resolve the `version` value of a library or plugin.
///
/// Absent gives the empty constraint, `{ ref = "key" }` looks up the versions
/// section (empty when the key is unknown), any other table is parsed inline
/// and a scalar is the required version.
pub fn resolve_inline_version(
    raw: Option<&Node>,
    versions: &Section<VersionConstraint>,
) -> VersionConstraint {
    let Some(raw) = raw else {
        return VersionConstraint::default();
    };
    match raw.get("ref").and_then(Node::as_text) {
        Some(key) => match versions.get(key) {
            Some(version) => version.clone(),
            None => {
                tracing::debug!("Unknown version reference '{key}', using an empty version");
                VersionConstraint::default()
            }
        },
        None => parse_version(raw),
    }
}

/// `group:name` or `group:name:version`.
fn parse_library_notation(notation: &str) -> LibraryCoordinate {
    let parts: Vec<&str> = notation.split(':').collect();
    match parts.as_slice() {
        [group, name] => LibraryCoordinate::new(*group, *name, VersionConstraint::default()),
        [group, name, version] => {
            LibraryCoordinate::new(*group, *name, VersionConstraint::required(*version))
        }
        _ => {
            tracing::debug!("Ignoring malformed library notation '{notation}'");
            LibraryCoordinate::default()
        }
    }
}

fn split_module(module: &str) -> (String, String) {
    match module.split_once(':') {
        Some((group, name)) if !name.contains(':') => (group.to_string(), name.to_string()),
        _ => {
            tracing::debug!("Ignoring malformed module '{module}'");
            (String::new(), String::new())
        }
    }
}

fn section<'a>(document: &'a Node, name: &str) -> &'a [(String, Node)] {
    document.get(name).and_then(Node::as_table).unwrap_or(&[])
}

fn text_field(raw: &Node, key: &str) -> String {
    raw.get(key)
        .and_then(Node::as_text)
        .unwrap_or_default()
        .to_string()
}
