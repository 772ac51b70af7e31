//! Kotlin source emitter.
//!
//! The generated file is composed from independent fragments (header,
//! imports, class doc and one fragment per catalog section) that are joined
//! by [`emit`]. Each fragment is deterministic: entries come out in catalog
//! declaration order and nothing depends on the clock or hash iteration.

use std::collections::BTreeSet;

use crate::catalog::{
    Bundle, Catalog, LibraryCoordinate, PluginCoordinate, Section, VersionConstraint,
};
use crate::naming::to_camel_case;

const INDENT: &str = "    ";

const IMPORT_VERSION_CONSTRAINT: &str = "org.gradle.api.artifacts.VersionConstraint";
const IMPORT_MINIMAL_DEPENDENCY: &str = "org.gradle.api.artifacts.MinimalExternalModuleDependency";
const IMPORT_BUNDLE: &str = "org.gradle.api.artifacts.ExternalModuleDependencyBundle";
const IMPORT_MODULE_IDENTIFIER: &str = "org.gradle.api.internal.artifacts.DefaultModuleIdentifier";
const IMPORT_IMMUTABLE_CONSTRAINT: &str =
    "org.gradle.api.internal.artifacts.dependencies.DefaultImmutableVersionConstraint";
const IMPORT_MUTABLE_CONSTRAINT: &str =
    "org.gradle.api.internal.artifacts.dependencies.DefaultMutableVersionConstraint";
const IMPORT_DEFAULT_MINIMAL_DEPENDENCY: &str =
    "org.gradle.api.internal.artifacts.dependencies.DefaultMinimalDependency";
const IMPORT_DEFAULT_PLUGIN_DEPENDENCY: &str =
    "org.gradle.api.internal.artifacts.dependencies.DefaultPluginDependency";
const IMPORT_DEFAULT_BUNDLE: &str =
    "org.gradle.api.internal.catalog.DefaultExternalModuleDependencyBundle";
const IMPORT_PLUGIN_DEPENDENCY: &str = "org.gradle.plugin.use.PluginDependency";

/// Kotlin hard keywords; identifiers matching one must be backquoted.
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Characters the JVM rejects in member names, even inside backquotes.
const JVM_FORBIDDEN: &[char] = &['.', ';', '[', ']', '/', '<', '>', ':', '\\', '`'];

/// Parameters of one generated class.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Kotlin package of the generated class.
    pub package: String,
    /// Simple name of the generated class.
    pub type_name: String,
    /// Version label shown in the class KDoc (`@version v<label>`).
    pub display_version: String,
    /// Year in the license header.
    pub copyright_year: i32,
}

/// Render a catalog as a Kotlin source file.
///
/// Returns an empty string when no section has an entry worth emitting.
pub fn emit(catalog: &Catalog, options: &EmitOptions) -> String {
    let sections: Vec<String> = [
        versions_section(&catalog.versions),
        libraries_section(&catalog.libraries),
        bundles_section(&catalog.bundles),
        plugins_section(&catalog.plugins),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sections.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&header(options.copyright_year));
    out.push('\n');
    out.push_str(&format!("package {}\n", options.package));
    out.push('\n');
    out.push_str(&imports(catalog));
    out.push('\n');
    out.push_str(&class_doc(&options.display_version));
    out.push_str(&format!(
        "class {} private constructor() {{\n",
        kotlin_identifier(&options.type_name)
    ));
    out.push('\n');
    out.push_str(&sections.join("\n"));
    out.push_str("}\n");
    out
}

/// Apache 2.0 license block.
pub fn header(copyright_year: i32) -> String {
    [
        "/*".to_string(),
        format!(" * Copyright {copyright_year}"),
        " *".to_string(),
        " * Licensed under the Apache License, Version 2.0 (the \"License\");".to_string(),
        " * you may not use this file except in compliance with the License.".to_string(),
        " * You may obtain a copy of the License at".to_string(),
        " *".to_string(),
        " * http://www.apache.org/licenses/LICENSE-2.0".to_string(),
        " *".to_string(),
        " * Unless required by applicable law or agreed to in writing, software distributed"
            .to_string(),
        " * under the License is distributed on an \"AS IS\" BASIS, WITHOUT WARRANTIES".to_string(),
        " * OR CONDITIONS OF ANY KIND, either express or implied. See the License for the"
            .to_string(),
        " * specific language governing permissions and limitations under the License.".to_string(),
        " */".to_string(),
    ]
    .join("\n")
        + "\n"
}

/// Sorted import list covering exactly the types the emitted sections use.
pub fn imports(catalog: &Catalog) -> String {
    let mut used = BTreeSet::new();
    let constraint_types = [IMPORT_IMMUTABLE_CONSTRAINT, IMPORT_MUTABLE_CONSTRAINT];

    if has_entries(&catalog.versions, VersionConstraint::is_not_empty) {
        used.extend([IMPORT_VERSION_CONSTRAINT, IMPORT_IMMUTABLE_CONSTRAINT]);
    }
    if has_entries(&catalog.libraries, LibraryCoordinate::is_not_empty) {
        used.extend([
            IMPORT_MINIMAL_DEPENDENCY,
            IMPORT_MODULE_IDENTIFIER,
            IMPORT_DEFAULT_MINIMAL_DEPENDENCY,
        ]);
        used.extend(constraint_types);
    }
    if has_entries(&catalog.bundles, Bundle::is_not_empty) {
        used.extend([IMPORT_BUNDLE, IMPORT_DEFAULT_BUNDLE]);
    }
    if has_entries(&catalog.plugins, PluginCoordinate::is_not_empty) {
        used.extend([IMPORT_PLUGIN_DEPENDENCY, IMPORT_DEFAULT_PLUGIN_DEPENDENCY]);
        used.extend(constraint_types);
    }

    used.into_iter()
        .map(|fqn| format!("import {fqn}\n"))
        .collect()
}

/// KDoc block for the generated class.
pub fn class_doc(display_version: &str) -> String {
    [
        "/**".to_string(),
        " * <p><strong>WARNING: This class is auto-generated by PoVerCat. Do not modify it manually.</strong></p>".to_string(),
        " *".to_string(),
        " * This class provides access to the version catalog of the Gradle project,".to_string(),
        " * which defines conventions for other projects. All dependencies and versions".to_string(),
        " * are statically embedded in this class and are immutable.".to_string(),
        " *".to_string(),
        " * <p>To update versions, modify them in the version catalog of the convention".to_string(),
        " * project and rebuild it.</p>".to_string(),
        " *".to_string(),
        " * @author PoVerCat".to_string(),
        format!(" * @version v{}", kdoc_safe(display_version)),
        " */".to_string(),
    ]
    .join("\n")
        + "\n"
}

/// `object Versions`, or `None` when there is no non-empty version.
pub fn versions_section(versions: &Section<VersionConstraint>) -> Option<String> {
    let entries: Vec<Vec<String>> = versions
        .iter()
        .filter(|(_, version)| version.is_not_empty())
        .map(|(key, version)| {
            let mut lines = vec![
                format!(
                    "val {}: VersionConstraint = DefaultImmutableVersionConstraint(",
                    member_name(key)
                ),
            ];
            lines.extend(indent_all(constraint_arguments(version), 1));
            lines.push(")".to_string());
            lines
        })
        .collect();
    object_block("Versions", entries, Vec::new())
}

/// `object Libraries`, or `None` when there is no complete library.
pub fn libraries_section(libraries: &Section<LibraryCoordinate>) -> Option<String> {
    let entries: Vec<Vec<String>> = libraries
        .iter()
        .filter(|(_, library)| library.is_not_empty())
        .map(|(key, library)| {
            let mut lines = vec![format!(
                "val {}: MinimalExternalModuleDependency = DefaultMinimalDependency(",
                member_name(key)
            )];
            lines.push(format!(
                "{INDENT}DefaultModuleIdentifier.newId({}, {}),",
                kotlin_string(&library.group),
                kotlin_string(&library.name)
            ));
            lines.extend(indent_all(mutable_constraint(&library.version), 1));
            lines.push(")".to_string());
            lines
        })
        .collect();
    object_block("Libraries", entries, Vec::new())
}

/// `object Bundles` with its `init` block, or `None` when every bundle is empty.
pub fn bundles_section(bundles: &Section<Bundle>) -> Option<String> {
    let non_empty: Vec<(&str, &Bundle)> = bundles
        .iter()
        .filter(|(_, bundle)| bundle.is_not_empty())
        .collect();

    let entries: Vec<Vec<String>> = non_empty
        .iter()
        .map(|(key, _)| {
            vec![format!(
                "val {}: ExternalModuleDependencyBundle = DefaultExternalModuleDependencyBundle()",
                member_name(key)
            )]
        })
        .collect();

    let mut init = Vec::new();
    if !non_empty.is_empty() {
        init.push("init {".to_string());
        for (i, (key, bundle)) in non_empty.iter().enumerate() {
            if i > 0 {
                init.push(String::new());
            }
            let bundle_name = member_name(key);
            for library in &bundle.libraries {
                init.push(format!(
                    "{INDENT}Bundles.{bundle_name}.add(Libraries.{})",
                    kotlin_identifier(library)
                ));
            }
        }
        init.push("}".to_string());
    }

    object_block("Bundles", entries, init)
}

/// `object Plugins`, or `None` when there is no plugin with an id.
pub fn plugins_section(plugins: &Section<PluginCoordinate>) -> Option<String> {
    let entries: Vec<Vec<String>> = plugins
        .iter()
        .filter(|(_, plugin)| plugin.is_not_empty())
        .map(|(key, plugin)| {
            let mut lines = vec![format!(
                "val {}: PluginDependency = DefaultPluginDependency(",
                member_name(key)
            )];
            lines.push(format!("{INDENT}{},", kotlin_string(&plugin.id)));
            lines.extend(indent_all(mutable_constraint(&plugin.version), 1));
            lines.push(")".to_string());
            lines
        })
        .collect();
    object_block("Plugins", entries, Vec::new())
}

/// Quote and escape a value as a Kotlin string literal.
pub fn kotlin_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Backquote identifiers that Kotlin would not accept bare.
///
/// Characters illegal in JVM names are replaced with `_` first.
pub fn kotlin_identifier(name: &str) -> String {
    let name = name.replace(JVM_FORBIDDEN, "_");
    let name = name.as_str();
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let plain = name.chars().all(|c| c == '_' || c.is_alphanumeric());
    if name.is_empty() || starts_with_digit || !plain || KOTLIN_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

fn member_name(key: &str) -> String {
    kotlin_identifier(&to_camel_case(key))
}

/// Wrap entry declarations (and optional trailing lines) in an indented
/// `object <name> { ... }` block. Entries are preceded by a blank line and
/// annotated `@JvmStatic`.
fn object_block(name: &str, entries: Vec<Vec<String>>, trailer: Vec<String>) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut body = Vec::new();
    for entry in entries {
        body.push(String::new());
        body.push("@JvmStatic".to_string());
        body.extend(entry);
    }
    if !trailer.is_empty() {
        body.push(String::new());
        body.extend(trailer);
    }

    let mut lines = vec![format!("object {name} {{")];
    lines.extend(indent_all(body, 1));
    lines.push("}".to_string());

    Some(
        indent_all(lines, 1)
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
    )
}

/// `DefaultMutableVersionConstraint(DefaultImmutableVersionConstraint(...)),`
fn mutable_constraint(version: &VersionConstraint) -> Vec<String> {
    let mut lines = vec![
        "DefaultMutableVersionConstraint(".to_string(),
        format!("{INDENT}DefaultImmutableVersionConstraint("),
    ];
    lines.extend(indent_all(constraint_arguments(version), 2));
    lines.push(format!("{INDENT})"));
    lines.push(")".to_string());
    lines
}

/// Constructor arguments of `DefaultImmutableVersionConstraint`:
/// preferred, required, strict, rejected, branch.
fn constraint_arguments(version: &VersionConstraint) -> Vec<String> {
    vec![
        format!("{},", kotlin_string(&version.preferred)),
        format!("{},", kotlin_string(&version.required)),
        format!("{},", kotlin_string(&version.strict)),
        format!("{},", rejected_list(&version.rejected)),
        "null".to_string(),
    ]
}

fn rejected_list(rejected: &[String]) -> String {
    if rejected.is_empty() {
        "emptyList<String>()".to_string()
    } else {
        let items: Vec<String> = rejected.iter().map(|r| kotlin_string(r)).collect();
        format!("listOf({})", items.join(", "))
    }
}

fn indent_all(lines: Vec<String>, depth: usize) -> Vec<String> {
    let prefix = INDENT.repeat(depth);
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

fn has_entries<T>(section: &Section<T>, keep: impl Fn(&T) -> bool) -> bool {
    section.iter().any(|(_, value)| keep(value))
}

/// Keep a label from closing the KDoc comment early.
fn kdoc_safe(label: &str) -> String {
    label.replace("*/", "*&#47;").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_digit_prefixed_names_are_backquoted() {
        assert_eq!(kotlin_identifier("object"), "`object`");
        assert_eq!(kotlin_identifier("2fa"), "`2fa`");
        assert_eq!(kotlin_identifier("kotlinStdlib"), "kotlinStdlib");
    }

    #[test]
    fn jvm_forbidden_characters_become_underscores() {
        assert_eq!(kotlin_identifier("odd:key"), "odd_key");
        assert_eq!(kotlin_identifier("a/b<c>"), "a_b_c_");
        assert_eq!(kotlin_identifier("x y;z"), "`x y_z`");
    }

    #[test]
    fn blank_lines_are_not_indented() {
        let lines = indent_all(vec!["a".to_string(), String::new()], 2);
        assert_eq!(lines, vec!["        a".to_string(), String::new()]);
    }

    #[test]
    fn rejected_list_renders_literals() {
        assert_eq!(rejected_list(&[]), "emptyList<String>()");
        assert_eq!(
            rejected_list(&["1.0".to_string(), "1.1".to_string()]),
            "listOf(\"1.0\", \"1.1\")"
        );
    }
}
