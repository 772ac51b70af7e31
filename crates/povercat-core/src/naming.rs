//! Catalog key to Kotlin identifier conversion.

const SEPARATORS: [char; 3] = ['-', '_', '.'];

/// Convert a catalog key into a lower camel-case identifier.
///
/// The key is split on `-`, `_` and `.`; every part after the first gets an
/// uppercase first letter, the result gets a lowercase first letter.
/// `lib-simple-with-version` becomes `libSimpleWithVersion`.
pub fn to_camel_case(key: &str) -> String {
    let joined: String = key
        .split(SEPARATORS)
        .enumerate()
        .map(|(i, part)| if i == 0 { part.to_string() } else { capitalize(part) })
        .collect();
    decapitalize(&joined)
}

/// Convert a file stem or key into an upper camel-case type name
/// (`libs.versions` becomes `LibsVersions`).
pub fn to_type_name(key: &str) -> String {
    capitalize(&to_camel_case(key))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
