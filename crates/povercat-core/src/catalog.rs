//! Normalized version catalog model.
//!
//! Every record has a blank "empty" value (its `Default`) and an emptiness
//! predicate. Empty entries are kept in the model but never emitted.

/// Rejected-list sentinel meaning "no version satisfies this constraint".
pub const REJECT_ALL: &str = "+";

/// A dependency version rule, mirroring Gradle's rich version declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionConstraint {
    pub required: String,
    pub strict: String,
    pub preferred: String,
    pub rejected: Vec<String>,
}

impl VersionConstraint {
    /// A constraint pinning `version` as the required version.
    pub fn required(version: impl Into<String>) -> Self {
        Self {
            required: version.into(),
            ..Self::default()
        }
    }

    /// The reject-all constraint: `rejected = ["+"]`, everything else blank.
    pub fn reject_all() -> Self {
        Self {
            rejected: vec![REJECT_ALL.to_string()],
            ..Self::default()
        }
    }

    pub fn is_reject_all(&self) -> bool {
        self.required.is_empty()
            && self.strict.is_empty()
            && self.preferred.is_empty()
            && self.rejected.len() == 1
            && self.rejected[0] == REJECT_ALL
    }

    pub fn is_empty(&self) -> bool {
        is_blank(&self.required)
            && is_blank(&self.strict)
            && is_blank(&self.preferred)
            && self.rejected.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Flatten to a single display string: required, then strict, then preferred.
    pub fn display_version(&self) -> &str {
        if !is_blank(&self.required) {
            &self.required
        } else if !is_blank(&self.strict) {
            &self.strict
        } else {
            &self.preferred
        }
    }
}

/// A library coordinate (`group:name`) with its version constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryCoordinate {
    pub group: String,
    pub name: String,
    pub version: VersionConstraint,
}

impl LibraryCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: VersionConstraint,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version,
        }
    }

    /// Incomplete coordinates (blank group or name) are empty.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.group) || is_blank(&self.name)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

/// A Gradle plugin id with its version constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginCoordinate {
    pub id: String,
    pub version: VersionConstraint,
}

impl PluginCoordinate {
    pub fn new(id: impl Into<String>, version: VersionConstraint) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }

    pub fn is_empty(&self) -> bool {
        is_blank(&self.id)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

/// An ordered group of normalized library names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub libraries: Vec<String>,
}

impl Bundle {
    pub fn new(libraries: Vec<String>) -> Self {
        Self { libraries }
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

/// One catalog section: entries in declaration order.
///
/// Inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Section<T> {
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Section<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut section = Self::default();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}

/// A parsed version catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub versions: Section<VersionConstraint>,
    pub libraries: Section<LibraryCoordinate>,
    pub plugins: Section<PluginCoordinate>,
    pub bundles: Section<Bundle>,
}

impl Catalog {
    /// True when no section has a single entry worth emitting.
    pub fn is_blank(&self) -> bool {
        self.versions.iter().all(|(_, v)| v.is_empty())
            && self.libraries.iter().all(|(_, l)| l.is_empty())
            && self.plugins.iter().all(|(_, p)| p.is_empty())
            && self.bundles.iter().all(|(_, b)| b.is_empty())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_replaces_duplicate_keys_in_place() {
        let mut section = Section::default();
        section.insert("a", 1);
        section.insert("b", 2);
        section.insert("a", 3);
        let entries: Vec<_> = section.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(entries, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        assert!(LibraryCoordinate::new("  ", "name", VersionConstraint::default()).is_empty());
        assert!(VersionConstraint::required(" ").is_empty());
    }
}
