//! Target keys and the set they are matched against.
//!
//! A target key identifies a character by `(name, version)`. Keys come either
//! from structured allow-list entries or from the legacy `Name "Version"`
//! composite string format.

use indexmap::IndexSet;
use std::fmt;

/// Identity of a character: a name and an optional version title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetKey {
    name: String,
    version: Option<String>,
}

impl TargetKey {
    /// Build a key from a structured pair, trimming both parts.
    ///
    /// Record fields go through the same constructor, so both sides of a
    /// match are normalized identically.
    pub fn new(name: &str, version: Option<&str>) -> Self {
        TargetKey {
            name: name.trim().to_string(),
            version: version.map(|v| v.trim().to_string()),
        }
    }

    /// Parse a legacy `Name "Version"` entry.
    ///
    /// Without any quote the whole trimmed entry is the name and there is no
    /// version. Otherwise the entry is split at the first quote only; the
    /// remainder loses one trailing quote and is then trimmed.
    ///
    /// Only the first quote delimits the name, so a name that itself contains
    /// a quoted nickname is split too early. Structured entries avoid this.
    pub fn parse_legacy(entry: &str) -> Self {
        let Some((name, rest)) = entry.split_once('"') else {
            return TargetKey {
                name: entry.trim().to_string(),
                version: None,
            };
        };

        let version = rest.strip_suffix('"').unwrap_or(rest).trim();

        TargetKey {
            name: name.trim().to_string(),
            version: Some(version.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} \"{}\"", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Unique target keys, kept in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    keys: IndexSet<TargetKey>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key; returns false if it was already present
    pub fn insert(&mut self, key: TargetKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &TargetKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetKey> {
        self.keys.iter()
    }
}

impl FromIterator<TargetKey> for TargetSet {
    fn from_iter<I: IntoIterator<Item = TargetKey>>(iter: I) -> Self {
        TargetSet {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_quote() {
        let key = TargetKey::parse_legacy("  Awakening Scroll  ");
        assert_eq!(key.name(), "Awakening Scroll");
        assert_eq!(key.version(), None);
    }

    #[test]
    fn test_parse_without_quote_is_not_empty_version() {
        let bare = TargetKey::parse_legacy("Gaara");
        let empty = TargetKey::parse_legacy("Gaara \"\"");
        assert_eq!(empty.version(), Some(""));
        assert_ne!(bare, empty);
    }

    #[test]
    fn test_parse_name_and_version() {
        let key = TargetKey::parse_legacy("Gaara \"The Strongest Shield\"");
        assert_eq!(key.name(), "Gaara");
        assert_eq!(key.version(), Some("The Strongest Shield"));
    }

    #[test]
    fn test_parse_keeps_inner_quotes() {
        let key = TargetKey::parse_legacy("Inoichi Yamanaka \"The \"Ino\"-Shika-Cho Trio\"");
        assert_eq!(key.name(), "Inoichi Yamanaka");
        assert_eq!(key.version(), Some("The \"Ino\"-Shika-Cho Trio"));
    }

    #[test]
    fn test_parse_strips_one_trailing_quote() {
        let key = TargetKey::parse_legacy("Zori \"Bodyguard\"\"");
        assert_eq!(key.version(), Some("Bodyguard\""));
    }

    #[test]
    fn test_parse_quote_in_name_splits_early() {
        // Known limitation of the composite format
        let key = TargetKey::parse_legacy("Might \"Guy\" Dai \"Something to Protect\"");
        assert_eq!(key.name(), "Might");
        assert_eq!(key.version(), Some("Guy\" Dai \"Something to Protect"));
    }

    #[test]
    fn test_parse_apostrophes() {
        let key = TargetKey::parse_legacy("Yugito Ni'i \"Unbreakable Will\"");
        assert_eq!(key.name(), "Yugito Ni'i");
        assert_eq!(key.version(), Some("Unbreakable Will"));
    }

    #[test]
    fn test_new_trims_both_parts() {
        let key = TargetKey::new(" Gaara ", Some(" The Strongest Shield "));
        assert_eq!(key, TargetKey::parse_legacy("Gaara \"The Strongest Shield\""));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TargetKey::new("Nonexistent", Some("Ghost")).to_string(),
            "Nonexistent \"Ghost\""
        );
        assert_eq!(TargetKey::new("Red Ring", None).to_string(), "Red Ring");
    }

    #[test]
    fn test_set_collapses_duplicates_in_order() {
        let set: TargetSet = [
            TargetKey::parse_legacy("Tsunade \"Inherited Dream\""),
            TargetKey::parse_legacy("Jiraiya \"Hidden Heart\""),
            TargetKey::parse_legacy("  Tsunade  \"Inherited Dream \""),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.iter().map(TargetKey::name).collect();
        assert_eq!(names, ["Tsunade", "Jiraiya"]);
    }

    #[test]
    fn test_parse_strips_quote_before_trimming() {
        // Whitespace after the closing quote keeps the quote in the version
        let key = TargetKey::parse_legacy("Tsunade \"Inherited Dream\" ");
        assert_eq!(key.version(), Some("Inherited Dream\""));
        assert_ne!(key, TargetKey::parse_legacy("Tsunade \"Inherited Dream\""));
    }

    #[test]
    fn test_set_is_case_sensitive() {
        let mut set = TargetSet::new();
        assert!(set.insert(TargetKey::new("Haku", Some("Icy"))));
        assert!(!set.insert(TargetKey::new("Haku", Some("Icy"))));
        assert!(!set.contains(&TargetKey::new("haku", Some("Icy"))));
    }
}
