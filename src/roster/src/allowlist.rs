//! Allow-lists of characters to update.
//!
//! An allow-list is a set of structured `(name, version)` entries plus an
//! optional element value. The default list is compiled into the crate; other
//! lists can be loaded from TOML, YAML or JSON files. Legacy
//! `Name "Version"` strings are accepted under the `legacy` key.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::target::{TargetKey, TargetSet};

/// Default allow-list shipped with the crate
const EMBEDDED_TARGETS: &str = include_str!("../data/heart_targets.toml");

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported allow-list format: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

/// One structured allow-list entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetEntry {
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,
}

impl TargetEntry {
    pub fn key(&self) -> TargetKey {
        TargetKey::new(&self.name, self.version.as_deref())
    }
}

/// A list of characters to update, with the element to assign them
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TargetList {
    /// Element value this list assigns
    #[serde(default)]
    pub element: Option<String>,

    #[serde(default, rename = "target")]
    pub targets: Vec<TargetEntry>,

    /// Entries in `Name "Version"` form
    #[serde(default)]
    pub legacy: Vec<String>,
}

impl TargetList {
    /// The allow-list compiled into the crate
    pub fn embedded() -> Result<Self, TargetError> {
        Self::from_toml_str(EMBEDDED_TARGETS)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, TargetError> {
        Ok(toml::from_str(data)?)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self, TargetError> {
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn from_json_str(data: &str) -> Result<Self, TargetError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Load an allow-list file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, TargetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, TargetError> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            _ => return Err(TargetError::UnsupportedFormat(path.display().to_string())),
        };

        let data = fs::read_to_string(path)?;
        let list = parse(&data)?;
        tracing::debug!(
            path = %path.display(),
            targets = list.targets.len(),
            legacy = list.legacy.len(),
            "loaded allow-list"
        );
        Ok(list)
    }

    /// Element value named by the list, if any
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Total number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.targets.len() + self.legacy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.legacy.is_empty()
    }

    /// Collapse the entries into a set of unique keys.
    ///
    /// Structured entries come first, then legacy strings, each in file order.
    pub fn to_set(&self) -> TargetSet {
        let set: TargetSet = self
            .targets
            .iter()
            .map(TargetEntry::key)
            .chain(self.legacy.iter().map(|e| TargetKey::parse_legacy(e)))
            .collect();

        let duplicates = self.len() - set.len();
        if duplicates > 0 {
            tracing::debug!(duplicates, "collapsed duplicate allow-list entries");
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_list() {
        let list = TargetList::embedded().unwrap();
        assert_eq!(list.element(), Some("heart"));
        assert_eq!(list.targets.len(), 134);
        assert!(list.legacy.is_empty());

        let set = list.to_set();
        assert_eq!(set.len(), 134);
        assert!(set.contains(&TargetKey::new("Gaara", Some("The Strongest Shield"))));
        assert!(set.contains(&TargetKey::new("Zori", Some("Bodyguard w/Hat"))));
    }

    #[test]
    fn test_embedded_list_keeps_nested_quotes() {
        let set = TargetList::embedded().unwrap().to_set();
        assert!(set.contains(&TargetKey::new(
            "Inoichi Yamanaka",
            Some("The \"Ino\"-Shika-Cho Trio")
        )));
        assert!(set.contains(&TargetKey::new("Haku", Some("The Icy Mask's Blades"))));
    }

    #[test]
    fn test_from_toml_with_legacy_entries() {
        let list = TargetList::from_toml_str(
            r#"
element = "wind"
legacy = ['Gaara "The Strongest Shield"', "Red Ring"]

[[target]]
name = "Temari"
version = "High Winds"

[[target]]
name = "Gaara"
version = "The Strongest Shield"
"#,
        )
        .unwrap();

        assert_eq!(list.element(), Some("wind"));
        assert_eq!(list.len(), 4);

        let keys: Vec<String> = list.to_set().iter().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            [
                "Temari \"High Winds\"",
                "Gaara \"The Strongest Shield\"",
                "Red Ring"
            ]
        );
    }

    #[test]
    fn test_from_yaml() {
        let list = TargetList::from_yaml_str(
            "target:\n  - name: Sai\n    version: Ink Drawn from the Heart\n  - name: Red Ring\n",
        )
        .unwrap();

        assert_eq!(list.element(), None);
        let set = list.to_set();
        assert!(set.contains(&TargetKey::new("Sai", Some("Ink Drawn from the Heart"))));
        assert!(set.contains(&TargetKey::new("Red Ring", None)));
    }

    #[test]
    fn test_from_json() {
        let list = TargetList::from_json_str(
            r#"{"element": "heart", "target": [{"name": "Konan", "version": "A Bridge to Hope"}]}"#,
        )
        .unwrap();
        assert_eq!(list.targets[0].key(), TargetKey::new("Konan", Some("A Bridge to Hope")));
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = tempfile::tempdir().unwrap();

        let toml_path = temp_dir.path().join("targets.toml");
        fs::write(&toml_path, "[[target]]\nname = \"Tenten\"\nversion = \"Battle Blade Dance\"\n")
            .unwrap();
        assert_eq!(TargetList::load(&toml_path).unwrap().targets.len(), 1);

        let yaml_path = temp_dir.path().join("targets.YML");
        fs::write(&yaml_path, "legacy:\n  - 'Tenten \"Battle Blade Dance\"'\n").unwrap();
        assert_eq!(TargetList::load(&yaml_path).unwrap().legacy.len(), 1);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = TargetList::load(Path::new("targets.txt"));
        assert!(matches!(result, Err(TargetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = TargetList::load(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(TargetError::Io(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TargetList::from_toml_str("[[target]]\nversion = 3\n"),
            Err(TargetError::Toml(_))
        ));
    }
}
