//! Character records and the JSON file that holds them.
//!
//! Records are kept as raw JSON objects so that fields this crate does not
//! know about, and the order of all fields, survive a rewrite untouched.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::target::TargetKey;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of characters at the top level")]
    NotAnArray,

    #[error("Character at index {0} is not a JSON object")]
    NotAnObject(usize),
}

/// One character entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CharacterRecord {
    fields: Map<String, Value>,
}

impl CharacterRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        CharacterRecord { fields }
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Character name, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Version title, if present and a string
    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    /// Element, if present and a string (`null` counts as absent)
    pub fn element(&self) -> Option<&str> {
        self.str_field("element")
    }

    /// Identity key, or None for a record without a name.
    ///
    /// Fields are trimmed like allow-list entries are.
    pub fn key(&self) -> Option<TargetKey> {
        self.name().map(|name| TargetKey::new(name, self.version()))
    }

    /// Set the element and return the previous value.
    ///
    /// A missing or `null` element gives None; any other non-string value is
    /// returned in its JSON form. A record without an element gets the field
    /// appended after its others.
    pub fn set_element(&mut self, element: &str) -> Option<String> {
        let previous = self
            .fields
            .insert("element".to_string(), Value::String(element.to_string()));

        match previous {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Ordered collection of character records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<CharacterRecord>,
}

impl Roster {
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Roster { records }
    }

    /// Parse a roster from JSON text
    pub fn from_json_str(data: &str) -> Result<Self, RosterError> {
        let Value::Array(items) = serde_json::from_str::<Value>(data)? else {
            return Err(RosterError::NotAnArray);
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(CharacterRecord::new(fields)),
                _ => Err(RosterError::NotAnObject(index)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Roster { records })
    }

    /// Read and parse a roster file
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let data = fs::read_to_string(path)?;
        let roster = Self::from_json_str(&data)?;
        tracing::info!(path = %path.display(), records = roster.len(), "loaded characters");
        Ok(roster)
    }

    /// Render as JSON with 2-space indentation and unescaped non-ASCII text
    pub fn to_json_string(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Write the roster to a file, replacing its contents.
    ///
    /// The file is truncated and rewritten in place; a failure part way
    /// through can leave it incomplete.
    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        let json = self.to_json_string()?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), records = self.len(), "wrote characters");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [CharacterRecord] {
        &mut self.records
    }
}
