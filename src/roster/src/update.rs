//! Bulk element assignment.

use std::collections::HashSet;

use crate::roster::Roster;
use crate::target::{TargetKey, TargetSet};

/// Element assigned when neither the caller nor the allow-list names one
pub const DEFAULT_ELEMENT: &str = "heart";

/// One record whose element was assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementChange {
    pub key: TargetKey,
    pub old: Option<String>,
    pub new: String,
}

/// Outcome of an update pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Element value that was assigned
    pub element: String,

    /// Assignments in record order
    pub changes: Vec<ElementChange>,

    /// Targets with no record in the roster, in allow-list order
    pub not_found: Vec<TargetKey>,
}

impl UpdateReport {
    pub fn updated_count(&self) -> usize {
        self.changes.len()
    }
}

/// Set `element` on every record whose key is in `targets`.
///
/// The assignment is unconditional, so a record that already carries the
/// element is still counted. Records without a name never match.
pub fn update_elements(roster: &mut Roster, targets: &TargetSet, element: &str) -> UpdateReport {
    let mut changes = Vec::new();

    for record in roster.records_mut() {
        let Some(key) = record.key() else {
            continue;
        };
        if !targets.contains(&key) {
            continue;
        }

        let old = record.set_element(element);
        tracing::debug!(character = %key, old = ?old, "assigned element");
        changes.push(ElementChange {
            key,
            old,
            new: element.to_string(),
        });
    }

    let present: HashSet<TargetKey> = roster.records().iter().filter_map(|r| r.key()).collect();
    let not_found: Vec<TargetKey> = targets
        .iter()
        .filter(|key| !present.contains(*key))
        .cloned()
        .collect();

    if !not_found.is_empty() {
        tracing::info!(missing = not_found.len(), "some targets matched no character");
    }

    UpdateReport {
        element: element.to_string(),
        changes,
        not_found,
    }
}
