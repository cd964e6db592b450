//! # roster
//!
//! Character roster library - allow-lists, record matching, and bulk element
//! updates for a JSON dataset of game characters.
//!
//! This library provides functionality to:
//! - Parse target keys, including the legacy `Name "Version"` format
//! - Load allow-lists (embedded default, TOML, YAML or JSON)
//! - Load and rewrite the characters file without disturbing other fields
//! - Assign an element to every allow-listed character and report misses
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("data/characters.json");
//! let targets = roster::TargetList::embedded()?.to_set();
//!
//! let mut characters = roster::Roster::load(path)?;
//! let report = roster::update_elements(&mut characters, &targets, roster::DEFAULT_ELEMENT);
//! characters.save(path)?;
//!
//! roster::report::write_report(&mut std::io::stdout(), &report)?;
//! # Ok(())
//! # }
//! ```

pub mod allowlist;
pub mod report;
pub mod roster;
pub mod target;
pub mod update;

#[doc(inline)]
pub use allowlist::{TargetEntry, TargetError, TargetList};
#[doc(inline)]
pub use roster::{CharacterRecord, Roster, RosterError};
#[doc(inline)]
pub use target::{TargetKey, TargetSet};
#[doc(inline)]
pub use update::{update_elements, ElementChange, UpdateReport, DEFAULT_ELEMENT};
