//! Element update command
//!
//! Loads the allow-list and the characters file, assigns the element to every
//! listed character, rewrites the file and prints the report.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use roster::{report, Roster, TargetList, UpdateReport, DEFAULT_ELEMENT};

use crate::cli::Cli;
use crate::config::Config;

/// Characters file used when neither the CLI nor the config names one
pub const DEFAULT_DATA_PATH: &str = "data/characters.json";

/// Settings for one run, after merging CLI arguments over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub data: PathBuf,
    pub targets: Option<PathBuf>,
    pub element: Option<String>,
    pub dry_run: bool,
}

impl UpdateOptions {
    /// CLI arguments take precedence over the config file
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        UpdateOptions {
            data: cli
                .data
                .clone()
                .or_else(|| config.data_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            targets: cli.targets.clone().or_else(|| config.targets_path.clone()),
            element: cli.element.clone().or_else(|| config.element.clone()),
            dry_run: cli.dry_run,
        }
    }
}

fn load_targets(options: &UpdateOptions) -> Result<TargetList> {
    match &options.targets {
        Some(path) => TargetList::load(path)
            .with_context(|| format!("Failed to load allow-list {}", path.display())),
        None => TargetList::embedded().context("Failed to parse built-in allow-list"),
    }
}

/// Handle the update run, writing the report to `out`
pub fn handle<W: Write>(options: &UpdateOptions, out: &mut W) -> Result<UpdateReport> {
    let list = load_targets(options)?;
    let element = options
        .element
        .as_deref()
        .or_else(|| list.element())
        .unwrap_or(DEFAULT_ELEMENT)
        .to_string();
    let targets = list.to_set();
    tracing::info!(targets = targets.len(), element = %element, "prepared allow-list");

    let mut characters = Roster::load(&options.data)
        .with_context(|| format!("Failed to load {}", options.data.display()))?;

    let result = roster::update_elements(&mut characters, &targets, &element);

    for change in &result.changes {
        report::write_change(out, change).context("Failed to write report")?;
    }

    if options.dry_run {
        tracing::info!(path = %options.data.display(), "dry run, not writing");
    } else {
        characters
            .save(&options.data)
            .with_context(|| format!("Failed to write {}", options.data.display()))?;
    }

    report::write_summary(out, &result).context("Failed to write report")?;

    Ok(result)
}
