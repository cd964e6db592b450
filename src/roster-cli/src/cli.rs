//! CLI argument definitions for roster

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "roster")]
#[command(about = "Assign an element to allow-listed characters", long_about = None)]
pub struct Cli {
    /// Path to the characters JSON file (uses configured default if not provided)
    #[arg(short, long, env = "ROSTER_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Allow-list file (.toml, .yaml or .json); the built-in list is used if not provided
    #[arg(short, long, env = "ROSTER_TARGETS", value_name = "PATH")]
    pub targets: Option<PathBuf>,

    /// Element to assign (defaults to the allow-list's element, then "heart")
    #[arg(short, long)]
    pub element: Option<String>,

    /// Report what would change without writing the characters file
    #[arg(long)]
    pub dry_run: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
