//! Console report for an update pass

use std::fmt;
use std::io::{self, Write};

use crate::update::{ElementChange, UpdateReport};

/// Width of the `=` rule around the summary
pub const SEPARATOR_WIDTH: usize = 60;

/// Missing targets listed before the rest are folded into a count
pub const MAX_LISTED_MISSING: usize = 10;

impl fmt::Display for ElementChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ Updated: {} ({} → {})",
            self.key,
            self.old.as_deref().unwrap_or("N/A"),
            self.new
        )
    }
}

/// Write one line for an assignment
pub fn write_change<W: Write>(out: &mut W, change: &ElementChange) -> io::Result<()> {
    writeln!(out, "{}", change)
}

/// Write the closing summary: the count and any missing targets
pub fn write_summary<W: Write>(out: &mut W, report: &UpdateReport) -> io::Result<()> {
    let rule = "=".repeat(SEPARATOR_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Updated {} characters to element '{}'",
        report.updated_count(),
        report.element
    )?;

    if !report.not_found.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Warning: {} characters not found:",
            report.not_found.len()
        )?;
        for key in report.not_found.iter().take(MAX_LISTED_MISSING) {
            writeln!(out, "  - {}", key)?;
        }
        if report.not_found.len() > MAX_LISTED_MISSING {
            writeln!(
                out,
                "  ... and {} more",
                report.not_found.len() - MAX_LISTED_MISSING
            )?;
        }
    }

    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Write every change line followed by the summary
pub fn write_report<W: Write>(out: &mut W, report: &UpdateReport) -> io::Result<()> {
    for change in &report.changes {
        write_change(out, change)?;
    }
    write_summary(out, report)
}
