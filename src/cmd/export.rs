//! `export` command: render the demo draft to markdown.

use std::path::Path;

use anyhow::Result;
use console::style;

use reviewgenie::fixtures;
use reviewgenie::model::{CycleSettings, ReviewCycle};
use reviewgenie::report;

pub fn cmd_export(output: &Path) -> Result<()> {
    let employee = fixtures::employees().remove(0);
    let cycle = ReviewCycle::create(
        "Q4 2024 Performance Review",
        fixtures::employees(),
        CycleSettings::default(),
    )?;
    let draft = fixtures::generated_draft_for(&employee, cycle.id);

    report::export_markdown(&draft, &employee, &cycle, output)?;
    println!(
        "{} Exported review for {} to {}",
        style("Done.").green().bold(),
        employee.name,
        output.display()
    );
    Ok(())
}
