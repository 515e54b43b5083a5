//! Markdown export of a finished review draft.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Employee, ReviewCycle, ReviewDraft};

/// Render the draft as a standalone markdown document.
pub fn render_markdown(draft: &ReviewDraft, employee: &Employee, cycle: &ReviewCycle) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# Performance Review: {}\n\n", employee.name));
    doc.push_str(&format!(
        "- **Role:** {} ({})\n",
        employee.role, employee.department
    ));
    doc.push_str(&format!("- **Cycle:** {}\n", cycle.name));
    doc.push_str(&format!(
        "- **Review due:** {}\n",
        cycle.review_due_date.format("%Y-%m-%d")
    ));
    doc.push_str(&format!("- **Overall rating:** {}\n", draft.overall_rating));
    doc.push_str(&format!(
        "- **Status:** {} (version {})\n\n",
        draft.status, draft.version
    ));

    for section in &draft.sections {
        doc.push_str(&format!("## {}\n\n", section.title));
        doc.push_str(&section.content);
        doc.push_str("\n\n");
        if let Some(editor) = &section.last_edited_by {
            doc.push_str(&format!("_Last edited by {editor}._\n\n"));
        }
    }

    doc.push_str("---\n\n");
    let total: u32 = draft.sources.iter().map(|s| s.count).sum();
    doc.push_str(&format!(
        "Generated from {} work signals across {} sources ({}% AI confidence).\n",
        total,
        draft.sources.len(),
        draft.ai_confidence
    ));
    for source in &draft.sources {
        doc.push_str(&format!(
            "- {}: {} {}\n",
            source.platform.display_name(),
            source.count,
            source.data_type
        ));
    }
    doc
}

/// Write the rendered document to disk.
pub fn export_markdown(
    draft: &ReviewDraft,
    employee: &Employee,
    cycle: &ReviewCycle,
    path: &Path,
) -> Result<()> {
    let doc = render_markdown(draft, employee, cycle);
    std::fs::write(path, doc)
        .with_context(|| format!("Failed to write review export: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::{CycleSettings, ReviewCycle};

    fn sample() -> (ReviewDraft, Employee, ReviewCycle) {
        let employee = fixtures::employees().remove(0);
        let cycle = ReviewCycle::create(
            "Q4 2024 Performance Review",
            fixtures::employees(),
            CycleSettings::default(),
        )
        .unwrap();
        let draft = fixtures::generated_draft_for(&employee, cycle.id);
        (draft, employee, cycle)
    }

    #[test]
    fn test_markdown_contains_header_sections_and_footer() {
        let (draft, employee, cycle) = sample();
        let doc = render_markdown(&draft, &employee, &cycle);
        assert!(doc.starts_with("# Performance Review: Sarah Johnson"));
        assert!(doc.contains("## Key Achievements"));
        assert!(doc.contains("## Growth Areas & Development"));
        assert!(doc.contains("238 work signals"));
        assert!(doc.contains("94% AI confidence"));
    }

    #[test]
    fn test_export_writes_file() {
        let (draft, employee, cycle) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.md");
        export_markdown(&draft, &employee, &cycle, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Sarah Johnson"));
    }
}
