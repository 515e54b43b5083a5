//! Manager-facing draft review and editing.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct DraftReviewView;

impl StageView for DraftReviewView {
    fn stage(&self) -> Stage {
        Stage::DraftReview
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::DraftReview.title());
        let Some(draft) = &store.draft else {
            out.narration
                .push("No draft yet. Generate one from the collected signals first.".to_string());
            out.back = Some(ActionButton::secondary("Back", Action::Back));
            return out;
        };

        out.narration.push(format!(
            "AI-generated review (confidence {}%, version {}). Rating: {}.",
            draft.ai_confidence, draft.version, draft.overall_rating
        ));
        for section in &draft.sections {
            out.narration.push(format!("## {}", section.title));
            out.narration.push(section.content.clone());
            if let Some(editor) = &section.last_edited_by {
                out.narration.push(format!("  (edited by {editor})"));
            }
        }
        out.narration.push(format!(
            "Sources: {} signals across {} platforms.",
            draft.sources.iter().map(|s| s.count).sum::<u32>(),
            draft.sources.len()
        ));

        out.actions
            .push(ActionButton::outline("Edit a Section", Action::EditSection));
        out.actions
            .push(ActionButton::new("Submit to HR", Action::SubmitReview));
        out.back = Some(ActionButton::secondary("Back", Action::Back));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_without_draft_renders_placeholder() {
        let out = DraftReviewView.render(&WorkflowStore::new());
        assert!(out.actions.is_empty());
        assert!(out.back.is_some());
    }

    #[test]
    fn test_renders_every_section() {
        let mut store = WorkflowStore::new();
        let id = store.roster[0].id;
        store.select_employee(id);
        let cycle_id = store.ensure_cycle().id;
        let employee = store.employee(id).unwrap().clone();
        store.draft = Some(fixtures::generated_draft_for(&employee, cycle_id));

        let out = DraftReviewView.render(&store);
        for title in [
            "Key Achievements",
            "Collaboration & Communication",
            "Growth Areas & Development",
        ] {
            assert!(out.narration.iter().any(|l| l.contains(title)), "{title} missing");
        }
        assert!(out.narration.iter().any(|l| l.contains("confidence 94%")));
        let labels: Vec<&str> = out.actions.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Edit a Section", "Submit to HR"]);
    }
}
