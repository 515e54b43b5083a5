//! Wrap-up screen after the cycle completes.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct FinalizeView;

impl StageView for FinalizeView {
    fn stage(&self) -> Stage {
        Stage::Finalize
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::Finalize.title());
        let name = store
            .selected()
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "the employee".to_string());
        out.narration.push(format!(
            "The performance review for {name} is complete and approved."
        ));
        if let Some(draft) = &store.draft {
            out.narration.push(format!(
                "Final rating: {} (version {}).",
                draft.overall_rating, draft.version
            ));
        }
        out.actions
            .push(ActionButton::outline("Export Review", Action::ExportReview));
        out.actions
            .push(ActionButton::new("Start New Review", Action::NewReview));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_export_and_restart() {
        let out = FinalizeView.render(&WorkflowStore::new());
        let labels: Vec<_> = out.actions.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Export Review", "Start New Review"]);
    }
}
