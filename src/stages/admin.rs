//! Admin dashboard: review cycle creation.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::model::CycleSettings;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct AdminSetupView;

impl StageView for AdminSetupView {
    fn stage(&self) -> Stage {
        Stage::AdminSetup
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::AdminSetup.title());
        out.narration
            .push("Set up a new review cycle for your team.".to_string());

        let settings = store
            .cycle
            .as_ref()
            .map(|c| c.settings.clone())
            .unwrap_or_else(CycleSettings::default);
        out.narration.push(format!(
            "Analysis period: {} days, trigger: {} days before due date.",
            settings.signal_analysis_period_days, settings.draft_generation_trigger_days
        ));
        out.narration.push(format!(
            "Peer reviewers per employee: {}. HR review required below quality score {}.",
            settings.peer_feedback_count, settings.hr_review_required_threshold
        ));

        if let Some(cycle) = &store.cycle {
            out.narration.push(format!(
                "Current cycle: {} ({} -> review due {}).",
                cycle.name,
                cycle.start_date.format("%Y-%m-%d"),
                cycle.review_due_date.format("%Y-%m-%d"),
            ));
        }

        out.actions
            .push(ActionButton::new("Create Review Cycle", Action::CreateCycle));
        out
    }
}
