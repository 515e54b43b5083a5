//! Meeting invitation form.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct SchedulingView;

impl StageView for SchedulingView {
    fn stage(&self) -> Stage {
        Stage::Scheduling
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::Scheduling.title());
        let form = &store.scheduling;

        if form.sent {
            out.narration
                .push("Invitation sent. The meeting is on the calendar.".to_string());
            out.actions
                .push(ActionButton::new("Complete Review Process", Action::Complete));
            out.back = Some(ActionButton::secondary("Back", Action::Back));
            return out;
        }

        out.narration
            .push("Schedule the review meeting with the employee.".to_string());
        out.narration.push(format!(
            "Date: {}",
            form.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        ));
        out.narration.push(format!(
            "Time: {}",
            form.time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        ));
        out.narration.push(form.message.clone());

        out.actions.push(ActionButton::new(
            "Send Meeting Invitation",
            Action::SendInvitation,
        ));
        out.back = Some(ActionButton::secondary("Back", Action::Back));
        out
    }
}
