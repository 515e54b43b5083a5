//! Roster picker.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct EmployeeSelectView;

impl StageView for EmployeeSelectView {
    fn stage(&self) -> Stage {
        Stage::EmployeeSelect
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::EmployeeSelect.title());
        out.narration
            .push("Who would you like to create a performance review for?".to_string());
        for employee in &store.roster {
            out.narration.push(format!(
                "  {} - {} ({}, {})",
                employee.initials(),
                employee.name,
                employee.role,
                employee.department
            ));
            out.actions.push(ActionButton::outline(
                employee.name.clone(),
                Action::ChooseEmployee(employee.id),
            ));
        }
        out
    }
}
