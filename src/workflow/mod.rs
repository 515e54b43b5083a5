//! The workflow controller: stages, actions, and the transition table.
//!
//! `WorkflowController::advance` is the single entry point for moving through
//! the review pipeline. It looks up `(stage, action)` in a static transition
//! table; defined pairs apply their store effect and move to the next stage,
//! undefined pairs are logged and leave the stage unchanged. Validation
//! failures (e.g. the scheduling form) also block in place, with the message
//! recorded on the store.

pub mod store;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::WorkflowError;
use crate::fixtures;
use crate::model::{CycleStatus, DraftStatus, Platform, ReviewStatus};

pub use store::{SchedulingForm, SectionEditForm, WorkflowStore};

/// One named step in the review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Chat assistant home screen.
    #[default]
    Welcome,
    /// Admin creates the review cycle.
    AdminSetup,
    /// Tool connection screen.
    Integrations,
    /// Pick the employee under review.
    EmployeeSelect,
    /// Mock Slack bot collects peer feedback.
    PeerFeedback,
    /// Mock ingestion pipeline over the analysis window.
    SignalIngestion,
    /// Manager reviews and edits the generated draft.
    DraftReview,
    /// HR oversight queue.
    HrReview,
    /// Meeting invitation form.
    Scheduling,
    /// Wrap-up screen; loops back to Welcome.
    Finalize,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::AdminSetup => "admin_setup",
            Stage::Integrations => "integrations",
            Stage::EmployeeSelect => "employee_select",
            Stage::PeerFeedback => "peer_feedback",
            Stage::SignalIngestion => "signal_ingestion",
            Stage::DraftReview => "draft_review",
            Stage::HrReview => "hr_review",
            Stage::Scheduling => "scheduling",
            Stage::Finalize => "finalize",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::AdminSetup => "Admin Dashboard",
            Stage::Integrations => "Connect Your Workplace Tools",
            Stage::EmployeeSelect => "Select Employee",
            Stage::PeerFeedback => "Peer Feedback Collection",
            Stage::SignalIngestion => "Work Signal Ingestion",
            Stage::DraftReview => "Review Draft",
            Stage::HrReview => "HR Oversight Dashboard",
            Stage::Scheduling => "Schedule Review Meeting",
            Stage::Finalize => "All Done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Stage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stage = match s.to_lowercase().as_str() {
            "welcome" => Stage::Welcome,
            "admin_setup" => Stage::AdminSetup,
            "integrations" => Stage::Integrations,
            "employee_select" => Stage::EmployeeSelect,
            "peer_feedback" => Stage::PeerFeedback,
            "signal_ingestion" => Stage::SignalIngestion,
            "draft_review" => Stage::DraftReview,
            "hr_review" => Stage::HrReview,
            "scheduling" => Stage::Scheduling,
            "finalize" => Stage::Finalize,
            _ => anyhow::bail!("Unknown stage '{}'", s),
        };
        Ok(stage)
    }
}

/// Every button action the workflow understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ConnectTools,
    LearnMore,
    CreateCycle,
    Connect(Platform),
    SkipIntegrations,
    SelectEmployee,
    ChooseEmployee(Uuid),
    FeedbackComplete,
    ViewSignals,
    GenerateReview,
    EditSection,
    SubmitReview,
    Approve,
    RequestEdit,
    SendInvitation,
    Complete,
    ExportReview,
    NewReview,
    Back,
}

impl Action {
    /// Stable identifier used in logs and serialized traces.
    pub fn id(&self) -> String {
        match self {
            Action::ConnectTools => "connect_tools".into(),
            Action::LearnMore => "learn_more".into(),
            Action::CreateCycle => "create_cycle".into(),
            Action::Connect(p) => format!("connect_{}", p.id()),
            Action::SkipIntegrations => "skip_integrations".into(),
            Action::SelectEmployee => "select_employee".into(),
            Action::ChooseEmployee(_) => "choose_employee".into(),
            Action::FeedbackComplete => "feedback_complete".into(),
            Action::ViewSignals => "view_signals".into(),
            Action::GenerateReview => "generate_review".into(),
            Action::EditSection => "edit_section".into(),
            Action::SubmitReview => "submit_review".into(),
            Action::Approve => "approve".into(),
            Action::RequestEdit => "request_edit".into(),
            Action::SendInvitation => "send_invitation".into(),
            Action::Complete => "complete".into(),
            Action::ExportReview => "export_review".into(),
            Action::NewReview => "new_review".into(),
            Action::Back => "back".into(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

/// The static transition table. `None` means the pair is undefined and the
/// stage stays put. Self-transitions model actions that rerun a stage.
pub fn transition(stage: Stage, action: &Action) -> Option<Stage> {
    use Action::*;
    use Stage::*;
    match (stage, action) {
        (Welcome, ConnectTools) => Some(Integrations),
        (Welcome, LearnMore) => Some(Welcome),
        (AdminSetup, CreateCycle) => Some(Integrations),
        (Integrations, Connect(_)) => Some(Integrations),
        (Integrations, ConnectTools) => Some(Integrations),
        (Integrations, SkipIntegrations) => Some(EmployeeSelect),
        (Integrations, SelectEmployee) => Some(EmployeeSelect),
        (EmployeeSelect, ChooseEmployee(_)) => Some(PeerFeedback),
        (PeerFeedback, FeedbackComplete) => Some(SignalIngestion),
        (SignalIngestion, ViewSignals) => Some(SignalIngestion),
        (SignalIngestion, GenerateReview) => Some(DraftReview),
        (DraftReview, EditSection) => Some(DraftReview),
        (DraftReview, SubmitReview) => Some(HrReview),
        (DraftReview, Back) => Some(Welcome),
        (HrReview, Approve) => Some(Scheduling),
        // HR sending the draft back to the manager is the one wired
        // backward edge; the draft's own status stays forward-only.
        (HrReview, RequestEdit) => Some(DraftReview),
        (Scheduling, SendInvitation) => Some(Scheduling),
        (Scheduling, Complete) => Some(Finalize),
        (Scheduling, Back) => Some(HrReview),
        (Finalize, ExportReview) => Some(Finalize),
        // Terminal stage loops back to the assistant home.
        (Finalize, NewReview) => Some(Welcome),
        _ => None,
    }
}

/// Owns the current stage and the shared store, and applies transitions.
pub struct WorkflowController {
    stage: Stage,
    pub store: WorkflowStore,
}

impl WorkflowController {
    /// Start at the configuration-defined initial stage.
    pub fn new(initial_stage: Stage) -> Self {
        Self {
            stage: initial_stage,
            store: WorkflowStore::new(),
        }
    }

    pub fn current_stage(&self) -> Stage {
        self.stage
    }

    /// Apply an action. Defined pairs run their effect and advance; unknown
    /// pairs are logged no-ops; validation failures block in place with the
    /// message on `store.last_error`. Always returns the (possibly unchanged)
    /// current stage.
    pub fn advance(&mut self, action: &Action) -> Stage {
        self.store.last_error = None;
        self.store.last_notice = None;

        let Some(next) = transition(self.stage, action) else {
            warn!(stage = %self.stage, action = %action, "ignoring action undefined for stage");
            return self.stage;
        };

        if !self.apply_effect(action) {
            // Effect refused the transition (validation or unknown target).
            return self.stage;
        }

        if next != self.stage {
            info!(from = %self.stage, to = %next, action = %action, "stage transition");
        }
        self.stage = next;
        self.stage
    }

    /// Run the side effect for an action. Returns `false` to block the
    /// transition while keeping the stage unchanged.
    fn apply_effect(&mut self, action: &Action) -> bool {
        match action {
            Action::CreateCycle => {
                self.store.ensure_cycle();
                let name = self.store.cycle.as_ref().map(|c| c.name.clone());
                self.store.last_notice =
                    name.map(|n| format!("Review Cycle Created! {n} has been set up successfully."));
                true
            }
            Action::Connect(platform) => {
                self.store.begin_connect(*platform);
                true
            }
            Action::ChooseEmployee(id) => {
                if !self.store.select_employee(*id) {
                    warn!(employee = %id, "ignoring selection of unknown employee");
                    return false;
                }
                self.store.ensure_cycle();
                if let Some(cycle) = &mut self.store.cycle {
                    cycle.advance_status_to(CycleStatus::Active);
                }
                true
            }
            Action::FeedbackComplete => {
                let Some(id) = self.store.selected_employee else {
                    self.store.last_error = Some(WorkflowError::NoEmployeeSelected.to_string());
                    return false;
                };
                if self.store.feedback.is_empty() {
                    self.store.record_feedback(fixtures::peer_feedback(id));
                }
                self.store.last_notice = Some(format!(
                    "Peer Feedback Collected! Received feedback from {} peers.",
                    self.store.feedback.len()
                ));
                true
            }
            Action::GenerateReview => {
                let Some(id) = self.store.selected_employee else {
                    self.store.last_error = Some(WorkflowError::NoEmployeeSelected.to_string());
                    return false;
                };
                if self.store.signals.is_empty() {
                    self.store.record_signals(fixtures::work_signals(id));
                }
                self.store.advance_selected_to(ReviewStatus::DraftReady);
                if self.store.draft.is_none() {
                    let cycle_id = self.store.ensure_cycle().id;
                    let employee = self
                        .store
                        .employee(id)
                        .expect("selected employee exists in roster")
                        .clone();
                    self.store.draft = Some(fixtures::generated_draft_for(&employee, cycle_id));
                }
                if let Some(cycle) = &mut self.store.cycle {
                    cycle.advance_status_to(CycleStatus::DraftGeneration);
                }
                true
            }
            Action::EditSection => {
                let editor = self
                    .store
                    .selected()
                    .map(|e| e.manager_id.clone())
                    .unwrap_or_else(|| "manager".to_string());
                let form = std::mem::take(&mut self.store.section_edit);
                let Some(draft) = &mut self.store.draft else {
                    warn!("section edit requested with no draft generated");
                    return false;
                };
                let Some(id) = form.section_id else {
                    self.store.last_error =
                        Some("Choose a section to edit before saving".to_string());
                    return false;
                };
                if let Some(rating) = &form.rating
                    && let Err(err) = draft.set_overall_rating(rating)
                {
                    self.store.last_error = Some(err.to_string());
                    return false;
                }
                let result = draft.begin_edit(&id).and_then(|()| match &form.content {
                    Some(content) => draft.save_section(&id, content, &editor),
                    None => draft.cancel_edit(&id),
                });
                if let Err(err) = result {
                    self.store.last_error = Some(err.to_string());
                    return false;
                }
                if form.content.is_some() {
                    let version = draft.version;
                    self.store.advance_selected_to(ReviewStatus::ManagerEditing);
                    self.store.last_notice = Some(format!(
                        "Section Updated! Review draft is now version {version}."
                    ));
                } else {
                    self.store.last_notice = Some("Edit discarded, draft unchanged.".to_string());
                }
                true
            }
            Action::SubmitReview => {
                let Some(draft) = &mut self.store.draft else {
                    warn!("submit requested with no draft generated");
                    return false;
                };
                if let Err(err) = draft.submit() {
                    self.store.last_error = Some(err.to_string());
                    return false;
                }
                self.store.advance_selected_to(ReviewStatus::Submitted);
                if let Some(cycle) = &mut self.store.cycle {
                    cycle.advance_status_to(CycleStatus::HrReview);
                }
                let name = self.store.selected().map(|e| e.name.clone()).unwrap_or_default();
                self.store.last_notice = Some(format!(
                    "Review Submitted Successfully! Performance review for {name} has been submitted to HR."
                ));
                true
            }
            Action::Approve => {
                let Some(draft) = &mut self.store.draft else {
                    warn!("approve requested with no submitted draft");
                    return false;
                };
                while draft.status != DraftStatus::Approved {
                    if draft.advance_status().is_err() {
                        break;
                    }
                }
                self.store.advance_selected_to(ReviewStatus::HrApproved);
                self.store.last_notice = Some(
                    "Review Approved. It will be shared with the employee.".to_string(),
                );
                true
            }
            Action::RequestEdit => {
                self.store.last_notice = Some(
                    "Edit Requested. Manager has been notified to make changes.".to_string(),
                );
                true
            }
            Action::SendInvitation => match self.store.scheduling.send() {
                Ok(()) => {
                    let name =
                        self.store.selected().map(|e| e.name.clone()).unwrap_or_default();
                    self.store.last_notice =
                        Some(format!("Notification Sent. Meeting invitation sent to {name}."));
                    true
                }
                Err(err) => {
                    self.store.last_error = Some(err.to_string());
                    false
                }
            },
            Action::Complete => {
                if let Some(cycle) = &mut self.store.cycle {
                    cycle.advance_status_to(CycleStatus::Completed);
                }
                true
            }
            Action::ExportReview => {
                self.store.last_notice = Some(
                    "Review Exported! Performance review has been shared with HR.".to_string(),
                );
                true
            }
            Action::NewReview => {
                self.store.reset_review();
                true
            }
            // Pure navigation, no store effect.
            Action::ConnectTools
            | Action::LearnMore
            | Action::SkipIntegrations
            | Action::SelectEmployee
            | Action::ViewSignals
            | Action::Back => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConnectionState;

    /// Every defined pair in the transition table, with its documented target.
    fn defined_pairs() -> Vec<(Stage, Action, Stage)> {
        use Action::*;
        use Stage::*;
        vec![
            (Welcome, ConnectTools, Integrations),
            (Welcome, LearnMore, Welcome),
            (AdminSetup, CreateCycle, Integrations),
            (Integrations, Connect(Platform::Slack), Integrations),
            (Integrations, ConnectTools, Integrations),
            (Integrations, SkipIntegrations, EmployeeSelect),
            (Integrations, SelectEmployee, EmployeeSelect),
            (EmployeeSelect, ChooseEmployee(Uuid::nil()), PeerFeedback),
            (PeerFeedback, FeedbackComplete, SignalIngestion),
            (SignalIngestion, ViewSignals, SignalIngestion),
            (SignalIngestion, GenerateReview, DraftReview),
            (DraftReview, EditSection, DraftReview),
            (DraftReview, SubmitReview, HrReview),
            (DraftReview, Back, Welcome),
            (HrReview, Approve, Scheduling),
            (HrReview, RequestEdit, DraftReview),
            (Scheduling, SendInvitation, Scheduling),
            (Scheduling, Complete, Finalize),
            (Scheduling, Back, HrReview),
            (Finalize, ExportReview, Finalize),
            (Finalize, NewReview, Welcome),
        ]
    }

    #[test]
    fn test_transition_table_matches_documentation() {
        for (stage, action, want) in defined_pairs() {
            assert_eq!(
                transition(stage, &action),
                Some(want),
                "({stage}, {action}) should go to {want}"
            );
        }
    }

    #[test]
    fn test_undefined_pairs_are_none() {
        // A sample of pairs missing from the table.
        let undefined = [
            (Stage::Welcome, Action::SubmitReview),
            (Stage::Welcome, Action::Back),
            (Stage::AdminSetup, Action::ConnectTools),
            (Stage::EmployeeSelect, Action::GenerateReview),
            (Stage::SignalIngestion, Action::Approve),
            (Stage::Finalize, Action::SendInvitation),
        ];
        for (stage, action) in undefined {
            assert_eq!(transition(stage, &action), None);
        }
    }

    #[test]
    fn test_advance_on_unknown_action_is_noop() {
        let mut wf = WorkflowController::new(Stage::Welcome);
        let stage = wf.advance(&Action::SubmitReview);
        assert_eq!(stage, Stage::Welcome);
        assert_eq!(wf.current_stage(), Stage::Welcome);
        assert!(wf.store.last_error.is_none());
    }

    #[test]
    fn test_full_pipeline_walk() {
        let mut wf = WorkflowController::new(Stage::AdminSetup);
        assert_eq!(wf.advance(&Action::CreateCycle), Stage::Integrations);
        assert!(wf.store.cycle.is_some());

        wf.advance(&Action::Connect(Platform::Slack));
        wf.store.finish_connect(Platform::Slack);
        assert_eq!(
            wf.store.integration(Platform::Slack).state,
            ConnectionState::Connected
        );

        assert_eq!(wf.advance(&Action::SelectEmployee), Stage::EmployeeSelect);
        let sarah = wf.store.roster[0].id;
        assert_eq!(wf.advance(&Action::ChooseEmployee(sarah)), Stage::PeerFeedback);
        assert_eq!(wf.advance(&Action::FeedbackComplete), Stage::SignalIngestion);
        assert_eq!(wf.store.feedback.len(), 3);

        assert_eq!(wf.advance(&Action::GenerateReview), Stage::DraftReview);
        assert!(wf.store.draft.is_some());
        assert_eq!(wf.store.draft.as_ref().unwrap().version, 1);
        assert_eq!(
            wf.store.employee(sarah).unwrap().review_status,
            ReviewStatus::DraftReady
        );

        // Manager revises a section before anything goes to HR.
        wf.store
            .section_edit
            .stage("achievements", "Shipped the billing migration ahead of plan.");
        assert_eq!(wf.advance(&Action::EditSection), Stage::DraftReview);
        let draft = wf.store.draft.as_ref().unwrap();
        assert_eq!(draft.version, 2);
        assert_eq!(
            draft.section("achievements").unwrap().content,
            "Shipped the billing migration ahead of plan."
        );
        assert_eq!(
            wf.store.employee(sarah).unwrap().review_status,
            ReviewStatus::ManagerEditing
        );

        assert_eq!(wf.advance(&Action::SubmitReview), Stage::HrReview);
        assert_eq!(
            wf.store.draft.as_ref().unwrap().status,
            DraftStatus::Submitted
        );

        assert_eq!(wf.advance(&Action::Approve), Stage::Scheduling);
        assert_eq!(
            wf.store.draft.as_ref().unwrap().status,
            DraftStatus::Approved
        );
        assert_eq!(
            wf.store.employee(sarah).unwrap().review_status,
            ReviewStatus::HrApproved
        );

        // Scheduling blocks until the form is complete.
        assert_eq!(wf.advance(&Action::SendInvitation), Stage::Scheduling);
        assert!(wf.store.last_error.is_some());
        assert!(!wf.store.scheduling.sent);

        wf.store.scheduling.set_date("2024-12-15").unwrap();
        wf.store.scheduling.set_time("14:30").unwrap();
        assert_eq!(wf.advance(&Action::SendInvitation), Stage::Scheduling);
        assert!(wf.store.scheduling.sent);
        assert!(wf.store.last_error.is_none());

        assert_eq!(wf.advance(&Action::Complete), Stage::Finalize);
        assert_eq!(
            wf.store.cycle.as_ref().unwrap().status,
            CycleStatus::Completed
        );

        // Terminal stage loops back to the assistant home.
        assert_eq!(wf.advance(&Action::NewReview), Stage::Welcome);
        assert!(wf.store.draft.is_none());
    }

    #[test]
    fn test_choose_unknown_employee_blocks() {
        let mut wf = WorkflowController::new(Stage::EmployeeSelect);
        let stage = wf.advance(&Action::ChooseEmployee(Uuid::new_v4()));
        assert_eq!(stage, Stage::EmployeeSelect);
        assert!(wf.store.selected_employee.is_none());
    }

    #[test]
    fn test_submit_without_draft_blocks() {
        let mut wf = WorkflowController::new(Stage::DraftReview);
        assert_eq!(wf.advance(&Action::SubmitReview), Stage::DraftReview);
    }

    fn workflow_at_draft_review() -> WorkflowController {
        let mut wf = WorkflowController::new(Stage::AdminSetup);
        wf.advance(&Action::CreateCycle);
        wf.advance(&Action::SelectEmployee);
        let id = wf.store.roster[0].id;
        wf.advance(&Action::ChooseEmployee(id));
        wf.advance(&Action::FeedbackComplete);
        wf.advance(&Action::GenerateReview);
        wf
    }

    #[test]
    fn test_edit_section_applies_staged_form() {
        let mut wf = workflow_at_draft_review();
        wf.store.section_edit.stage("growth", "Own the mentoring track next quarter.");
        wf.store.section_edit.rating = Some("Outstanding".to_string());

        assert_eq!(wf.advance(&Action::EditSection), Stage::DraftReview);
        let draft = wf.store.draft.as_ref().unwrap();
        assert_eq!(draft.version, 2);
        assert_eq!(draft.overall_rating, "Outstanding");
        assert_eq!(
            draft.section("growth").unwrap().last_edited_by.as_deref(),
            Some("mgr1")
        );
        assert!(wf.store.last_notice.as_deref().unwrap().contains("version 2"));
    }

    #[test]
    fn test_edit_section_without_staged_form_blocks() {
        let mut wf = workflow_at_draft_review();
        wf.advance(&Action::EditSection);
        assert!(wf.store.last_error.is_some());
        assert_eq!(wf.store.draft.as_ref().unwrap().version, 1);
    }

    #[test]
    fn test_edit_section_empty_content_discards() {
        let mut wf = workflow_at_draft_review();
        wf.store.section_edit.section_id = Some("achievements".to_string());

        wf.advance(&Action::EditSection);
        let draft = wf.store.draft.as_ref().unwrap();
        assert_eq!(draft.version, 1);
        assert!(wf.store.last_notice.as_deref().unwrap().contains("discarded"));
    }

    #[test]
    fn test_feedback_complete_without_selection_blocks() {
        let mut wf = WorkflowController::new(Stage::PeerFeedback);
        assert_eq!(wf.advance(&Action::FeedbackComplete), Stage::PeerFeedback);
        assert!(
            wf.store
                .last_error
                .as_deref()
                .unwrap()
                .contains("No employee selected")
        );
    }

    #[test]
    fn test_request_edit_returns_to_manager() {
        let mut wf = WorkflowController::new(Stage::AdminSetup);
        wf.advance(&Action::CreateCycle);
        wf.advance(&Action::SelectEmployee);
        let id = wf.store.roster[0].id;
        wf.advance(&Action::ChooseEmployee(id));
        wf.advance(&Action::FeedbackComplete);
        wf.advance(&Action::GenerateReview);
        wf.advance(&Action::SubmitReview);

        assert_eq!(wf.advance(&Action::RequestEdit), Stage::DraftReview);
        // The draft status never moves backward.
        assert_eq!(
            wf.store.draft.as_ref().unwrap().status,
            DraftStatus::Submitted
        );
    }

    #[test]
    fn test_learn_more_self_transition() {
        let mut wf = WorkflowController::new(Stage::Welcome);
        assert_eq!(wf.advance(&Action::LearnMore), Stage::Welcome);
    }

    #[test]
    fn test_stage_parse_round_trip() {
        for stage in [
            Stage::Welcome,
            Stage::AdminSetup,
            Stage::Integrations,
            Stage::EmployeeSelect,
            Stage::PeerFeedback,
            Stage::SignalIngestion,
            Stage::DraftReview,
            Stage::HrReview,
            Stage::Scheduling,
            Stage::Finalize,
        ] {
            let parsed: Stage = stage.label().parse().unwrap();
            assert_eq!(parsed, stage);
        }
        assert!("pitch_deck".parse::<Stage>().is_err());
    }
}
