//! The single state container behind the workflow.
//!
//! Every stage view reads from here and nowhere else; the controller is the
//! only writer during transitions. This replaces the original prototype's
//! scattered per-view state.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::chat::MessageLog;
use crate::errors::ValidationError;
use crate::fixtures;
use crate::model::{
    Employee, PeerFeedback, Platform, ReviewCycle, ReviewDraft, ToolIntegration, WorkSignal,
};

/// Form state for the meeting-scheduling screen. Submitting with a missing
/// date or time blocks with a validation error; both present flips `sent`.
#[derive(Debug, Default)]
pub struct SchedulingForm {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub message: String,
    pub sent: bool,
}

impl SchedulingForm {
    pub fn for_employee(employee_name: &str) -> Self {
        Self {
            date: None,
            time: None,
            message: fixtures::invitation_message(employee_name),
            sent: false,
        }
    }

    pub fn set_date(&mut self, raw: &str) -> Result<(), ValidationError> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?;
        self.date = Some(date);
        Ok(())
    }

    pub fn set_time(&mut self, raw: &str) -> Result<(), ValidationError> {
        let time = NaiveTime::parse_from_str(raw, "%H:%M")
            .map_err(|_| ValidationError::InvalidTime(raw.to_string()))?;
        self.time = Some(time);
        Ok(())
    }

    /// Validate and mark the invitation sent.
    pub fn send(&mut self) -> Result<(), ValidationError> {
        if self.date.is_none() {
            return Err(ValidationError::MissingMeetingDate);
        }
        if self.time.is_none() {
            return Err(ValidationError::MissingMeetingTime);
        }
        self.sent = true;
        Ok(())
    }
}

/// Staged input for a manager section edit, filled by the driver before the
/// edit action is dispatched (same shape as the scheduling form). An empty
/// `content` discards the edit instead of saving it; an optional `rating`
/// replaces the overall rating in the same pass.
#[derive(Debug, Default)]
pub struct SectionEditForm {
    pub section_id: Option<String>,
    pub content: Option<String>,
    pub rating: Option<String>,
}

impl SectionEditForm {
    pub fn stage(&mut self, section_id: &str, content: &str) {
        self.section_id = Some(section_id.to_string());
        self.content = Some(content.to_string());
    }
}

/// All mutable state for one assistant session.
#[derive(Debug)]
pub struct WorkflowStore {
    pub cycle: Option<ReviewCycle>,
    /// The employee roster. Cycle participants are snapshotted from here.
    pub roster: Vec<Employee>,
    /// One entry per platform, all starting disconnected.
    pub integrations: Vec<ToolIntegration>,
    pub selected_employee: Option<Uuid>,
    pub signals: Vec<WorkSignal>,
    pub feedback: Vec<PeerFeedback>,
    pub draft: Option<ReviewDraft>,
    pub section_edit: SectionEditForm,
    pub scheduling: SchedulingForm,
    pub log: MessageLog,
    /// Last toast-style notice produced by a transition effect.
    pub last_notice: Option<String>,
    /// Last validation message that blocked a transition.
    pub last_error: Option<String>,
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self {
            cycle: None,
            roster: fixtures::employees(),
            integrations: Platform::ALL.iter().map(|p| ToolIntegration::new(*p)).collect(),
            selected_employee: None,
            signals: Vec::new(),
            feedback: Vec::new(),
            draft: None,
            section_edit: SectionEditForm::default(),
            scheduling: SchedulingForm::default(),
            log: MessageLog::new(),
            last_notice: None,
            last_error: None,
        }
    }

    pub fn integration(&self, platform: Platform) -> &ToolIntegration {
        self.integrations
            .iter()
            .find(|i| i.platform == platform)
            .expect("store holds one integration per platform")
    }

    pub fn integration_mut(&mut self, platform: Platform) -> &mut ToolIntegration {
        self.integrations
            .iter_mut()
            .find(|i| i.platform == platform)
            .expect("store holds one integration per platform")
    }

    pub fn connected_count(&self) -> usize {
        self.integrations.iter().filter(|i| i.is_connected()).count()
    }

    /// Start the mock connect for a platform. Returns `false` when already
    /// connected or connecting (idempotent).
    pub fn begin_connect(&mut self, platform: Platform) -> bool {
        self.integration_mut(platform).begin_connect()
    }

    /// Finish the mock connect after the simulated handshake delay.
    pub fn finish_connect(&mut self, platform: Platform) -> bool {
        let done = self.integration_mut(platform).finish_connect();
        if done {
            self.last_notice = Some(format!(
                "{} Connected! ReviewGenie can now gather performance signals.",
                platform.display_name()
            ));
        }
        done
    }

    pub fn employee(&self, id: Uuid) -> Option<&Employee> {
        self.roster.iter().find(|e| e.id == id)
    }

    /// Select the employee under review and reset the scheduling form for
    /// them. Returns `false` for an unknown id.
    pub fn select_employee(&mut self, id: Uuid) -> bool {
        let Some(name) = self.employee(id).map(|e| e.name.clone()) else {
            return false;
        };
        self.scheduling = SchedulingForm::for_employee(&name);
        self.selected_employee = Some(id);
        true
    }

    pub fn selected(&self) -> Option<&Employee> {
        self.selected_employee.and_then(|id| self.employee(id))
    }

    /// Advance the selected employee's review status, mirroring the change
    /// into the cycle's participant snapshot.
    pub fn advance_selected_to(&mut self, target: crate::model::ReviewStatus) {
        let Some(id) = self.selected_employee else {
            return;
        };
        if let Some(emp) = self.roster.iter_mut().find(|e| e.id == id) {
            emp.advance_status_to(target);
        }
        if let Some(cycle) = &mut self.cycle
            && let Some(emp) = cycle.participant_mut(id)
        {
            emp.advance_status_to(target);
        }
    }

    /// Ensure a cycle exists, creating the default demo cycle when the chat
    /// flow skipped admin setup.
    pub fn ensure_cycle(&mut self) -> &ReviewCycle {
        if self.cycle.is_none() {
            let cycle = ReviewCycle::create(
                "Q4 2024 Performance Review",
                self.roster.clone(),
                Default::default(),
            )
            .expect("default cycle settings are valid");
            self.cycle = Some(cycle);
        }
        self.cycle.as_ref().expect("cycle just ensured")
    }

    pub fn record_signals(&mut self, signals: Vec<WorkSignal>) {
        self.signals = signals;
    }

    pub fn record_feedback(&mut self, feedback: Vec<PeerFeedback>) {
        self.feedback = feedback;
    }

    /// Clear per-review state so the assistant can start another review.
    /// Connected integrations and the cycle survive.
    pub fn reset_review(&mut self) {
        self.selected_employee = None;
        self.signals.clear();
        self.feedback.clear();
        self.draft = None;
        self.section_edit = SectionEditForm::default();
        self.scheduling = SchedulingForm::default();
        self.last_notice = None;
        self.last_error = None;
    }
}
