//! Employees and their per-cycle review status.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::WorkflowError;
use crate::model::integration::ToolIntegration;

/// Where an employee sits in the review pipeline. Advances monotonically;
/// there is no defined backward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    SignalsCollected,
    PeerFeedbackDone,
    DraftReady,
    ManagerEditing,
    Submitted,
    HrApproved,
}

impl ReviewStatus {
    /// The next status in the pipeline, or `None` at the terminal state.
    pub fn next(&self) -> Option<ReviewStatus> {
        match self {
            ReviewStatus::Pending => Some(ReviewStatus::SignalsCollected),
            ReviewStatus::SignalsCollected => Some(ReviewStatus::PeerFeedbackDone),
            ReviewStatus::PeerFeedbackDone => Some(ReviewStatus::DraftReady),
            ReviewStatus::DraftReady => Some(ReviewStatus::ManagerEditing),
            ReviewStatus::ManagerEditing => Some(ReviewStatus::Submitted),
            ReviewStatus::Submitted => Some(ReviewStatus::HrApproved),
            ReviewStatus::HrApproved => None,
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::SignalsCollected => "signals_collected",
            ReviewStatus::PeerFeedbackDone => "peer_feedback_done",
            ReviewStatus::DraftReady => "draft_ready",
            ReviewStatus::ManagerEditing => "manager_editing",
            ReviewStatus::Submitted => "submitted",
            ReviewStatus::HrApproved => "hr_approved",
        };
        f.write_str(label)
    }
}

/// A review participant. `manager_id` is a back-reference, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub manager_id: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub integrations: Vec<ToolIntegration>,
    #[serde(default)]
    pub review_status: ReviewStatus,
}

impl Employee {
    pub fn new(name: &str, email: &str, manager_id: &str, department: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            manager_id: manager_id.to_string(),
            department: department.to_string(),
            role: role.to_string(),
            integrations: Vec::new(),
            review_status: ReviewStatus::default(),
        }
    }

    /// Initials rendered in the avatar bubble, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Advance the review status one step forward.
    pub fn advance_status(&mut self) -> Result<ReviewStatus, WorkflowError> {
        match self.review_status.next() {
            Some(next) => {
                self.review_status = next;
                Ok(next)
            }
            None => Err(WorkflowError::StatusTerminal {
                status: self.review_status.to_string(),
            }),
        }
    }

    /// Advance the review status until it reaches `target`. A no-op when the
    /// status is already at or past the target, so replayed stage completions
    /// stay idempotent.
    pub fn advance_status_to(&mut self, target: ReviewStatus) {
        while (self.review_status as u8) < (target as u8) {
            match self.review_status.next() {
                Some(next) => self.review_status = next,
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain_is_forward_only() {
        let mut status = ReviewStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen.len(), 7);
        assert_eq!(status, ReviewStatus::HrApproved);
        assert!(status.next().is_none());
    }

    #[test]
    fn test_advance_status_terminal_errors() {
        let mut emp = Employee::new("Sarah Johnson", "sarah@company.com", "mgr1", "Engineering", "Senior Developer");
        emp.review_status = ReviewStatus::HrApproved;
        assert!(matches!(
            emp.advance_status(),
            Err(WorkflowError::StatusTerminal { .. })
        ));
    }

    #[test]
    fn test_advance_status_to_is_idempotent() {
        let mut emp = Employee::new("Mike Chen", "mike@company.com", "mgr1", "Design", "Product Designer");
        emp.advance_status_to(ReviewStatus::DraftReady);
        assert_eq!(emp.review_status, ReviewStatus::DraftReady);

        // Already past: advancing "to" an earlier status never moves backward.
        emp.advance_status_to(ReviewStatus::SignalsCollected);
        assert_eq!(emp.review_status, ReviewStatus::DraftReady);
    }

    #[test]
    fn test_initials() {
        let emp = Employee::new("Alex Rivera", "alex@company.com", "mgr2", "Product", "Product Manager");
        assert_eq!(emp.initials(), "AR");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ReviewStatus::PeerFeedbackDone).unwrap();
        assert_eq!(json, "\"peer_feedback_done\"");
    }
}
