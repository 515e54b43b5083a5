//! Review cycles: the admin-created container for one round of reviews.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ValidationError, WorkflowError};
use crate::model::employee::Employee;

/// Lifecycle of a review cycle. Single-admin, advances monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Setup,
    Active,
    DraftGeneration,
    ManagerReview,
    HrReview,
    Completed,
}

impl CycleStatus {
    pub fn next(&self) -> Option<CycleStatus> {
        match self {
            CycleStatus::Setup => Some(CycleStatus::Active),
            CycleStatus::Active => Some(CycleStatus::DraftGeneration),
            CycleStatus::DraftGeneration => Some(CycleStatus::ManagerReview),
            CycleStatus::ManagerReview => Some(CycleStatus::HrReview),
            CycleStatus::HrReview => Some(CycleStatus::Completed),
            CycleStatus::Completed => None,
        }
    }
}

impl std::fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CycleStatus::Setup => "setup",
            CycleStatus::Active => "active",
            CycleStatus::DraftGeneration => "draft_generation",
            CycleStatus::ManagerReview => "manager_review",
            CycleStatus::HrReview => "hr_review",
            CycleStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Tunable knobs for a cycle, set once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    /// How many peers each employee receives feedback prompts from.
    pub peer_feedback_count: u32,
    /// How far back the signal analysis window reaches.
    pub signal_analysis_period_days: u32,
    /// How many days before the due date draft generation kicks off.
    pub draft_generation_trigger_days: u32,
    /// How long managers have to edit and submit.
    pub manager_deadline_days: u32,
    /// Quality-score floor below which HR review is mandatory.
    pub hr_review_required_threshold: u32,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            peer_feedback_count: 3,
            signal_analysis_period_days: 90,
            draft_generation_trigger_days: 14,
            manager_deadline_days: 7,
            hr_review_required_threshold: 85,
        }
    }
}

impl CycleSettings {
    /// Bounds-check every knob. Ranges mirror the options the admin screen
    /// actually offers, widened to sane limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let check = |field: &'static str, value: u32, min: u32, max: u32| {
            if value < min || value > max {
                Err(ValidationError::OutOfRange { field, min, max })
            } else {
                Ok(())
            }
        };
        check("peer_feedback_count", self.peer_feedback_count, 1, 10)?;
        check(
            "signal_analysis_period_days",
            self.signal_analysis_period_days,
            7,
            365,
        )?;
        check(
            "draft_generation_trigger_days",
            self.draft_generation_trigger_days,
            1,
            60,
        )?;
        check("manager_deadline_days", self.manager_deadline_days, 1, 60)?;
        check(
            "hr_review_required_threshold",
            self.hr_review_required_threshold,
            0,
            100,
        )?;
        Ok(())
    }
}

/// One round of performance reviews across a participant roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCycle {
    pub id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    /// End of the signal analysis window.
    pub end_date: DateTime<Utc>,
    /// When finished reviews are due: start + analysis period + draft trigger.
    pub review_due_date: DateTime<Utc>,
    pub status: CycleStatus,
    pub participants: Vec<Employee>,
    pub settings: CycleSettings,
}

impl ReviewCycle {
    /// Create a cycle starting now. The timeline is derived from the
    /// settings: the analysis window runs `signal_analysis_period_days` from
    /// the start, and the review due date lands `draft_generation_trigger_days`
    /// after that window closes.
    pub fn create(
        name: &str,
        participants: Vec<Employee>,
        settings: CycleSettings,
    ) -> Result<Self, ValidationError> {
        Self::create_at(name, participants, settings, Utc::now())
    }

    /// Like [`Self::create`] with an explicit start instant, so timeline math
    /// is testable without wall-clock dependence.
    pub fn create_at(
        name: &str,
        participants: Vec<Employee>,
        settings: CycleSettings,
        start_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCycleName);
        }
        settings.validate()?;

        let end_date = start_date + Duration::days(settings.signal_analysis_period_days as i64);
        let review_due_date =
            end_date + Duration::days(settings.draft_generation_trigger_days as i64);

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            start_date,
            end_date,
            review_due_date,
            status: CycleStatus::Setup,
            participants,
            settings,
        })
    }

    /// Advance the cycle status one step forward.
    pub fn advance_status(&mut self) -> Result<CycleStatus, WorkflowError> {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                Ok(next)
            }
            None => Err(WorkflowError::StatusTerminal {
                status: self.status.to_string(),
            }),
        }
    }

    /// Advance the status until it reaches `target`. A no-op when already at
    /// or past the target, so replayed stage completions stay idempotent.
    pub fn advance_status_to(&mut self, target: CycleStatus) {
        while (self.status as u8) < (target as u8) {
            match self.status.next() {
                Some(next) => self.status = next,
                None => break,
            }
        }
    }

    pub fn participant(&self, id: Uuid) -> Option<&Employee> {
        self.participants.iter().find(|e| e.id == id)
    }

    pub fn participant_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.participants.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new("Sarah Johnson", "sarah@company.com", "mgr1", "Engineering", "Senior Developer"),
            Employee::new("Mike Chen", "mike@company.com", "mgr1", "Design", "Product Designer"),
        ]
    }

    #[test]
    fn test_due_date_is_period_plus_trigger() {
        let start = Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap();
        let cycle = ReviewCycle::create_at(
            "Q4 2024 Performance Review",
            roster(),
            CycleSettings::default(),
            start,
        )
        .unwrap();

        // 90-day analysis window, draft trigger 14 days later: due at +104.
        assert_eq!(cycle.end_date, start + Duration::days(90));
        assert_eq!(cycle.review_due_date, start + Duration::days(104));
        assert_eq!(cycle.status, CycleStatus::Setup);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = ReviewCycle::create("   ", roster(), CycleSettings::default()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyCycleName);
    }

    #[test]
    fn test_create_rejects_out_of_range_settings() {
        let settings = CycleSettings {
            peer_feedback_count: 0,
            ..CycleSettings::default()
        };
        let err = ReviewCycle::create("Q4", roster(), settings).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "peer_feedback_count",
                ..
            }
        ));
    }

    #[test]
    fn test_status_advances_forward_only() {
        let mut cycle =
            ReviewCycle::create("Q4 2024 Performance Review", roster(), CycleSettings::default())
                .unwrap();

        let expected = [
            CycleStatus::Active,
            CycleStatus::DraftGeneration,
            CycleStatus::ManagerReview,
            CycleStatus::HrReview,
            CycleStatus::Completed,
        ];
        for want in expected {
            assert_eq!(cycle.advance_status().unwrap(), want);
        }
        assert!(matches!(
            cycle.advance_status(),
            Err(WorkflowError::StatusTerminal { .. })
        ));
    }

    #[test]
    fn test_advance_status_to_never_moves_backward() {
        let mut cycle =
            ReviewCycle::create("Q4", roster(), CycleSettings::default()).unwrap();
        cycle.advance_status_to(CycleStatus::ManagerReview);
        assert_eq!(cycle.status, CycleStatus::ManagerReview);
        cycle.advance_status_to(CycleStatus::Active);
        assert_eq!(cycle.status, CycleStatus::ManagerReview);
    }

    #[test]
    fn test_participant_lookup() {
        let cycle =
            ReviewCycle::create("Q4", roster(), CycleSettings::default()).unwrap();
        let id = cycle.participants[0].id;
        assert_eq!(cycle.participant(id).unwrap().name, "Sarah Johnson");
        assert!(cycle.participant(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_cycle_serialization_round_trip() {
        let cycle =
            ReviewCycle::create("Q4 2024 Performance Review", roster(), CycleSettings::default())
                .unwrap();
        let json = serde_json::to_string(&cycle).unwrap();
        let parsed: ReviewCycle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, cycle.name);
        assert_eq!(parsed.status, CycleStatus::Setup);
        assert_eq!(parsed.participants.len(), 2);
    }
}
