//! Review drafts: the editable, versioned document produced by the mock
//! generation stage.
//!
//! Edit flow per section: `begin_edit` opens it, `save_section` commits the
//! new content and bumps the draft version by exactly one, `cancel_edit`
//! closes it untouched. Version never decreases; status only moves forward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DraftError, WorkflowError};
use crate::model::integration::Platform;

/// Lifecycle of a draft from generation through HR approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    #[default]
    Draft,
    ManagerEditing,
    Submitted,
    HrReview,
    Approved,
}

impl DraftStatus {
    pub fn next(&self) -> Option<DraftStatus> {
        match self {
            DraftStatus::Draft => Some(DraftStatus::ManagerEditing),
            DraftStatus::ManagerEditing => Some(DraftStatus::Submitted),
            DraftStatus::Submitted => Some(DraftStatus::HrReview),
            DraftStatus::HrReview => Some(DraftStatus::Approved),
            DraftStatus::Approved => None,
        }
    }

    /// Once submitted, the draft content is frozen.
    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            DraftStatus::Submitted | DraftStatus::HrReview | DraftStatus::Approved
        )
    }
}

impl std::fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DraftStatus::Draft => "draft",
            DraftStatus::ManagerEditing => "manager_editing",
            DraftStatus::Submitted => "submitted",
            DraftStatus::HrReview => "hr_review",
            DraftStatus::Approved => "approved",
        };
        f.write_str(label)
    }
}

/// Where a slice of the draft's evidence came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub platform: Platform,
    pub data_type: String,
    pub count: u32,
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
}

/// One editable block of the review document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<String>,
}

impl ReviewSection {
    pub fn new(id: &str, title: &str, content: &str, sources: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            editable: false,
            last_edited_by: None,
        }
    }
}

/// The generated review document for one employee in one cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub cycle_id: Uuid,
    pub sections: Vec<ReviewSection>,
    pub overall_rating: String,
    pub sources: Vec<DataSource>,
    /// Mock confidence, 0-100.
    pub ai_confidence: u32,
    /// Starts at 1, +1 per saved section edit. Never decreases.
    pub version: u32,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub last_edited_at: DateTime<Utc>,
}

impl ReviewDraft {
    pub fn new(
        employee_id: Uuid,
        cycle_id: Uuid,
        sections: Vec<ReviewSection>,
        overall_rating: &str,
        sources: Vec<DataSource>,
        ai_confidence: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            employee_id,
            cycle_id,
            sections,
            overall_rating: overall_rating.to_string(),
            sources,
            ai_confidence: ai_confidence.min(100),
            version: 1,
            status: DraftStatus::Draft,
            created_at: now,
            last_edited_at: now,
        }
    }

    pub fn section(&self, id: &str) -> Option<&ReviewSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut ReviewSection, DraftError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DraftError::SectionNotFound { id: id.to_string() })
    }

    /// Open a section for editing. Rejected once the draft is submitted.
    pub fn begin_edit(&mut self, section_id: &str) -> Result<(), DraftError> {
        if self.status.is_locked() {
            return Err(DraftError::AlreadySubmitted);
        }
        self.section_mut(section_id)?.editable = true;
        if self.status == DraftStatus::Draft {
            self.status = DraftStatus::ManagerEditing;
        }
        Ok(())
    }

    /// Commit new content for a section opened with [`Self::begin_edit`].
    /// Bumps the draft version by exactly one and leaves every other section
    /// untouched.
    pub fn save_section(
        &mut self,
        section_id: &str,
        content: &str,
        editor: &str,
    ) -> Result<(), DraftError> {
        if self.status.is_locked() {
            return Err(DraftError::AlreadySubmitted);
        }
        let section = self.section_mut(section_id)?;
        if !section.editable {
            return Err(DraftError::NotEditing {
                id: section_id.to_string(),
            });
        }
        section.content = content.to_string();
        section.editable = false;
        section.last_edited_by = Some(editor.to_string());
        self.version += 1;
        self.last_edited_at = Utc::now();
        Ok(())
    }

    /// Close an open section without committing. No version bump.
    pub fn cancel_edit(&mut self, section_id: &str) -> Result<(), DraftError> {
        self.section_mut(section_id)?.editable = false;
        Ok(())
    }

    pub fn set_overall_rating(&mut self, rating: &str) -> Result<(), DraftError> {
        if self.status.is_locked() {
            return Err(DraftError::AlreadySubmitted);
        }
        self.overall_rating = rating.to_string();
        Ok(())
    }

    /// Advance the draft status one step forward.
    pub fn advance_status(&mut self) -> Result<DraftStatus, WorkflowError> {
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

    /// Submit to HR: closes any open sections and locks the content.
    pub fn submit(&mut self) -> Result<(), WorkflowError> {
        for section in &mut self.sections {
            section.editable = false;
        }
        while !self.status.is_locked() {
            self.advance_status()?;
        }
        Ok(())
    }

    /// Presentational quality score: confidence penalized 2 points per
    /// re-edit, floored at 70. Pure function of existing fields.
    pub fn quality_score(&self) -> u32 {
        self.ai_confidence
            .saturating_sub(2 * (self.version - 1))
            .max(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn draft() -> ReviewDraft {
        fixtures::generated_draft(Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn test_new_draft_starts_at_version_one() {
        let d = draft();
        assert_eq!(d.version, 1);
        assert_eq!(d.status, DraftStatus::Draft);
        assert_eq!(d.ai_confidence, 94);
        assert_eq!(d.sections.len(), 3);
    }

    #[test]
    fn test_edit_save_bumps_version_once() {
        let mut d = draft();
        d.begin_edit("achievements").unwrap();
        assert!(d.section("achievements").unwrap().editable);
        assert_eq!(d.status, DraftStatus::ManagerEditing);

        d.save_section("achievements", "Rewrote the dashboard.", "mgr1")
            .unwrap();

        let section = d.section("achievements").unwrap();
        assert_eq!(section.content, "Rewrote the dashboard.");
        assert!(!section.editable);
        assert_eq!(section.last_edited_by.as_deref(), Some("mgr1"));
        assert_eq!(d.version, 2);
    }

    #[test]
    fn test_save_leaves_other_sections_untouched() {
        let mut d = draft();
        let collab_before = d.section("collaboration").unwrap().content.clone();
        let growth_before = d.section("growth").unwrap().content.clone();

        d.begin_edit("achievements").unwrap();
        d.save_section("achievements", "Edited.", "mgr1").unwrap();

        assert_eq!(d.section("collaboration").unwrap().content, collab_before);
        assert_eq!(d.section("growth").unwrap().content, growth_before);
        assert!(!d.section("collaboration").unwrap().editable);
    }

    #[test]
    fn test_save_without_begin_edit_fails() {
        let mut d = draft();
        let err = d.save_section("growth", "x", "mgr1").unwrap_err();
        assert_eq!(err, DraftError::NotEditing { id: "growth".into() });
        assert_eq!(d.version, 1);
    }

    #[test]
    fn test_cancel_edit_does_not_bump_version() {
        let mut d = draft();
        let before = d.section("growth").unwrap().content.clone();
        d.begin_edit("growth").unwrap();
        d.cancel_edit("growth").unwrap();
        assert_eq!(d.section("growth").unwrap().content, before);
        assert!(!d.section("growth").unwrap().editable);
        assert_eq!(d.version, 1);
    }

    #[test]
    fn test_unknown_section() {
        let mut d = draft();
        assert_eq!(
            d.begin_edit("nope").unwrap_err(),
            DraftError::SectionNotFound { id: "nope".into() }
        );
    }

    #[test]
    fn test_submit_locks_edits() {
        let mut d = draft();
        d.begin_edit("achievements").unwrap();
        d.submit().unwrap();
        assert_eq!(d.status, DraftStatus::Submitted);
        assert!(!d.section("achievements").unwrap().editable);
        assert_eq!(d.begin_edit("growth").unwrap_err(), DraftError::AlreadySubmitted);
        assert_eq!(
            d.set_overall_rating("Outstanding").unwrap_err(),
            DraftError::AlreadySubmitted
        );
    }

    #[test]
    fn test_status_forward_only_to_approved() {
        let mut d = draft();
        d.submit().unwrap();
        assert_eq!(d.advance_status().unwrap(), DraftStatus::HrReview);
        assert_eq!(d.advance_status().unwrap(), DraftStatus::Approved);
        assert!(d.advance_status().is_err());
    }

    #[test]
    fn test_quality_score_penalizes_versions() {
        let mut d = draft();
        assert_eq!(d.quality_score(), 94);

        d.begin_edit("achievements").unwrap();
        d.save_section("achievements", "v2", "mgr1").unwrap();
        assert_eq!(d.quality_score(), 92);

        // Heavy re-editing bottoms out at the floor.
        d.version = 40;
        assert_eq!(d.quality_score(), 70);
    }

    #[test]
    fn test_version_never_decreases_across_edits() {
        let mut d = draft();
        for i in 0..5 {
            let prev = d.version;
            d.begin_edit("growth").unwrap();
            d.save_section("growth", &format!("rev {i}"), "mgr1").unwrap();
            assert_eq!(d.version, prev + 1);
        }
        assert_eq!(d.version, 6);
    }
}
