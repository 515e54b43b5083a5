//! Typed error hierarchy for the ReviewGenie workflow engine.
//!
//! Three top-level enums cover the three subsystems:
//! - `ValidationError` — user-recoverable form/input failures
//! - `DraftError` — review-draft editing failures
//! - `WorkflowError` — broken workflow invariants
//!
//! Unknown workflow actions are deliberately *not* errors: the controller
//! logs them and leaves the stage unchanged.

use thiserror::Error;

/// Errors from local form validation. All of these block a transition until
/// the user re-enters valid input; none are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a date for the meeting")]
    MissingMeetingDate,

    #[error("Please select a time for the meeting")]
    MissingMeetingTime,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Review cycle name cannot be empty")]
    EmptyCycleName,

    #[error("Work signal content cannot be empty")]
    EmptySignalContent,

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

/// Errors from editing a review draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Unknown review section '{id}'")]
    SectionNotFound { id: String },

    #[error("Section '{id}' is not in edit mode")]
    NotEditing { id: String },

    #[error("Draft has been submitted and can no longer be edited")]
    AlreadySubmitted,
}

/// Errors from the workflow controller and status machinery.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Status '{status}' is terminal and cannot advance")]
    StatusTerminal { status: String },

    #[error("No employee selected for the current stage")]
    NoEmployeeSelected,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
