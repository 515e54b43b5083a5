//! HR oversight metrics. Presentational derivations of fixture data.

use serde::{Deserialize, Serialize};

/// The metrics block on the HR dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrMetrics {
    /// Percent of reviews submitted on time.
    pub submission_rate: u32,
    /// Average minutes a manager spends per review.
    pub average_completion_minutes: u32,
    /// Percent of employees with full peer-feedback coverage.
    pub peer_feedback_coverage: u32,
    /// Review NPS, 0-10.
    pub nps_score: f32,
    /// Mock engineering-health numbers.
    pub api_uptime: f32,
    pub ai_accuracy: u32,
    pub generation_latency_secs: f32,
}
