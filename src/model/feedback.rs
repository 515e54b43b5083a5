//! Peer feedback collected by the mock Slack bot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentiment the mock AI assigns to a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Constructive,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Constructive => write!(f, "Constructive"),
        }
    }
}

/// One anonymized peer response, themes already extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerFeedback {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub reviewer_id: String,
    pub sentiment: Sentiment,
    pub themes: Vec<String>,
    pub content: String,
    pub anonymous: bool,
    pub submitted_at: DateTime<Utc>,
}

impl PeerFeedback {
    pub fn new(
        employee_id: Uuid,
        reviewer_id: &str,
        sentiment: Sentiment,
        themes: &[&str],
        content: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            reviewer_id: reviewer_id.to_string(),
            sentiment,
            themes: themes.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
            anonymous: true,
            submitted_at: Utc::now(),
        }
    }
}
