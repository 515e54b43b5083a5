//! Work signals: immutable facts representing simulated workplace activity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::model::integration::Platform;

/// The theme a signal is tagged with during the mock normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Delivery,
    Collaboration,
    Ownership,
    Initiative,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Delivery,
        SignalKind::Collaboration,
        SignalKind::Ownership,
        SignalKind::Initiative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Delivery => "delivery",
            SignalKind::Collaboration => "collaboration",
            SignalKind::Ownership => "ownership",
            SignalKind::Initiative => "initiative",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized fact produced by the mock ingestion stage. Never mutated
/// after construction, so all fields are read through accessors only where
/// derivation is involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSignal {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub platform: Platform,
    pub kind: SignalKind,
    pub timestamp: DateTime<Utc>,
    pub content: String,
    /// Open key-value bag (e.g. lines_changed, story_points). BTreeMap keeps
    /// serialized output stable.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub normalized: bool,
}

impl WorkSignal {
    /// Validated constructor: signals with empty content are rejected at the
    /// boundary rather than carried around as half-formed facts.
    pub fn new(
        employee_id: Uuid,
        platform: Platform,
        kind: SignalKind,
        timestamp: DateTime<Utc>,
        content: &str,
    ) -> Result<Self, ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::EmptySignalContent);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            employee_id,
            platform,
            kind,
            timestamp,
            content: content.trim().to_string(),
            metadata: BTreeMap::new(),
            normalized: true,
        })
    }

    /// Builder-style metadata attachment.
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_empty_content() {
        let err = WorkSignal::new(
            Uuid::new_v4(),
            Platform::Github,
            SignalKind::Delivery,
            Utc::now(),
            "   ",
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::EmptySignalContent);
    }

    #[test]
    fn test_new_trims_and_normalizes() {
        let signal = WorkSignal::new(
            Uuid::new_v4(),
            Platform::Github,
            SignalKind::Delivery,
            Utc::now(),
            "  Merged pull request #245  ",
        )
        .unwrap();
        assert_eq!(signal.content, "Merged pull request #245");
        assert!(signal.normalized);
    }

    #[test]
    fn test_metadata_round_trips() {
        let signal = WorkSignal::new(
            Uuid::new_v4(),
            Platform::Jira,
            SignalKind::Ownership,
            Utc::now(),
            "Completed epic PROJ-123",
        )
        .unwrap()
        .with_metadata("story_points", json!(13))
        .with_metadata("cycle_time", json!(8));

        let parsed: WorkSignal =
            serde_json::from_str(&serde_json::to_string(&signal).unwrap()).unwrap();
        assert_eq!(parsed.metadata["story_points"], json!(13));
        assert_eq!(parsed.kind, SignalKind::Ownership);
    }
}
