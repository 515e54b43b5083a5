//! Configuration loaded from `reviewgenie.toml`.
//!
//! Every field has a default, so the file is optional and may be partial.
//! The demo command layers `--fast` on top by zeroing the timing section.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::workflow::Stage;

pub const CONFIG_FILE: &str = "reviewgenie.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenieConfig {
    pub assistant: AssistantConfig,
    pub timing: TimingConfig,
    pub cycle: CycleConfig,
}

/// Identity and starting point of the chat assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    pub initial_stage: Stage,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "ReviewGenie".to_string(),
            initial_stage: Stage::Welcome,
        }
    }
}

/// Delays for the simulated async stages, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub typing_delay_ms: u64,
    pub connect_delay_ms: u64,
    pub feedback_collect_ms: u64,
    pub feedback_process_ms: u64,
    pub ingestion_step_ms: u64,
    pub generation_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 2000,
            connect_delay_ms: 2000,
            feedback_collect_ms: 4000,
            feedback_process_ms: 3000,
            ingestion_step_ms: 1000,
            generation_delay_ms: 3000,
        }
    }
}

impl TimingConfig {
    /// Zero every delay, for `--fast` runs and tests.
    pub fn fast() -> Self {
        Self {
            typing_delay_ms: 0,
            connect_delay_ms: 0,
            feedback_collect_ms: 0,
            feedback_process_ms: 0,
            ingestion_step_ms: 0,
            generation_delay_ms: 0,
        }
    }
}

/// Defaults applied when creating a review cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    pub peer_feedback_count: u32,
    pub signal_analysis_period_days: u32,
    pub draft_generation_trigger_days: u32,
    pub manager_deadline_days: u32,
    pub hr_review_required_threshold: u32,
}

impl Default for CycleConfig {
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

impl GenieConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `reviewgenie.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
