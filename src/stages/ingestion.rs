//! Work signal ingestion pipeline.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::fixtures;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct SignalIngestionView;

impl StageView for SignalIngestionView {
    fn stage(&self) -> Stage {
        Stage::SignalIngestion
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::SignalIngestion.title());
        let name = store
            .selected()
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "the employee".to_string());
        out.narration.push(format!(
            "Gathering {}'s work activity over the last {} days.",
            name,
            fixtures::ANALYSIS_PERIOD_DAYS
        ));
        for (platform, count) in fixtures::PLATFORM_COUNTS {
            out.narration
                .push(format!("  {}: {} signals", platform.display_name(), count));
        }
        out.narration.push(format!(
            "Total: {} work signals collected and normalized.",
            fixtures::total_signal_count()
        ));

        if store.signals.is_empty() {
            out.pipeline = Some(crate::sim::INGESTION_STEPS.to_vec());
        } else {
            out.actions
                .push(ActionButton::outline("View Signals", Action::ViewSignals));
        }
        out.actions.push(ActionButton::new(
            "Generate Review Draft",
            Action::GenerateReview,
        ));
        out
    }
}
