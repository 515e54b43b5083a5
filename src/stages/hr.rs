//! HR oversight dashboard.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::fixtures;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct HrReviewView;

impl StageView for HrReviewView {
    fn stage(&self) -> Stage {
        Stage::HrReview
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::HrReview.title());
        let metrics = fixtures::hr_metrics();
        out.narration.push(format!(
            "Cycle health: {}% submitted, {}% peer feedback coverage, avg completion {} min.",
            metrics.submission_rate,
            metrics.peer_feedback_coverage,
            metrics.average_completion_minutes
        ));
        out.narration.push(format!(
            "Platform: {}% API uptime, {}% AI accuracy, {}s avg generation.",
            metrics.api_uptime, metrics.ai_accuracy, metrics.generation_latency_secs
        ));

        match &store.draft {
            Some(draft) => {
                let name = store
                    .selected()
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| "employee".to_string());
                out.narration.push(format!(
                    "Pending approval: {} - {} (quality score {}, version {}).",
                    name,
                    draft.overall_rating,
                    draft.quality_score(),
                    draft.version
                ));
                if draft.quality_score()
                    < store
                        .cycle
                        .as_ref()
                        .map(|c| c.settings.hr_review_required_threshold)
                        .unwrap_or(85)
                {
                    out.narration
                        .push("Quality score below threshold, manual HR review required.".to_string());
                }
                out.actions
                    .push(ActionButton::new("Approve Review", Action::Approve));
                out.actions
                    .push(ActionButton::outline("Request Edit", Action::RequestEdit));
            }
            None => {
                out.narration
                    .push("No reviews awaiting approval.".to_string());
            }
        }
        out
    }
}
