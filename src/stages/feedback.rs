//! Peer feedback collection via the mock Slack bot.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::fixtures;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct PeerFeedbackView;

impl StageView for PeerFeedbackView {
    fn stage(&self) -> Stage {
        Stage::PeerFeedback
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::PeerFeedback.title());
        let name = store
            .selected()
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "the employee".to_string());
        out.narration.push(format!(
            "I'm reaching out to {}'s peers over Slack for anonymous feedback.",
            name
        ));
        out.narration.push(format!(
            "Peers contacted: {}.",
            fixtures::peer_reviewers()
                .iter()
                .map(|(name, _, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        if store.feedback.is_empty() {
            out.pipeline = Some(vec![
                "Sending feedback requests",
                "Collecting responses",
                "Analyzing sentiment and themes",
            ]);
        } else {
            for fb in &store.feedback {
                out.narration.push(format!(
                    "  [{}] {}",
                    fb.sentiment,
                    fb.themes.join(", ")
                ));
            }
        }
        out.actions.push(ActionButton::new(
            "Continue to Signal Ingestion",
            Action::FeedbackComplete,
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::WorkflowStore;

    #[test]
    fn test_names_the_three_peers() {
        let out = PeerFeedbackView.render(&WorkflowStore::new());
        assert!(
            out.narration
                .iter()
                .any(|l| l.contains("Jessica Wu") && l.contains("David Kim") && l.contains("Maria Santos"))
        );
        assert!(out.pipeline.is_some());
    }

    #[test]
    fn test_shows_collected_feedback_instead_of_pipeline() {
        let mut store = WorkflowStore::new();
        let id = store.roster[0].id;
        store.select_employee(id);
        store.record_feedback(fixtures::peer_feedback(id));
        let out = PeerFeedbackView.render(&store);
        assert!(out.pipeline.is_none());
        assert!(out.narration.iter().any(|l| l.contains("Sarah Johnson")));
    }
}
