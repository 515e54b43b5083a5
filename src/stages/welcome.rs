//! Assistant home screen.

use super::{StageOutput, StageView};
use crate::chat::ActionButton;
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct WelcomeView;

impl StageView for WelcomeView {
    fn stage(&self) -> Stage {
        Stage::Welcome
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::Welcome.title());
        out.narration.push(
            "Hi! I'm ReviewGenie, your AI-powered performance review assistant.".to_string(),
        );
        out.narration.push(
            "I'll help you create comprehensive, fair performance reviews by gathering \
             work signals from your team's tools and collecting peer feedback."
                .to_string(),
        );
        if store.connected_count() > 0 {
            out.narration.push(format!(
                "You already have {} tool(s) connected from a previous review.",
                store.connected_count()
            ));
        }
        out.actions.push(ActionButton::new(
            "Connect Workplace Tools",
            Action::ConnectTools,
        ));
        out.actions
            .push(ActionButton::outline("Learn More", Action::LearnMore));
        out
    }
}
