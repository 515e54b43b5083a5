//! Tool connection screen.

use super::{StageOutput, StageView};
use crate::chat::{ActionButton, IntegrationWidget};
use crate::model::{ConnectionState, Platform};
use crate::workflow::{Action, Stage, WorkflowStore};

pub struct IntegrationsView;

impl StageView for IntegrationsView {
    fn stage(&self) -> Stage {
        Stage::Integrations
    }

    fn render(&self, store: &WorkflowStore) -> StageOutput {
        let mut out = StageOutput::new(Stage::Integrations.title());
        out.narration.push(
            "Connect the tools your team uses so I can gather work signals automatically."
                .to_string(),
        );

        let entries: Vec<_> = Platform::ALL
            .iter()
            .map(|p| (*p, store.integration(*p).state))
            .collect();
        out.widget = Some(IntegrationWidget { entries });

        for platform in Platform::ALL {
            if store.integration(platform).state != ConnectionState::Connected {
                out.actions.push(ActionButton::outline(
                    format!("Connect {}", platform.display_name()),
                    Action::Connect(platform),
                ));
            }
        }

        if store.connected_count() > 0 {
            out.actions.push(ActionButton::new(
                "Continue to Employee Selection",
                Action::SelectEmployee,
            ));
        }
        out.actions.push(ActionButton::secondary(
            "Skip for Now",
            Action::SkipIntegrations,
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_connect_buttons_for_disconnected_platforms() {
        let out = IntegrationsView.render(&WorkflowStore::new());
        let connects = out
            .actions
            .iter()
            .filter(|b| b.label.starts_with("Connect "))
            .count();
        assert_eq!(connects, Platform::ALL.len());
        assert!(out.actions.iter().any(|b| b.label == "Skip for Now"));
        // Cannot continue before at least one connection.
        assert!(
            !out.actions
                .iter()
                .any(|b| b.label == "Continue to Employee Selection")
        );
    }

    #[test]
    fn test_connected_platform_loses_its_button() {
        let mut store = WorkflowStore::new();
        store.begin_connect(Platform::Slack);
        store.finish_connect(Platform::Slack);
        let out = IntegrationsView.render(&store);
        assert!(!out.actions.iter().any(|b| b.label == "Connect Slack"));
        assert!(
            out.actions
                .iter()
                .any(|b| b.label == "Continue to Employee Selection")
        );
        let widget = out.widget.unwrap();
        assert!(
            widget
                .entries
                .iter()
                .any(|(p, s)| *p == Platform::Slack && *s == ConnectionState::Connected)
        );
    }
}
