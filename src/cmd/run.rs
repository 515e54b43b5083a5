//! Interactive workflow driver built on `dialoguer`.

use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::time::Duration;

use reviewgenie::chat::Message;
use reviewgenie::config::GenieConfig;
use reviewgenie::sim::SimulatedTask;
use reviewgenie::stages::view_for;
use reviewgenie::ui::ChatUI;
use reviewgenie::workflow::{Action, Stage, WorkflowController};

/// Drive the workflow stage by stage, offering each stage's buttons as a
/// select prompt. `Ctrl-C` or the quit entry ends the session.
pub async fn cmd_run(config: &GenieConfig, stage_override: Option<&str>) -> Result<()> {
    let initial = match stage_override {
        Some(s) => s.parse::<Stage>()?,
        None => config.assistant.initial_stage,
    };
    let ui = ChatUI::new(config.timing.typing_delay_ms);
    let mut wf = WorkflowController::new(initial);

    loop {
        let view = view_for(wf.current_stage());
        let out = view.render(&wf.store);

        wf.store.log.begin_typing();
        ui.render_stage(&out).await;
        wf.store.log.end_typing();
        for line in &out.narration {
            wf.store.log.append(Message::bot(line));
        }

        let buttons: Vec<_> = out.buttons().into_iter().cloned().collect();
        if buttons.is_empty() {
            break;
        }
        let mut labels: Vec<String> = buttons.iter().map(|b| b.label.clone()).collect();
        labels.push("Quit".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read selection")?;
        if choice == buttons.len() {
            break;
        }

        let action = buttons[choice].action.clone();
        wf.store.log.append(Message::user(&labels[choice]));

        // Section edits gather their input up front, then apply as one action.
        if action == Action::EditSection
            && let Some(draft) = &wf.store.draft
        {
            let titles: Vec<String> = draft.sections.iter().map(|s| s.title.clone()).collect();
            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Which section?")
                .items(&titles)
                .default(0)
                .interact()
                .context("Failed to read section selection")?;
            let section_id = draft.sections[picked].id.clone();

            let content: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("New content (leave empty to discard)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read section content")?;
            wf.store.section_edit.section_id = Some(section_id);
            if !content.trim().is_empty() {
                wf.store.section_edit.content = Some(content);
            }

            let rating: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Overall rating (empty keeps current)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read overall rating")?;
            if !rating.trim().is_empty() {
                wf.store.section_edit.rating = Some(rating);
            }
        }

        // The scheduling form needs data before the invitation can go out.
        if action == Action::SendInvitation && wf.store.scheduling.date.is_none() {
            let date: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Meeting date (YYYY-MM-DD)")
                .interact_text()
                .context("Failed to read meeting date")?;
            if let Err(err) = wf.store.scheduling.set_date(&date) {
                ui.error(&err.to_string());
            }
            let time: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Meeting time (HH:MM)")
                .interact_text()
                .context("Failed to read meeting time")?;
            if let Err(err) = wf.store.scheduling.set_time(&time) {
                ui.error(&err.to_string());
            }
        }

        wf.advance(&action);

        // Connections complete after the simulated OAuth delay.
        if let Action::Connect(platform) = action {
            SimulatedTask::fixed_delay(
                Duration::from_millis(config.timing.connect_delay_ms),
                4,
            )
            .wait()
            .await;
            wf.store.finish_connect(platform);
        }

        if let Some(err) = wf.store.last_error.take() {
            ui.error(&err);
        }
        if let Some(notice) = wf.store.last_notice.take() {
            ui.notice(&notice);
            wf.store.log.append(Message::bot(&notice));
        }
    }

    println!();
    println!("Session transcript ({} turns):", wf.store.log.len());
    for message in wf.store.log.iter() {
        ui.render_message(message);
    }
    println!("Session ended after {} messages.", wf.store.log.len());
    Ok(())
}
