//! Scripted end-to-end demo: admin setup through export, no prompts.

use anyhow::Result;
use tracing::debug;

use reviewgenie::chat::Message;
use reviewgenie::config::{GenieConfig, TimingConfig};
use reviewgenie::model::Platform;
use reviewgenie::sim::{SimulatedTask, ingestion_steps};
use reviewgenie::stages::view_for;
use reviewgenie::ui::{ChatUI, PipelineUI};
use reviewgenie::workflow::{Action, Stage, WorkflowController};

use std::time::Duration;

/// Run the whole pipeline with the canned roster, pausing for the simulated
/// delays unless `fast` is set.
pub async fn cmd_demo(config: &GenieConfig, fast: bool) -> Result<()> {
    let timing = if fast {
        TimingConfig::fast()
    } else {
        config.timing.clone()
    };
    let ui = ChatUI::new(timing.typing_delay_ms);
    let mut wf = WorkflowController::new(Stage::AdminSetup);

    render(&ui, &wf).await;
    step(&ui, &mut wf, Action::CreateCycle).await;
    render(&ui, &wf).await;

    // Connect Slack the way the live product does: connecting state first,
    // then the fixed-delay "OAuth" completes.
    step(&ui, &mut wf, Action::Connect(Platform::Slack)).await;
    SimulatedTask::fixed_delay(Duration::from_millis(timing.connect_delay_ms), 4)
        .wait()
        .await;
    wf.store.finish_connect(Platform::Slack);
    if let Some(notice) = wf.store.last_notice.take() {
        ui.notice(&notice);
        wf.store.log.append(Message::bot(&notice));
    }
    render(&ui, &wf).await;

    step(&ui, &mut wf, Action::SelectEmployee).await;
    render(&ui, &wf).await;
    let employee_id = wf.store.roster[0].id;
    step(&ui, &mut wf, Action::ChooseEmployee(employee_id)).await;
    render(&ui, &wf).await;

    // Peer feedback: collect then process.
    let feedback = PipelineUI::new("Feedback");
    feedback.set_step("Collecting responses from 3 peers");
    SimulatedTask::fixed_delay(Duration::from_millis(timing.feedback_collect_ms), 8)
        .wait()
        .await;
    feedback.set_step("Analyzing sentiment and themes");
    SimulatedTask::fixed_delay(Duration::from_millis(timing.feedback_process_ms), 6)
        .wait()
        .await;
    feedback.finish();
    step(&ui, &mut wf, Action::FeedbackComplete).await;
    render(&ui, &wf).await;

    // Signal ingestion pipeline with live step labels.
    let pipeline = PipelineUI::new("Signals");
    let (step_tx, mut step_rx) = tokio::sync::mpsc::unbounded_channel::<&'static str>();
    let task = SimulatedTask::pipeline(ingestion_steps(timing.ingestion_step_ms), move |s| {
        let _ = step_tx.send(s.label);
    });
    let follow = pipeline.follow(task);
    tokio::pin!(follow);
    loop {
        tokio::select! {
            _ = &mut follow => break,
            Some(label) = step_rx.recv() => pipeline.set_step(label),
        }
    }

    SimulatedTask::fixed_delay(Duration::from_millis(timing.generation_delay_ms), 6)
        .wait()
        .await;
    step(&ui, &mut wf, Action::GenerateReview).await;
    render(&ui, &wf).await;

    // Manager revises one section before the draft goes to HR.
    wf.store.section_edit.stage(
        "achievements",
        "Led 3 major feature launches this cycle, including the billing \
         migration that cut invoice errors by 40%.",
    );
    step(&ui, &mut wf, Action::EditSection).await;
    render(&ui, &wf).await;

    step(&ui, &mut wf, Action::SubmitReview).await;
    render(&ui, &wf).await;
    step(&ui, &mut wf, Action::Approve).await;

    // Fill the invitation form before sending, as scheduling requires.
    wf.store.scheduling.set_date("2024-12-15")?;
    wf.store.scheduling.set_time("14:30")?;
    render(&ui, &wf).await;
    step(&ui, &mut wf, Action::SendInvitation).await;
    step(&ui, &mut wf, Action::Complete).await;
    render(&ui, &wf).await;
    step(&ui, &mut wf, Action::ExportReview).await;

    println!();
    println!("Session transcript ({} turns):", wf.store.log.len());
    for message in wf.store.log.iter() {
        ui.render_message(message);
    }

    Ok(())
}

async fn render(ui: &ChatUI, wf: &WorkflowController) {
    let view = view_for(wf.current_stage());
    ui.render_stage(&view.render(&wf.store)).await;
}

async fn step(ui: &ChatUI, wf: &mut WorkflowController, action: Action) {
    debug!(action = %action, "demo step");
    ui.user_says(&action.id());
    wf.store.log.append(Message::user(&action.id()));
    wf.advance(&action);
    if let Some(err) = wf.store.last_error.take() {
        ui.error(&err);
    }
    if let Some(notice) = wf.store.last_notice.take() {
        ui.notice(&notice);
        wf.store.log.append(Message::bot(&notice));
    }
}
