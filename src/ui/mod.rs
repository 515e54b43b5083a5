//! Terminal rendering for the chat assistant, via `console` and `indicatif`.
//!
//! `ChatUI` prints stage output as a chat transcript: bot narration with a
//! typing spinner, the integration-status widget, and the button row the
//! driver offers. `PipelineUI` renders a simulated pipeline as a stacked
//! progress display while the timer task runs.

pub mod icons;

use std::time::Duration;

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::chat::{ButtonVariant, Message};
use crate::model::ConnectionState;
use crate::sim::SimulatedTask;
use crate::stages::StageOutput;
use icons::{BOT, CHECK, LINK, PLUG, USER};

/// Chat-transcript renderer for one assistant session.
pub struct ChatUI {
    typing_delay: Duration,
}

impl ChatUI {
    pub fn new(typing_delay_ms: u64) -> Self {
        Self {
            typing_delay: Duration::from_millis(typing_delay_ms),
        }
    }

    /// Show the typing spinner for the configured delay, then print the line
    /// as a bot message.
    pub async fn bot_says(&self, text: &str) {
        if !self.typing_delay.is_zero() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .expect("progress bar template is a valid static string"),
            );
            spinner.set_message("ReviewGenie is typing...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            tokio::time::sleep(self.typing_delay).await;
            spinner.finish_and_clear();
        }
        println!("{}{}", BOT, text);
    }

    pub fn user_says(&self, text: &str) {
        println!("{}{}", USER, style(text).dim());
    }

    /// Print a full stage: title, narration, widget, and the button row.
    pub async fn render_stage(&self, out: &StageOutput) {
        println!();
        println!("{}", style(out.title).bold().cyan());
        for line in &out.narration {
            self.bot_says(line).await;
        }
        if let Some(widget) = &out.widget {
            for (platform, state) in &widget.entries {
                let (icon, label) = match state {
                    ConnectionState::Connected => (CHECK, style("Connected").green()),
                    ConnectionState::Connecting => (PLUG, style("Connecting...").yellow()),
                    ConnectionState::Disconnected => (LINK, style("Not connected").dim()),
                };
                println!("  {}{} - {}", icon, platform.display_name(), label);
            }
        }
        if !out.buttons().is_empty() {
            let row: Vec<String> = out
                .buttons()
                .iter()
                .map(|b| match b.variant {
                    ButtonVariant::Default => format!("[{}]", style(&b.label).bold()),
                    ButtonVariant::Outline => format!("[{}]", &b.label),
                    ButtonVariant::Secondary => format!("[{}]", style(&b.label).dim()),
                })
                .collect();
            println!("  {}", row.join(" "));
        }
    }

    /// Print a transcript message without the typing delay (history replay).
    pub fn render_message(&self, message: &Message) {
        match message.author {
            crate::chat::Author::Bot => println!("{}{}", BOT, message.content),
            crate::chat::Author::User => println!("{}{}", USER, style(&message.content).dim()),
        }
    }

    pub fn notice(&self, text: &str) {
        println!("  {}{}", CHECK, style(text).green());
    }

    pub fn error(&self, text: &str) {
        eprintln!("  {}", style(text).red());
    }
}

/// Progress display for a simulated pipeline: one percentage bar plus a
/// spinner naming the current step.
pub struct PipelineUI {
    multi: MultiProgress,
    bar: ProgressBar,
    step_bar: ProgressBar,
}

impl PipelineUI {
    pub fn new(title: &str) -> Self {
        let multi = MultiProgress::new();

        let bar_style = ProgressStyle::default_bar()
            .template("{prefix:.bold.dim} [{bar:40.cyan/blue}] {pos}%")
            .expect("progress bar template is a valid static string")
            .progress_chars("█▓▒░");
        let bar = multi.add(ProgressBar::new(100));
        bar.set_style(bar_style);
        bar.set_prefix(title.to_string());

        let step_style = ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {msg}")
            .expect("progress bar template is a valid static string");
        let step_bar = multi.add(ProgressBar::new_spinner());
        step_bar.set_style(step_style);
        step_bar.set_prefix("  step");

        Self {
            multi,
            bar,
            step_bar,
        }
    }

    pub fn set_step(&self, label: &str) {
        self.step_bar.set_message(label.to_string());
        self.step_bar.tick();
    }

    /// Drive the display from a running task until it reports 100.
    pub async fn follow(&self, task: SimulatedTask) {
        let mut rx = task.subscribe();
        self.bar.set_position(*rx.borrow() as u64);
        while *rx.borrow() < 100 {
            if rx.changed().await.is_err() {
                break;
            }
            self.bar.set_position(*rx.borrow() as u64);
        }
        self.finish();
    }

    pub fn finish(&self) {
        self.bar.set_position(100);
        self.bar.finish();
        self.step_bar.finish_and_clear();
        let _ = self.multi.clear();
    }
}
