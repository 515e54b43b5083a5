//! `cycle` command: create a review cycle and print its timeline.

use anyhow::Result;
use console::style;

use reviewgenie::config::GenieConfig;
use reviewgenie::fixtures;
use reviewgenie::model::{CycleSettings, ReviewCycle};

pub fn cmd_cycle(
    config: &GenieConfig,
    name: &str,
    period_days: Option<u32>,
    trigger_days: Option<u32>,
) -> Result<()> {
    let settings = CycleSettings {
        peer_feedback_count: config.cycle.peer_feedback_count,
        signal_analysis_period_days: period_days
            .unwrap_or(config.cycle.signal_analysis_period_days),
        draft_generation_trigger_days: trigger_days
            .unwrap_or(config.cycle.draft_generation_trigger_days),
        manager_deadline_days: config.cycle.manager_deadline_days,
        hr_review_required_threshold: config.cycle.hr_review_required_threshold,
    };
    let cycle = ReviewCycle::create(name, fixtures::employees(), settings)?;

    println!("{}", style(&cycle.name).bold().cyan());
    println!("  Status:        {}", cycle.status);
    println!("  Start:         {}", cycle.start_date.format("%Y-%m-%d"));
    println!(
        "  Analysis ends: {} ({} days)",
        cycle.end_date.format("%Y-%m-%d"),
        cycle.settings.signal_analysis_period_days
    );
    println!(
        "  Review due:    {} (+{} days)",
        cycle.review_due_date.format("%Y-%m-%d"),
        cycle.settings.draft_generation_trigger_days
    );
    println!("  Participants:  {}", cycle.participants.len());
    for employee in &cycle.participants {
        println!(
            "    {} - {} ({})",
            employee.initials(),
            employee.name,
            employee.role
        );
    }
    Ok(())
}
