//! Simulated async work with observable progress.
//!
//! Every "remote" operation in the product is a fixed-delay fake: connecting
//! a tool, collecting peer feedback, ingesting work signals, generating a
//! draft. `SimulatedTask` runs the delay on the tokio timer and publishes
//! progress ticks over a watch channel, so drivers can render a live bar and
//! tests can run under a paused clock. Dropping the handle aborts the task.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Handle to an in-flight simulated task. Progress is 0..=100; the task
/// completes exactly when progress reaches 100. Dropping the handle cancels
/// the underlying timer task.
pub struct SimulatedTask {
    progress: watch::Receiver<u8>,
    handle: JoinHandle<()>,
}

impl SimulatedTask {
    /// Run a single fixed delay, ticking progress at even intervals.
    pub fn fixed_delay(total: Duration, ticks: u32) -> Self {
        let (tx, rx) = watch::channel(0u8);
        let ticks = ticks.max(1);
        let handle = tokio::spawn(async move {
            let step = total / ticks;
            for i in 1..=ticks {
                sleep(step).await;
                let pct = (i * 100 / ticks) as u8;
                if tx.send(pct).is_err() {
                    return;
                }
            }
        });
        Self {
            progress: rx,
            handle,
        }
    }

    /// Run a sequence of named steps back to back. Progress is proportional
    /// to elapsed time across the whole pipeline, and `on_step` fires as each
    /// step begins.
    pub fn pipeline(
        steps: Vec<PipelineStep>,
        mut on_step: impl FnMut(&PipelineStep) + Send + 'static,
    ) -> Self {
        let (tx, rx) = watch::channel(0u8);
        let handle = tokio::spawn(async move {
            let total: Duration = steps.iter().map(|s| s.duration).sum();
            let mut elapsed = Duration::ZERO;
            for step in &steps {
                on_step(step);
                sleep(step.duration).await;
                elapsed += step.duration;
                let pct = if total.is_zero() {
                    100
                } else {
                    (elapsed.as_millis() * 100 / total.as_millis().max(1)) as u8
                };
                if tx.send(pct.min(100)).is_err() {
                    return;
                }
            }
            let _ = tx.send(100);
        });
        Self {
            progress: rx,
            handle,
        }
    }

    /// Current progress percentage.
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// A receiver drivers can poll or await changes on.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the task reports 100.
    pub async fn wait(mut self) {
        while *self.progress.borrow() < 100 {
            if self.progress.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Drop for SimulatedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One named phase of a simulated pipeline.
#[derive(Debug, Clone)]
pub struct PipelineStep {
    pub label: &'static str,
    pub duration: Duration,
}

impl PipelineStep {
    pub fn new(label: &'static str, duration: Duration) -> Self {
        Self { label, duration }
    }
}

/// The named phases of signal ingestion, in execution order. Stage views
/// derive their pipeline display from this same list.
pub const INGESTION_STEPS: [&str; 4] = [
    "Connecting to workplace tools",
    "Collecting messages and activity",
    "Normalizing work signals",
    "Extracting themes and highlights",
];

/// The signal ingestion pipeline as presented in the UI.
pub fn ingestion_steps(step_ms: u64) -> Vec<PipelineStep> {
    let d = Duration::from_millis(step_ms);
    INGESTION_STEPS
        .iter()
        .map(|&label| PipelineStep::new(label, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_reaches_100() {
        let task = SimulatedTask::fixed_delay(Duration::from_millis(2000), 10);
        task.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_is_monotonic() {
        let task = SimulatedTask::fixed_delay(Duration::from_millis(1000), 5);
        let mut rx = task.subscribe();
        let mut last = 0u8;
        while *rx.borrow() < 100 {
            if rx.changed().await.is_err() {
                break;
            }
            let pct = *rx.borrow();
            assert!(pct >= last, "progress went backward: {last} -> {pct}");
            assert!(pct <= 100);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let task = SimulatedTask::fixed_delay(Duration::from_secs(60), 10);
        let mut rx = task.subscribe();
        drop(task);
        // The sender side is gone, so the channel closes without reaching 100.
        advance(Duration::from_secs(120)).await;
        assert!(rx.changed().await.is_err());
        assert!(*rx.borrow() < 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_visits_every_step() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let task = SimulatedTask::pipeline(ingestion_steps(500), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        task.wait().await;
        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_pipeline_completes() {
        let task = SimulatedTask::pipeline(ingestion_steps(0), |_| {});
        task.wait().await;
    }
}
