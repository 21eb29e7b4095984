use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A point-in-time view of the probing run, emitted at a bounded cadence.
///
/// `completed` and `matched` are monotone; `matched <= completed <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub matched: usize,
    pub total: usize,
}

impl ProgressSnapshot {
    pub fn is_final(&self) -> bool {
        self.completed == self.total
    }
}

/// Observer invoked by the liveness engine as probes resolve.
///
/// The engine owns the cadence; implementations only render. Swapping the
/// sink changes reporting without touching scheduling logic.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, snapshot: ProgressSnapshot);
}

/// Console reporter backed by an indicatif progress bar.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} checked, {msg} alive ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        bar.set_message("0");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self.bar.set_position(snapshot.completed as u64);
        self.bar.set_message(snapshot.matched.to_string());
        if snapshot.is_final() {
            self.bar.finish_with_message(format!(
                "{} alive, {} checked",
                snapshot.matched, snapshot.completed
            ));
        }
    }
}

/// No-op sink for quiet mode and tests.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_progress(&self, _snapshot: ProgressSnapshot) {}
}
