//! Batch progress display for the subject review loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Subjects: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks review progress across the usable subject batch
///
/// The review prompt blocks on the rater, so the bar is suspended around the
/// interactive step to keep the terminal readable.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the usable subject count
    pub fn new(subject_count: usize) -> Self {
        let bar = ProgressBar::new(subject_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show which subject is currently under review
    pub fn start_subject(&self, subject_id: &str) {
        self.bar.set_message(format!("reviewing {subject_id}"));
    }

    /// Hide the bar while `f` interacts with the terminal
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.bar.suspend(f)
    }

    /// Mark the current subject as reviewed
    pub fn complete_subject(&self) {
        self.bar.inc(1);
    }

    /// Clear the display at the end of the run
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
