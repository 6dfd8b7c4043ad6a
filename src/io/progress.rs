//! Batch progress display for multi-image renders

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a batch of render jobs
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, completed: 0 }
    }

    /// Set the number of images in the batch
    pub fn initialize(&mut self, job_count: usize) {
        self.completed = 0;
        self.bar.set_length(job_count as u64);
        self.bar.set_position(0);
    }

    /// Show which image is being rendered
    pub fn start_job(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Advance past a finished image
    pub fn complete_job(&mut self, elapsed: Duration) {
        tracing::debug!(elapsed_ms = elapsed.as_millis(), "image rendered");
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Number of images finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
