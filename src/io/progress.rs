//! Survey progress tracking for batch generation

use crate::analysis::statistics::LayoutStatistics;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SURVEY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Layouts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of generated layouts
///
/// The message slot carries a running count of disconnected layouts, so a
/// failing survey is visible before it finishes.
pub struct ProgressManager {
    bar: ProgressBar,
    disconnected: usize,
}

impl ProgressManager {
    /// Create a progress bar for `total` layouts
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(SURVEY_STYLE.clone());
        Self {
            bar,
            disconnected: 0,
        }
    }

    /// Hidden progress bar that still tracks counts
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self {
            bar,
            disconnected: 0,
        }
    }

    /// Record one finished layout
    pub fn complete_layout(&mut self, layout: &LayoutStatistics) {
        if !layout.connected {
            self.disconnected += 1;
            self.bar
                .set_message(format!("{} disconnected", self.disconnected));
        }
        self.bar.inc(1);
    }

    /// Layouts recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Disconnected layouts recorded so far
    pub const fn disconnected(&self) -> usize {
        self.disconnected
    }

    /// Close the progress display
    pub fn finish(&self) {
        if self.disconnected == 0 {
            self.bar.finish_with_message("all layouts connected");
        } else {
            self.bar.finish();
        }
    }
}
