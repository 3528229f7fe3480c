//! Single-bar progress display for tile and row pipelines

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{prefix} {spinner} {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress reporter that can be hidden entirely
///
/// Counts units of work (tiles written, rows read). When the total is not known
/// up front a spinner is shown instead of a bar.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter with a known total
    pub fn new(label: &str, total: usize, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), Self::target(visible));
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a reporter for a stream of unknown length
    pub fn unbounded(label: &str, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(None, Self::target(visible));
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    fn target(visible: bool) -> ProgressDrawTarget {
        if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        }
    }

    /// Advance by one unit and show `message` next to the bar
    pub fn advance(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.inc(1);
    }

    /// Units completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the reporter draws anything
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
