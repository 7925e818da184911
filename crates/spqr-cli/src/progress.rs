//! Progress bar for starter archive extraction.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use spqr_core::ProgressCallback;
use std::path::Path;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Counts entries against the archive's total and shows the bytes written
/// so far. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_written: u64,
}

impl CliProgress {
    #[must_use]
    pub fn new(message: &str) -> Self {
        // "Unpacking [████████░░░░] 42/100 entries (15.2 KB)"
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} entries ({prefix})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message(message.to_string());
        bar.set_prefix(humanize_bytes(0));

        Self {
            bar,
            bytes_written: 0,
        }
    }

    /// Progress is drawn only when stderr is a terminal.
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, _current: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_prefix(humanize_bytes(self.bytes_written));
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB).
#[allow(clippy::cast_precision_loss)]
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
