use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for batch dataset builds.
///
/// Hidden in quiet mode or when stderr is not a TTY, so machine-read output
/// on stdout stays clean.
#[derive(Clone)]
pub struct BatchProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl BatchProgress {
    /// Creates a progress bar over `total` datasets.
    ///
    /// # Panics
    /// Panics if the progress template is invalid; the template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} Indexing [{bar:40.cyan/blue}] {pos}/{len} datasets ({percent}%)",
                    )
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            pb
        };
        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Increments the counter by 1. Thread-safe for rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Finishes and clears the bar.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
