//! Progress reporting for batch reply runs

use autoreply_application::BatchProgressNotifier;
use autoreply_domain::{BatchResult, GenerationResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports batch progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    chunks: Mutex<usize>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            chunks: Mutex::new(0),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize, chunks: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Drafting replies");
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.chunks.lock() {
            *guard = chunks;
        }
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_chunk_start(&self, chunk_index: usize, chunk_len: usize) {
        let chunks = self.chunks.lock().map(|g| *g).unwrap_or(0);
        self.with_bar(|pb| {
            pb.set_message(format!(
                "chunk {}/{} ({} reviews)",
                chunk_index + 1,
                chunks,
                chunk_len
            ));
        });
    }

    fn on_item_complete(&self, result: &GenerationResult) {
        self.with_bar(|pb| {
            let status = if result.success {
                format!("{} {}", "v".green(), result.review_id)
            } else {
                format!("{} {}", "x".red(), result.review_id)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_batch_complete(&self, result: &BatchResult) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!(
                "{} ({} drafted, {} fallback)",
                "done".green(),
                result.success_count,
                result.failure_count
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl BatchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize, chunks: usize) {
        eprintln!(
            "{} {} ({} reviews in {} chunks)",
            "->".cyan(),
            "Drafting replies".bold(),
            total,
            chunks
        );
    }

    fn on_chunk_start(&self, chunk_index: usize, chunk_len: usize) {
        eprintln!("  chunk {} ({} reviews)", chunk_index + 1, chunk_len);
    }

    fn on_item_complete(&self, result: &GenerationResult) {
        if result.success {
            eprintln!("    {} {}", "v".green(), result.review_id);
        } else {
            eprintln!("    {} {} (fallback)", "x".red(), result.review_id);
        }
    }

    fn on_batch_complete(&self, _result: &BatchResult) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_domain::ReviewId;

    #[test]
    fn test_reporter_tracks_items() {
        let reporter = ProgressReporter::new();
        reporter.on_batch_start(2, 1);
        reporter.on_chunk_start(0, 2);
        reporter.on_item_complete(&GenerationResult::success(ReviewId::new("r1"), "Thanks", 1));
        reporter.on_item_complete(&GenerationResult::fallback(
            ReviewId::new("r2"),
            "Thank you",
            "boom",
            1,
        ));

        let position = reporter
            .bar
            .lock()
            .unwrap()
            .as_ref()
            .map(|pb| pb.position());
        assert_eq!(position, Some(2));

        reporter.on_batch_complete(&BatchResult::default());
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_callbacks_before_start_are_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_item_complete(&GenerationResult::success(ReviewId::new("r1"), "Thanks", 1));
        reporter.on_batch_complete(&BatchResult::default());
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
