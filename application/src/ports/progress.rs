//! Progress notification port
//!
//! Defines the interface for reporting progress during batch generation.

use autoreply_domain::{BatchResult, GenerationResult};

/// Callback for progress updates during a batch run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait BatchProgressNotifier: Send + Sync {
    /// Called when the batch starts
    fn on_batch_start(&self, _total: usize, _chunks: usize) {}

    /// Called before a chunk is dispatched
    fn on_chunk_start(&self, chunk_index: usize, chunk_len: usize);

    /// Called when one review in the chunk has a result
    fn on_item_complete(&self, result: &GenerationResult);

    /// Called after the last chunk
    fn on_batch_complete(&self, result: &BatchResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoBatchProgress;

impl BatchProgressNotifier for NoBatchProgress {
    fn on_chunk_start(&self, _chunk_index: usize, _chunk_len: usize) {}
    fn on_item_complete(&self, _result: &GenerationResult) {}
    fn on_batch_complete(&self, _result: &BatchResult) {}
}
