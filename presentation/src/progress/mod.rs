//! Batch progress display

pub mod reporter;
