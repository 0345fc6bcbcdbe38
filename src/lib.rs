//! Instrumented batch sorting of catalog records
//!
//! This crate parses a fixed-layout catalog text format into records,
//! sorts a selected subset with one of three comparison-based
//! algorithms (heapsort, mergesort, partial selection sort), and
//! reports elapsed time plus an explicit comparison count for each run.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Data model and decoding
pub mod category;
pub mod record;
pub mod parser;

// Ordering and instrumentation
pub mod compare;
pub mod stats;

// The sorting engine
pub mod heap_sort;
pub mod merge_sort;
pub mod selection_sort;

// Driver-facing I/O
pub mod catalog;

// Re-export commonly used types
pub use category::Category;
pub use compare::{counted_comparator, ComparisonCounter, SortKey};
pub use config::{Algorithm, RunConfig};
pub use error::{CatalogError, CatalogResult};
pub use heap_sort::heap_sort;
pub use merge_sort::merge_sort;
pub use record::Record;
pub use selection_sort::partial_selection_sort;
pub use stats::SortStats;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const IO_FAILURE: i32 = 2;
