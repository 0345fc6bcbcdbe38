//! Run statistics
//!
//! One sort invocation yields one [`SortStats`] value, which the driver
//! appends to the log file as a tab-separated line:
//! `<run-identifier>\t<elapsed-nanoseconds>\t<comparison-count>`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::info;

use crate::error::{CatalogResult, FileContext};

/// Timing and comparison statistics for a single sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub elapsed: Duration,
    pub comparisons: u64,
}

impl SortStats {
    /// Format the tab-separated statistics line for `run_id`.
    pub fn log_line(&self, run_id: &str) -> String {
        format!("{}\t{}\t{}", run_id, self.elapsed.as_nanos(), self.comparisons)
    }
}

/// Append one statistics line to the log file, creating it if needed.
pub fn append_stats(path: &Path, run_id: &str, stats: &SortStats) -> CatalogResult<()> {
    let name = path.display().to_string();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_file_context(&name)?;
    writeln!(file, "{}", stats.log_line(run_id)).with_file_context(&name)?;

    info!(
        "logged run {run_id} to {name}: {} comparisons in {:?}",
        stats.comparisons, stats.elapsed
    );
    Ok(())
}
