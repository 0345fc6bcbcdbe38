//! Run configuration for the catalog sort driver

use std::path::PathBuf;
use std::str::FromStr;

use crate::compare::SortKey;
use crate::error::CatalogError;

/// Catalog file used when no path argument is given.
pub const DEFAULT_CATALOG: &str = "/tmp/catalog.csv";

/// Default prefix of the positions a partial selection run sorts.
pub const DEFAULT_TAKE: usize = 10;

/// The three sorting algorithms the driver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Heap,
    Merge,
    PartialSelection,
}

impl Algorithm {
    /// Short name used in log-file names.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Heap => "heapsort",
            Algorithm::Merge => "mergesort",
            Algorithm::PartialSelection => "partial_selection",
        }
    }

    /// The ordering key used when the caller does not pick one. The
    /// key is a free parameter; any algorithm accepts any key.
    pub fn default_key(&self) -> SortKey {
        match self {
            Algorithm::Heap => SortKey::Measurement,
            Algorithm::Merge => SortKey::PrimaryCategory,
            Algorithm::PartialSelection => SortKey::Name,
        }
    }
}

impl FromStr for Algorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heap" => Ok(Algorithm::Heap),
            "merge" => Ok(Algorithm::Merge),
            "partial-selection" => Ok(Algorithm::PartialSelection),
            other => Err(CatalogError::malformed(format!(
                "unknown algorithm: {other:?}"
            ))),
        }
    }
}

/// Everything one driver run needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path of the catalog file to load.
    pub catalog_path: PathBuf,
    /// Which sorting algorithm to run.
    pub algorithm: Algorithm,
    /// Which ordering key to sort by.
    pub key: SortKey,
    /// How many leading positions the partial selection sort orders.
    /// Ignored by the full sorts.
    pub take: usize,
    /// Identifier written as the first field of the statistics line.
    pub run_id: String,
    /// Statistics log file.
    pub log_path: PathBuf,
    /// Suppress record output, keeping only the statistics log.
    pub quiet: bool,
}

impl RunConfig {
    pub fn new(algorithm: Algorithm, run_id: &str) -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            algorithm,
            key: algorithm.default_key(),
            take: DEFAULT_TAKE,
            run_id: run_id.to_string(),
            log_path: PathBuf::from(default_log_name(run_id, algorithm)),
            quiet: false,
        }
    }
}

/// `<run-id>_<algorithm>.txt`, so repeated runs of different
/// algorithms land in separate logs.
pub fn default_log_name(run_id: &str, algorithm: Algorithm) -> String {
    format!("{}_{}.txt", run_id, algorithm.name())
}
