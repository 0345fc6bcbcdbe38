//! Ordering keys and comparison counting
//!
//! The sorting engine is generic over a plain 3-way comparator; this
//! module supplies the three record orderings and the explicit counter
//! the statistics are built from. The counter belongs to a single sort
//! invocation and is never shared, so concurrent runs cannot bleed
//! counts into each other.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::record::Record;

/// The three interchangeable record orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `size` ascending, ties broken by `name` (code-point order).
    Measurement,
    /// Textual name of the primary category, ties broken by `name`.
    PrimaryCategory,
    /// `name` only. The instrumentation-free ordering: it never bumps
    /// the comparison counter.
    Name,
}

impl SortKey {
    /// Apply this ordering to a pair of records.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Measurement => a
                .size
                .partial_cmp(&b.size)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::PrimaryCategory => a
                .primary_category()
                .cmp(b.primary_category())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Name => a.name.cmp(&b.name),
        }
    }

    /// Whether comparisons under this key contribute to the counter.
    pub fn is_counted(&self) -> bool {
        !matches!(self, SortKey::Name)
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "measurement" => Ok(SortKey::Measurement),
            "category" => Ok(SortKey::PrimaryCategory),
            "name" => Ok(SortKey::Name),
            other => Err(CatalogError::malformed(format!(
                "unknown sort key: {other:?}"
            ))),
        }
    }
}

/// Comparison accumulator owned by one sort call site.
#[derive(Debug, Default)]
pub struct ComparisonCounter {
    count: u64,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) {
        self.count += 1;
    }

    pub fn get(&self) -> u64 {
        self.count
    }
}

/// Build the comparator closure for one sort invocation. Counted keys
/// bump the counter exactly once per call.
pub fn counted_comparator(
    key: SortKey,
    counter: &mut ComparisonCounter,
) -> impl FnMut(&Record, &Record) -> Ordering + '_ {
    let counted = key.is_counted();
    move |a, b| {
        if counted {
            counter.bump();
        }
        key.compare(a, b)
    }
}
