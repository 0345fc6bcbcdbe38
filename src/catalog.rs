//! Catalog loading and record selection
//!
//! The driver-facing I/O: read the whole catalog file into memory
//! (aborting on the first malformed line), then pick out the records a
//! selection stream names by 1-based index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{CatalogError, CatalogResult, FileContext};
use crate::parser::parse_record;
use crate::record::Record;

/// Sentinel line ending a selection stream.
pub const SELECTION_TERMINATOR: &str = "FIM";

/// Load every record from `path`. The first line is a header and is
/// discarded; every following line must parse, and a malformed one
/// aborts the load rather than being skipped.
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<Record>> {
    let name = path.display().to_string();
    let file = File::open(path).with_file_context(&name)?;
    let mut lines = BufReader::new(file).lines();

    if let Some(header) = lines.next() {
        header.with_file_context(&name)?;
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line.with_file_context(&name)?;
        // Header is line 1, so the first data line is line 2.
        let record = parse_record(&line).map_err(|e| annotate_line(e, idx + 2))?;
        records.push(record);
    }

    info!("loaded {} records from {}", records.len(), name);
    Ok(records)
}

fn annotate_line(err: CatalogError, line_no: usize) -> CatalogError {
    match err {
        CatalogError::MalformedRecord { reason } => CatalogError::MalformedRecord {
            reason: format!("line {line_no}: {reason}"),
        },
        other => other,
    }
}

/// Read 1-based record indices from `input` until the `FIM` sentinel
/// (or end of input) and return clones of the chosen records, in
/// selection order. An index outside `1..=catalog.len()` is fatal.
pub fn read_selection<R: BufRead>(input: R, catalog: &[Record]) -> CatalogResult<Vec<Record>> {
    let mut selected = Vec::new();

    for line in input.lines() {
        let line = line?;
        let token = line.trim();
        if token == SELECTION_TERMINATOR {
            break;
        }

        let index: usize = token.parse().map_err(|_| CatalogError::InvalidSelection {
            line: token.to_string(),
        })?;
        if index == 0 || index > catalog.len() {
            return Err(CatalogError::Selection {
                index,
                len: catalog.len(),
            });
        }

        selected.push(catalog[index - 1].clone());
    }

    debug!("selected {} of {} records", selected.len(), catalog.len());
    Ok(selected)
}
