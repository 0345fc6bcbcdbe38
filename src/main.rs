//! Catalog sort driver
//!
//! Loads a catalog file, reads a selection of 1-based record indices
//! from standard input (terminated by the `FIM` sentinel), runs one
//! instrumented sort over the selection, prints the ordered records,
//! and appends a statistics line to the log file.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgMatches, Command};
use env_logger::Env;
use log::info;

use catalog_sort::{
    catalog::{load_catalog, read_selection},
    compare::{counted_comparator, ComparisonCounter},
    config::{default_log_name, Algorithm, RunConfig, DEFAULT_CATALOG},
    error::CatalogResult,
    heap_sort::heap_sort,
    merge_sort::merge_sort,
    record::Record,
    selection_sort::partial_selection_sort,
    stats::{append_stats, SortStats},
    EXIT_SUCCESS,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("catalog-sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> CatalogResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;

    let catalog = load_catalog(&config.catalog_path)?;
    let stdin = io::stdin();
    let mut selected = read_selection(stdin.lock(), &catalog)?;
    drop(catalog);

    let stats = run_sort(&mut selected, &config)?;

    if !config.quiet {
        let shown = match config.algorithm {
            Algorithm::PartialSelection => &selected[..config.take],
            _ => &selected[..],
        };
        for record in shown {
            println!("{record}");
        }
    }

    append_stats(&config.log_path, &config.run_id, &stats)?;
    info!(
        "{} over {} records: {} comparisons in {} ns",
        config.algorithm.name(),
        selected.len(),
        stats.comparisons,
        stats.elapsed.as_nanos()
    );

    Ok(EXIT_SUCCESS)
}

/// Run exactly one algorithm over the selection, timing only the sort
/// call itself.
fn run_sort(records: &mut [Record], config: &RunConfig) -> CatalogResult<SortStats> {
    let mut counter = ComparisonCounter::new();

    let start = Instant::now();
    let tallied = {
        let cmp = counted_comparator(config.key, &mut counter);
        match config.algorithm {
            Algorithm::Heap => {
                heap_sort(records, cmp);
                None
            }
            Algorithm::Merge => {
                merge_sort(records, cmp);
                None
            }
            Algorithm::PartialSelection => {
                Some(partial_selection_sort(records, config.take, cmp)?)
            }
        }
    };
    let elapsed = start.elapsed();

    // The partial selection sort tallies its own comparisons, which
    // also covers the uncounted name key; the full sorts count through
    // the comparator.
    let comparisons = tallied.unwrap_or_else(|| counter.get());

    Ok(SortStats {
        elapsed,
        comparisons,
    })
}

fn build_cli() -> Command {
    Command::new("catalog-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("catalog-sort [OPTION]... [FILE]")
        .about("Sort a selected subset of catalog records and log sort statistics")
        .long_about(
            "Sort a selected subset of catalog records and log sort statistics.\n\n\
             The catalog FILE holds one record per line after a header line. \
             Record indices (1-based) are read from standard input, one per \
             line, until the sentinel line 'FIM'. The chosen records are \
             sorted with the requested algorithm and ordering key, printed, \
             and a tab-separated line <run-id> <elapsed-ns> <comparisons> is \
             appended to the log file.",
        )
        .arg(
            Arg::new("file")
                .help(format!("Catalog file to load [default: {DEFAULT_CATALOG}]"))
                .value_name("FILE"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Sorting algorithm to run")
                .value_name("ALGO")
                .value_parser(["heap", "merge", "partial-selection"])
                .default_value("heap"),
        )
        .arg(
            Arg::new("key")
                .short('s')
                .long("key")
                .help("Ordering key (defaults to the algorithm's usual key)")
                .value_name("KEY")
                .value_parser(["measurement", "category", "name"]),
        )
        .arg(
            Arg::new("take")
                .short('k')
                .long("take")
                .help("Positions sorted by the partial selection sort")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("run-id")
                .long("run-id")
                .help("Identifier written as the first statistics field")
                .value_name("ID")
                .default_value("catalog-sort"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Statistics log file [default: <run-id>_<algorithm>.txt]")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the sorted records")
                .action(clap::ArgAction::SetTrue),
        )
}

fn parse_config_from_matches(matches: &ArgMatches) -> CatalogResult<RunConfig> {
    let algorithm: Algorithm = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or("heap")
        .parse()?;
    let run_id = matches
        .get_one::<String>("run-id")
        .cloned()
        .unwrap_or_else(|| "catalog-sort".to_string());

    let mut config = RunConfig::new(algorithm, &run_id);

    if let Some(file) = matches.get_one::<String>("file") {
        config.catalog_path = PathBuf::from(file);
    }
    if let Some(key) = matches.get_one::<String>("key") {
        config.key = key.parse()?;
    }
    if let Some(&take) = matches.get_one::<usize>("take") {
        config.take = take;
    }
    config.log_path = match matches.get_one::<String>("log") {
        Some(file) => PathBuf::from(file),
        None => PathBuf::from(default_log_name(&run_id, algorithm)),
    };
    config.quiet = matches.get_flag("quiet");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_sort::compare::SortKey;
    use catalog_sort::config::DEFAULT_TAKE;
    use catalog_sort::parser::parse_record;

    fn record(id: u32, name: &str, size: f64) -> Record {
        parse_record(&format!(
            "{id},1,{name},test,normal,,\"['Plain']\",1.0,{size},45,0,01/01/2000"
        ))
        .unwrap()
    }

    fn config(algorithm: Algorithm) -> RunConfig {
        let mut config = RunConfig::new(algorithm, "test");
        config.key = SortKey::Measurement;
        config
    }

    #[test]
    fn test_cli_defaults() {
        let matches = build_cli().get_matches_from(["catalog-sort"]);
        let config = parse_config_from_matches(&matches).unwrap();
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!(config.key, SortKey::Measurement);
        assert_eq!(config.take, DEFAULT_TAKE);
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG));
        assert_eq!(config.log_path, PathBuf::from("catalog-sort_heapsort.txt"));
    }

    #[test]
    fn test_cli_overrides() {
        let matches = build_cli().get_matches_from([
            "catalog-sort",
            "-a",
            "partial-selection",
            "--key",
            "category",
            "--take",
            "3",
            "--run-id",
            "842986",
            "-q",
            "records.csv",
        ]);
        let config = parse_config_from_matches(&matches).unwrap();
        assert_eq!(config.algorithm, Algorithm::PartialSelection);
        assert_eq!(config.key, SortKey::PrimaryCategory);
        assert_eq!(config.take, 3);
        assert_eq!(config.run_id, "842986");
        assert_eq!(
            config.log_path,
            PathBuf::from("842986_partial_selection.txt")
        );
        assert!(config.quiet);
        assert_eq!(config.catalog_path, PathBuf::from("records.csv"));
    }

    #[test]
    fn test_run_sort_counts_through_the_comparator() {
        // Selection order 3, 1, 2 over sizes [0.7, 1.0, 0.5]: the
        // selected sequence is already ascending by size.
        let mut selected = vec![
            record(3, "Droplet", 0.5),
            record(1, "Seedling", 0.7),
            record(2, "Ember", 1.0),
        ];

        let stats = run_sort(&mut selected, &config(Algorithm::Merge)).unwrap();
        let sizes: Vec<f64> = selected.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![0.5, 0.7, 1.0]);
        // One comparison inside the [b, c] half, one in the outer merge
        // before the left run drains.
        assert_eq!(stats.comparisons, 2);
    }

    #[test]
    fn test_run_sort_partial_selection_reports_its_tally() {
        let mut selected = vec![
            record(1, "Seedling", 0.7),
            record(2, "Ember", 1.0),
            record(3, "Droplet", 0.5),
        ];

        let mut cfg = config(Algorithm::PartialSelection);
        cfg.key = SortKey::Name;
        cfg.take = 2;
        let stats = run_sort(&mut selected, &cfg).unwrap();

        // k*n - k*(k+1)/2 with n = 3, k = 2.
        assert_eq!(stats.comparisons, 3);
        assert_eq!(selected[0].name, "Droplet");
        assert_eq!(selected[1].name, "Ember");
    }

    #[test]
    fn test_run_sort_rejects_take_beyond_selection() {
        let mut selected = vec![record(1, "Seedling", 0.7)];
        let mut cfg = config(Algorithm::PartialSelection);
        cfg.take = 5;
        assert!(run_sort(&mut selected, &cfg).is_err());
    }
}
