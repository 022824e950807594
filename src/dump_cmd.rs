//! Dump command implementation
//!
//! Checks preconditions, fetches the label index through logcli and writes
//! the snapshot. Progress goes to stdout, per-label warnings to stderr.

use anyhow::{Context, Result};
use chrono::Utc;
use loki_index_dump::{
    check_preconditions, fetch_index, write_snapshot, DumpConfig, FetchProgress, LabelFailure,
    LogCli,
};

/// Prints fetch progress the way an interactive user expects it.
struct ConsoleProgress;

impl FetchProgress for ConsoleProgress {
    fn executing(&mut self, label: Option<&str>, command: &str) {
        let indent = if label.is_some() { "  " } else { "" };
        println!("{}Executing: {}", indent, command);
    }

    fn labels_fetched(&mut self, count: usize) {
        println!("Found {} labels", count);
    }

    fn label_started(&mut self, index: usize, total: usize, label: &str) {
        println!("[{}/{}] Fetching values for label: {}", index, total, label);
    }

    fn label_finished(&mut self, _label: &str, values: usize) {
        println!("  Found {} values", values);
    }

    fn label_failed(&mut self, failure: &LabelFailure) {
        eprintln!("  Warning: {}", failure.error);
    }
}

/// Run the dump command
///
/// Nothing is spawned until the environment variable and the client
/// executable have both been checked. The output file is only written
/// once the label listing succeeded.
pub fn run_dump(config: DumpConfig) -> Result<()> {
    let program = check_preconditions(&config)?;

    println!("Dumping Loki index data for the last {} days...", config.days);
    tracing::debug!(program = %program.display(), "resolved client");
    let client = LogCli::new(program);

    println!("Fetching labels...");
    let dumped_at = Utc::now();
    let report = fetch_index(&client, config.days, dumped_at, &mut ConsoleProgress)
        .context("failed to get labels")?;

    write_snapshot(&report.snapshot, &config.output).context("failed to save index data")?;

    println!();
    println!("Index data dumped successfully!");
    println!("Labels dumped: {}", report.snapshot.labels.len());
    let missing = report.snapshot.missing_labels();
    if !missing.is_empty() {
        println!("Labels without values: {} ({})", missing.len(), missing.join(", "));
    }
    println!("Output file: {}", config.output.display());

    Ok(())
}
