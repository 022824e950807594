//! Fetch phase: labels first, then the values of each label.
//!
//! A failed label listing aborts the fetch. A failed value listing only
//! drops that label from `values` and is recorded in the report.

use chrono::{DateTime, Utc};

use crate::client::LabelSource;
use crate::error::{DumpError, Result};
use crate::snapshot::IndexSnapshot;

/// A label whose values could not be fetched.
#[derive(Debug)]
pub struct LabelFailure {
    pub label: String,
    pub error: DumpError,
}

/// Outcome of a completed fetch phase.
#[derive(Debug)]
pub struct FetchReport {
    pub snapshot: IndexSnapshot,
    pub failures: Vec<LabelFailure>,
}

/// Progress callbacks for the fetch phase.
///
/// All methods default to no-ops.
pub trait FetchProgress {
    /// About to run `command`; `label` is set for value listings.
    fn executing(&mut self, _label: Option<&str>, _command: &str) {}
    fn labels_fetched(&mut self, _count: usize) {}
    fn label_started(&mut self, _index: usize, _total: usize, _label: &str) {}
    fn label_finished(&mut self, _label: &str, _values: usize) {}
    fn label_failed(&mut self, _failure: &LabelFailure) {}
}

/// [`FetchProgress`] that reports nothing.
pub struct Silent;

impl FetchProgress for Silent {}

/// Fetch all labels and their values from `source`.
///
/// `dumped_at` is stamped on the snapshot before any fetching happens.
pub fn fetch_index<S, P>(
    source: &S,
    days: i64,
    dumped_at: DateTime<Utc>,
    progress: &mut P,
) -> Result<FetchReport>
where
    S: LabelSource + ?Sized,
    P: FetchProgress + ?Sized,
{
    tracing::info!(days, "fetching labels");
    if let Some(command) = source.command_line(None, days) {
        progress.executing(None, &command);
    }
    let labels = source.list_labels(days)?;
    progress.labels_fetched(labels.len());

    let mut snapshot = IndexSnapshot::new(labels.clone(), dumped_at, days);
    let mut failures = Vec::new();
    let total = labels.len();

    for (index, label) in labels.into_iter().enumerate() {
        progress.label_started(index + 1, total, &label);
        if let Some(command) = source.command_line(Some(&label), days) {
            progress.executing(Some(&label), &command);
        }

        match source.list_label_values(&label, days) {
            Ok(values) => {
                progress.label_finished(&label, values.len());
                snapshot.insert_values(&label, values);
            }
            Err(error) => {
                // Reported to the user through `progress`.
                tracing::debug!(label = %label, error = %error, "skipping label");
                let failure = LabelFailure {
                    error: DumpError::PerLabelFetch {
                        label: label.clone(),
                        source: Box::new(error),
                    },
                    label,
                };
                progress.label_failed(&failure);
                failures.push(failure);
            }
        }
    }

    tracing::info!(labels = total, failed = failures.len(), "fetch finished");
    Ok(FetchReport { snapshot, failures })
}
