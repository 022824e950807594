//! Access to the external `logcli` client.
//!
//! The client prints one entry per line. It sometimes interleaves log lines
//! such as the URL it fetched, which always start with `http`. Those are
//! filtered out by [`parse_index_lines`]. The filter depends on the client's
//! output format and is kept exactly as-is.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{DumpError, Result};

/// Something that can enumerate labels and their values.
pub trait LabelSource {
    /// List every label seen in the last `days` days.
    fn list_labels(&self, days: i64) -> Result<Vec<String>>;

    /// List every value of `label` seen in the last `days` days.
    fn list_label_values(&self, label: &str, days: i64) -> Result<Vec<String>>;

    /// Command line a listing would run, if the source runs one.
    fn command_line(&self, _label: Option<&str>, _days: i64) -> Option<String> {
        None
    }
}

/// [`LabelSource`] backed by the `logcli` executable.
#[derive(Debug, Clone)]
pub struct LogCli {
    program: PathBuf,
}

impl LogCli {
    /// Create a client that runs `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[String]) -> Result<Vec<String>> {
        let command = self.display_command(args);
        tracing::debug!(command = %command, "executing");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| DumpError::ExternalCommand {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(DumpError::ExternalCommand { command, reason });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let entries = parse_index_lines(&stdout);
        tracing::debug!(command = %command, entries = entries.len(), "parsed output");
        Ok(entries)
    }

    fn display_command(&self, args: &[String]) -> String {
        let program = self
            .program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.to_string_lossy().into_owned());
        std::iter::once(program)
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LabelSource for LogCli {
    fn list_labels(&self, days: i64) -> Result<Vec<String>> {
        self.run(&labels_args(None, days))
    }

    fn list_label_values(&self, label: &str, days: i64) -> Result<Vec<String>> {
        self.run(&labels_args(Some(label), days))
    }

    fn command_line(&self, label: Option<&str>, days: i64) -> Option<String> {
        Some(self.display_command(&labels_args(label, days)))
    }
}

/// Arguments for `logcli labels [<label>] --since <days>d`.
pub fn labels_args(label: Option<&str>, days: i64) -> Vec<String> {
    let mut args = vec!["labels".to_string()];
    if let Some(label) = label {
        args.push(label.to_string());
    }
    args.push("--since".to_string());
    args.push(format!("{}d", days));
    args
}

/// Split client output into index entries.
///
/// Lines are trimmed; empty lines and lines starting with `http` are
/// dropped. Order is preserved and duplicates are kept.
pub fn parse_index_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("http"))
        .map(str::to_string)
        .collect()
}
