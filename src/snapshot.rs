//! The index snapshot and its JSON file format.
//!
//! ```json
//! {
//!   "labels": ["job", "env"],
//!   "values": { "job": ["loki", "promtail"] },
//!   "dumped_at": "2024-01-15T10:30:00Z",
//!   "days": 30
//! }
//! ```
//!
//! A label listed in `labels` but missing from `values` had its value fetch
//! fail.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DumpError, Result};

/// Labels and their values as returned by the log server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// Label names in the order the client returned them.
    pub labels: Vec<String>,
    /// Values per label, only for labels whose fetch succeeded.
    pub values: BTreeMap<String, Vec<String>>,
    /// When the fetch phase started.
    pub dumped_at: DateTime<Utc>,
    /// Look-back window in days.
    pub days: i64,
}

impl IndexSnapshot {
    /// Start a snapshot for `labels` with no values yet.
    pub fn new(labels: Vec<String>, dumped_at: DateTime<Utc>, days: i64) -> Self {
        Self {
            labels,
            values: BTreeMap::new(),
            dumped_at,
            days,
        }
    }

    /// Record the values of one label.
    pub fn insert_values(&mut self, label: &str, values: Vec<String>) {
        self.values.insert(label.to_string(), values);
    }

    /// Labels with no entry in `values`, in label order.
    pub fn missing_labels(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|label| !self.values.contains_key(label.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Encode as pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Write `snapshot` to `path` in one whole-file write.
///
/// New files are created with mode `0644` on Unix.
pub fn write_snapshot(snapshot: &IndexSnapshot, path: &Path) -> Result<()> {
    let bytes = snapshot.to_json_pretty()?;
    let io_err = |source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}

/// Load a snapshot previously written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<IndexSnapshot> {
    let bytes = fs::read(path).map_err(|source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample() -> IndexSnapshot {
        let dumped_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let mut snapshot =
            IndexSnapshot::new(vec!["job".to_string(), "env".to_string()], dumped_at, 30);
        snapshot.insert_values("job", vec!["loki".to_string(), "promtail".to_string()]);
        snapshot
    }

    #[test]
    fn test_json_layout() {
        let json = String::from_utf8(sample().to_json_pretty().unwrap()).unwrap();
        let expected = r#"{
  "labels": [
    "job",
    "env"
  ],
  "values": {
    "job": [
      "loki",
      "promtail"
    ]
  },
  "dumped_at": "2024-01-15T10:30:00Z",
  "days": 30
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_values_keys_sorted() {
        let mut snapshot = sample();
        snapshot.labels.push("app".to_string());
        snapshot.insert_values("app", vec!["api".to_string()]);
        let json = String::from_utf8(snapshot.to_json_pretty().unwrap()).unwrap();
        let app = json.find("\"app\": [").unwrap();
        let job = json.find("\"job\": [").unwrap();
        assert!(app < job);
    }

    #[test]
    fn test_missing_labels() {
        assert_eq!(sample().missing_labels(), vec!["env"]);
    }

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");
        let snapshot = sample();

        write_snapshot(&snapshot, &path).unwrap();
        let loaded = read_snapshot(&path).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.labels, vec!["job", "env"]);
        assert!(!loaded.values.contains_key("env"));
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");
        fs::write(&path, vec![b'x'; 4096]).unwrap();

        write_snapshot(&sample(), &path).unwrap();

        assert_eq!(read_snapshot(&path).unwrap(), sample());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("metadata.json");
        write_snapshot(&sample(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only remove bits
        assert_eq!(mode & !0o644, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no/such/dir/metadata.json");
        let err = write_snapshot(&sample(), &path).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
    }
}
