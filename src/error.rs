//! Error types for index dumps.
//!
//! Every failure the dump pipeline can produce maps onto one [`DumpError`]
//! variant. All of them abort a run except [`DumpError::PerLabelFetch`],
//! which the fetcher records and skips.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dump operations.
pub type Result<T> = std::result::Result<T, DumpError>;

/// Errors that can occur while dumping the label index.
#[derive(Debug, Error)]
pub enum DumpError {
    /// A required environment variable is unset or empty.
    #[error("{name} environment variable is not set")]
    Config {
        /// Name of the missing variable.
        name: String,
    },

    /// The external client could not be found on `PATH`.
    #[error("{program} not found in PATH")]
    Dependency {
        /// Program name that was looked up.
        program: String,
    },

    /// The external client could not be started or exited non-zero.
    #[error("{command} failed: {reason}")]
    ExternalCommand {
        /// The command line that was executed.
        command: String,
        /// Spawn error or exit status, plus any stderr output.
        reason: String,
    },

    /// Fetching the values of a single label failed.
    #[error("failed to get values for label {label}: {source}")]
    PerLabelFetch {
        /// The label whose values could not be fetched.
        label: String,
        /// The underlying command failure.
        #[source]
        source: Box<DumpError>,
    },

    /// The snapshot could not be encoded or decoded as JSON.
    #[error("invalid index data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
