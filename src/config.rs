//! Run configuration for a dump.

use std::path::PathBuf;

/// Environment variable the external client reads its server address from.
pub const LOKI_ADDR_VAR: &str = "LOKI_ADDR";

/// Name of the external client looked up on `PATH`.
pub const LOGCLI_PROGRAM: &str = "logcli";

/// Default look-back window in days.
pub const DEFAULT_DAYS: i64 = 30;

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "metadata.json";

/// Everything a single dump run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Look-back window passed to the client as `--since <days>d`.
    pub days: i64,
    /// Where the snapshot is written.
    pub output: PathBuf,
    /// Client executable, resolved on `PATH`.
    pub program: String,
    /// Environment variable that must be non-empty before anything runs.
    pub required_env: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            program: LOGCLI_PROGRAM.to_string(),
            required_env: LOKI_ADDR_VAR.to_string(),
        }
    }
}
