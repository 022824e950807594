//! loki-index-dump: snapshot a Loki label index to JSON
//!
//! The label index is read through the external `logcli` client:
//!
//! 1. [`preflight`] checks that `LOKI_ADDR` is set and `logcli` is on `PATH`.
//! 2. [`fetch`] lists labels, then the values of each label. A label whose
//!    values cannot be fetched is left out of `values` and the run goes on.
//! 3. [`snapshot`] writes the result as pretty-printed JSON.
//!
//! Everything runs sequentially; each client call finishes before the next
//! one starts.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod preflight;
pub mod snapshot;

pub use client::{labels_args, parse_index_lines, LabelSource, LogCli};
pub use config::{DumpConfig, DEFAULT_DAYS, DEFAULT_OUTPUT, LOGCLI_PROGRAM, LOKI_ADDR_VAR};
pub use error::{DumpError, Result};
pub use fetch::{fetch_index, FetchProgress, FetchReport, LabelFailure, Silent};
pub use preflight::{check_env, check_preconditions, locate_client};
pub use snapshot::{read_snapshot, write_snapshot, IndexSnapshot};
