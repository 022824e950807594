//! CLI argument parsing for loki-index-dump
//!
//! Flags follow the single-dash style (`-days 7`), but `--days 7` and
//! `-days=7` are accepted too.

use anyhow::Result;
use loki_index_dump::DumpConfig;
use std::path::PathBuf;

pub const USAGE: &str = "\
loki-index-dump - Dump Loki labels and their values to JSON

Usage:
  loki-index-dump [options]

Options:
  -days        Number of days to look back (default: 30)
  -output      Output file path (default: metadata.json)
  -help        Show this help message
  -version     Show version

Examples:
  # Dump last 30 days of labels to metadata.json
  loki-index-dump

  # Dump last 7 days to a specific file
  loki-index-dump -days 7 -output weekly-index.json

Environment:
  LOKI_ADDR    Loki server address (required by logcli)
";

pub fn print_usage() {
    eprint!("{}", USAGE);
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Dump(DumpConfig),
    Help,
    Version,
}

pub fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parse arguments (without the program name).
///
/// `-help` and `-version` win as soon as they are seen, like the rest of
/// the line was never there. Parsing stops at the first non-flag argument
/// or at `--`; whatever follows is ignored.
pub fn parse_args_from(args: &[String]) -> Result<Command> {
    let mut config = DumpConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--" || arg == "-" {
            break;
        }
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            break;
        };
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        match name {
            "help" | "h" => return Ok(Command::Help),
            "version" => return Ok(Command::Version),
            "days" | "output" => {
                let value = match inline {
                    Some(value) => value,
                    None => {
                        if i + 1 >= args.len() {
                            return Err(anyhow::anyhow!("-{} requires an argument", name));
                        }
                        i += 1;
                        args[i].clone()
                    }
                };
                if name == "days" {
                    config.days = parse_days(&value)?;
                } else {
                    config.output = PathBuf::from(value);
                }
                i += 1;
            }
            _ => {
                return Err(anyhow::anyhow!("Unknown argument: {}", arg));
            }
        }
    }

    if i < args.len() {
        tracing::debug!(ignored = ?&args[i..], "ignoring trailing arguments");
    }

    Ok(Command::Dump(config))
}

/// Any integer is accepted and passed through to `--since` unchanged.
fn parse_days(value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for -days: {}", value))
}
