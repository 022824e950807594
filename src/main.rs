//! loki-index-dump CLI - Dump Loki labels and their values to JSON
//!
//! Usage: loki-index-dump [-days N] [-output PATH]

mod cli;
mod dump_cmd;
mod version;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use cli::{parse_args, print_usage, Command};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match parse_args() {
        Ok(Command::Help) => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{}", version::version());
            ExitCode::SUCCESS
        }
        Ok(Command::Dump(config)) => {
            if let Err(e) = dump_cmd::run_dump(config) {
                eprintln!("Error: {:#}", e);
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            ExitCode::from(2)
        }
    }
}
