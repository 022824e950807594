//! Precondition checks run before any external process is spawned.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::config::DumpConfig;
use crate::error::{DumpError, Result};

/// Fail with [`DumpError::Config`] if `value` is unset or empty.
///
/// Only presence is checked. The client reads the variable itself.
pub fn check_env(name: &str, value: Option<&OsStr>) -> Result<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(DumpError::Config {
            name: name.to_string(),
        }),
    }
}

/// Resolve `program` on `PATH`.
pub fn locate_client(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|_| DumpError::Dependency {
        program: program.to_string(),
    })
}

/// Run all preconditions for `config`, returning the resolved client path.
pub fn check_preconditions(config: &DumpConfig) -> Result<PathBuf> {
    let value = std::env::var_os(&config.required_env);
    check_env(&config.required_env, value.as_deref())?;
    locate_client(&config.program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_check_env_unset() {
        let err = check_env("LOKI_ADDR", None).unwrap_err();
        assert!(matches!(err, DumpError::Config { ref name } if name == "LOKI_ADDR"));
    }

    #[test]
    fn test_check_env_empty() {
        let empty = OsString::new();
        assert!(check_env("LOKI_ADDR", Some(empty.as_os_str())).is_err());
    }

    #[test]
    fn test_check_env_present() {
        let value = OsString::from("http://localhost:3100");
        assert!(check_env("LOKI_ADDR", Some(value.as_os_str())).is_ok());
    }

    #[test]
    fn test_locate_missing_client() {
        let err = locate_client("definitely-not-a-real-logcli-binary").unwrap_err();
        assert!(matches!(err, DumpError::Dependency { .. }));
        assert_eq!(
            err.to_string(),
            "definitely-not-a-real-logcli-binary not found in PATH"
        );
    }
}
