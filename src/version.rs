//! Version and build information
//!
//! Build metadata (commit SHA, build date, rustc version) is injected by build.rs.

/// Full version line printed by `-version`
///
/// Returns format: "loki-index-dump version {version} ({commit} {date}) rustc {rustc_version}"
pub fn version() -> String {
    format!(
        "loki-index-dump version {} ({} {}) rustc {}",
        env!("CARGO_PKG_VERSION"),
        build_commit(),
        build_date(),
        rustc_version()
    )
}

/// Returns "unknown" if not built inside a git checkout
pub fn build_commit() -> &'static str {
    option_env!("LOKI_INDEX_DUMP_COMMIT_SHA").unwrap_or("unknown")
}

pub fn build_date() -> &'static str {
    option_env!("LOKI_INDEX_DUMP_BUILD_DATE").unwrap_or("unknown")
}

pub fn rustc_version() -> &'static str {
    option_env!("LOKI_INDEX_DUMP_RUSTC_VERSION").unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        let line = version();
        assert!(line.starts_with(&format!(
            "loki-index-dump version {} (",
            env!("CARGO_PKG_VERSION")
        )));
        assert!(line.contains(" rustc "));
    }
}
