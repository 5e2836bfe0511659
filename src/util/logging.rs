//! Log filter for the file logger

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`]
pub fn env_filter() -> EnvFilter {
    log_filter(std::env::var("RUST_LOG").ok().as_deref())
}

/// Build a filter from explicit directives such as `info` or
/// `invoicer=debug`. Blank or invalid directives give the default level.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
