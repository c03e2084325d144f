//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::{non_empty_env, LOG_FILTER_ENV};

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter directives from `TWTHEME_LOG`, or the default level.
pub fn log_filter_with<FEnv>(env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty_env(&env_lookup, LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(color: bool) {
    let directives = log_filter_with(|name| std::env::var(name).ok());
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
