//! Environment variables consulted at startup.

use std::path::PathBuf;

/// Explicit theme file path, checked before the search path.
pub const THEME_FILE_ENV: &str = "TWTHEME_FILE";

/// Terminal backend preference, used only when no CLI value was given.
pub const TERM_BACKEND_ENV: &str = "NTWIN_TERM_BACKEND";

/// `tracing` filter directive for the CLI (e.g. `debug`, `twtheme=trace`).
pub const LOG_FILTER_ENV: &str = "TWTHEME_LOG";

/// Look up `name`, treating unset and blank values the same.
pub fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name).filter(|value| !value.trim().is_empty())
}

/// Theme path override from `TWTHEME_FILE`.
pub(super) fn theme_file_override_with<FEnv>(env_lookup: &FEnv) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty_env(env_lookup, THEME_FILE_ENV).map(|value| PathBuf::from(value.trim()))
}
