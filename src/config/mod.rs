//! Locating the theme file.
//!
//! Source precedence (highest wins):
//! 1. Explicit path (the `--theme` CLI flag)
//! 2. `TWTHEME_FILE` environment variable
//! 3. First existing file on the search path (see [`paths`])
//! 4. Nothing: the built-in theme stays in effect

use std::path::{Path, PathBuf};

mod env;
mod paths;

pub use env::{non_empty_env, LOG_FILTER_ENV, TERM_BACKEND_ENV, THEME_FILE_ENV};
pub use paths::{candidate_paths, config_root_dir, find_config_file, ConfigFile};

/// Logical name of the theme file on the search path.
pub const THEME_FILE_NAME: &str = "twtheme";

/// Where the theme file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Path given on the command line; must be openable.
    Explicit(PathBuf),
    /// Path from `TWTHEME_FILE`; must be openable.
    Env(PathBuf),
    /// Found on the search path.
    Discovered(ConfigFile),
    /// No theme file; loading is a no-op.
    NotFound,
}

impl ThemeSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Env(path) => Some(path),
            Self::Discovered(file) => Some(&file.path),
            Self::NotFound => None,
        }
    }

    /// Short label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "command line",
            Self::Env(_) => THEME_FILE_ENV,
            Self::Discovered(_) => "search path",
            Self::NotFound => "built-in",
        }
    }
}

/// Resolve the theme file using the process environment.
pub fn resolve_theme_source(explicit: Option<&Path>) -> ThemeSource {
    resolve_theme_source_with(
        explicit,
        |name| std::env::var(name).ok(),
        || find_config_file(THEME_FILE_NAME),
    )
}

pub(crate) fn resolve_theme_source_with<FEnv, FFind>(
    explicit: Option<&Path>,
    env_lookup: FEnv,
    find: FFind,
) -> ThemeSource
where
    FEnv: Fn(&str) -> Option<String>,
    FFind: FnOnce() -> Option<ConfigFile>,
{
    if let Some(path) = explicit {
        return ThemeSource::Explicit(path.to_path_buf());
    }
    if let Some(path) = env::theme_file_override_with(&env_lookup) {
        return ThemeSource::Env(path);
    }
    match find() {
        Some(file) => ThemeSource::Discovered(file),
        None => ThemeSource::NotFound,
    }
}
