//! Terminal backend preference.
//!
//! A command-line value wins and locks the preference; otherwise
//! `NTWIN_TERM_BACKEND` is consulted. Terminals without scrollback always use
//! the legacy backend.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::config::{non_empty_env, TERM_BACKEND_ENV};
use crate::error::BackendError;

/// Backend actually used for a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermBackend {
    Legacy,
    Vterm,
}

impl TermBackend {
    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Vterm => "vterm",
        }
    }

    /// `TERM` value advertised to programs running under this backend.
    pub fn term_env(self) -> &'static str {
        match self {
            Self::Legacy => "linux",
            Self::Vterm => "xterm-256color",
        }
    }
}

impl fmt::Display for TermBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User preference before the scrollback check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermBackendPref {
    Auto,
    #[default]
    Vterm,
    Legacy,
}

impl TermBackendPref {
    /// Case-insensitive alias lookup; `None` for unknown or empty values.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.to_ascii_lowercase();
        match normalized.as_str() {
            "auto" | "default" => Some(Self::Auto),
            "vterm" | "xterm" | "xterm-256color" => Some(Self::Vterm),
            "legacy" | "linux" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Vterm => "vterm",
            Self::Legacy => "legacy",
        }
    }
}

/// Tracks the preference and whether the command line has fixed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendSelector {
    pref: TermBackendPref,
    locked: bool,
}

impl BackendSelector {
    pub fn pref(&self) -> TermBackendPref {
        self.pref
    }

    /// Apply a command-line value. Unknown values are rejected and leave the
    /// selector unchanged.
    pub fn apply_arg(&mut self, value: &str) -> Result<(), BackendError> {
        let pref = TermBackendPref::parse(value)
            .ok_or_else(|| BackendError::UnknownBackend(value.to_string()))?;
        self.pref = pref;
        self.locked = true;
        Ok(())
    }

    /// Apply `NTWIN_TERM_BACKEND` unless a command-line value was given.
    /// Unknown values are logged and ignored.
    pub fn apply_env_if_unset<FEnv>(&mut self, env_lookup: FEnv)
    where
        FEnv: Fn(&str) -> Option<String>,
    {
        if self.locked {
            return;
        }
        let Some(value) = non_empty_env(&env_lookup, TERM_BACKEND_ENV) else {
            return;
        };
        match TermBackendPref::parse(&value) {
            Some(pref) => self.pref = pref,
            None => warn!("ignoring invalid {TERM_BACKEND_ENV}={value}"),
        }
    }

    /// Pick the backend for a terminal with `scrollback_lines` of history.
    pub fn decide(&self, scrollback_lines: i32) -> TermBackend {
        if scrollback_lines <= 0 || self.pref == TermBackendPref::Legacy {
            TermBackend::Legacy
        } else {
            TermBackend::Vterm
        }
    }
}
