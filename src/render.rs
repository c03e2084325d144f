//! Human-readable and JSON summaries of a loaded theme.

use crossterm::style::Stylize;
use serde::Serialize;

use crate::backend::{TermBackend, TermBackendPref};
use crate::config::ThemeSource;
use crate::theme::{ChromeTarget, ColorAttr, ColorTarget, LoadReport, ThemeState};

const INDENT_1: &str = "  ";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const SWATCH_TEXT: &str = " Aa ";

/// Line-oriented summary renderer, with or without ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn section(&self, title: &str) -> String {
        if self.color {
            format!("{}", title.bold())
        } else {
            format!("{title}:")
        }
    }

    pub fn field(&self, key: &str, value: &str) -> String {
        format!("{INDENT_1}{key:<16} {value}")
    }

    pub fn warn(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_WARNING.yellow().bold())
        } else {
            format!("{LABEL_WARNING} {msg}")
        }
    }

    pub fn error(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_ERROR.red().bold())
        } else {
            format!("{LABEL_ERROR} {msg}")
        }
    }

    /// Sample text drawn in `attr`, followed by the attribute in theme syntax.
    pub fn swatch(&self, attr: ColorAttr) -> String {
        if self.color {
            let sample = SWATCH_TEXT
                .with(attr.fg().to_crossterm())
                .on(attr.bg().to_crossterm());
            format!("{sample} {attr}")
        } else {
            attr.to_string()
        }
    }

    /// Full text report: source, chrome glyphs, colors, backend, warnings.
    pub fn theme_report(&self, summary: &ThemeSummary<'_>) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(self.section("Theme"));
        let path = summary
            .source
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        lines.push(self.field("source", summary.source.label()));
        lines.push(self.field("path", &path));
        lines.push(self.field(
            "lines",
            &format!("{} read, {} applied", summary.report.lines, summary.report.applied),
        ));

        lines.push(self.section("Chrome"));
        for target in ChromeTarget::ALL {
            let glyphs: String = summary.state.glyphs(target).iter().collect();
            lines.push(self.field(target.name(), &format!("\"{}\"", glyphs.escape_debug())));
        }

        lines.push(self.section("DefaultColors"));
        for target in ColorTarget::ALL {
            lines.push(self.field(target.name(), &self.swatch(summary.state.color(target))));
        }

        lines.push(self.section("Backend"));
        lines.push(self.field("preference", summary.backend_pref.name()));
        lines.push(self.field(
            "selected",
            &format!("{} (TERM={})", summary.backend, summary.backend.term_env()),
        ));

        for warning in &summary.report.warnings {
            lines.push(self.warn(&warning.to_string()));
        }
        if let Some(error) = &summary.report.read_error {
            lines.push(self.warn(&format!("stopped reading early: {error}")));
        }
        lines
    }
}

/// Everything the CLI reports after a load.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSummary<'a> {
    pub source: &'a ThemeSource,
    pub state: &'a ThemeState,
    pub report: &'a LoadReport,
    pub backend_pref: TermBackendPref,
    pub backend: TermBackend,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    source: &'static str,
    path: Option<String>,
    lines: u32,
    applied: usize,
    theme: &'a ThemeState,
    backend_preference: TermBackendPref,
    backend: TermBackend,
    term: &'static str,
    warnings: Vec<String>,
    read_error: Option<&'a str>,
}

/// Pretty JSON form of the summary.
pub fn theme_report_json(summary: &ThemeSummary<'_>) -> serde_json::Result<String> {
    let json = JsonSummary {
        source: summary.source.label(),
        path: summary
            .source
            .path()
            .map(|path| path.display().to_string()),
        lines: summary.report.lines,
        applied: summary.report.applied,
        theme: summary.state,
        backend_preference: summary.backend_pref,
        backend: summary.backend,
        term: summary.backend.term_env(),
        warnings: summary
            .report
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
        read_error: summary.report.read_error.as_deref(),
    };
    serde_json::to_string_pretty(&json)
}
