//! CLI entry point for twtheme.

mod cli;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use twtheme::backend::BackendSelector;
use twtheme::config::{resolve_theme_source, ThemeSource};
use twtheme::logging::init_logging;
use twtheme::render::{theme_report_json, Renderer, ThemeSummary};
use twtheme::theme::{load_theme_from_reader, load_theme_source, ThemeState};

const EXIT_FAILURE: u8 = 1;
const EXIT_WARNINGS: u8 = 2;
const STDIN_PATH: &str = "-";

fn main() -> ExitCode {
    let args = cli::Args::parse();
    let color = !args.no_color && !args.json;
    init_logging(!args.no_color);
    let renderer = Renderer::new(color);

    let mut selector = BackendSelector::default();
    if let Some(value) = &args.term_backend {
        if let Err(e) = selector.apply_arg(value) {
            eprintln!("{}", renderer.error(&e.to_string()));
            return ExitCode::from(EXIT_FAILURE);
        }
    }
    selector.apply_env_if_unset(|name| std::env::var(name).ok());

    let mut state = ThemeState::default();
    let (source, report) = if args.theme.as_deref() == Some(Path::new(STDIN_PATH)) {
        let path = PathBuf::from(STDIN_PATH);
        let report = load_theme_from_reader(&mut state, &path, io::stdin().lock());
        (ThemeSource::Explicit(path), report)
    } else {
        let source = resolve_theme_source(args.theme.as_deref());
        debug!(source = source.label(), path = ?source.path(), "resolved theme source");
        match load_theme_source(&mut state, &source) {
            Ok(report) => (source, report),
            Err(e) => {
                eprintln!("{}", renderer.error(&e.to_string()));
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    };

    let summary = ThemeSummary {
        source: &source,
        state: &state,
        report: &report,
        backend_pref: selector.pref(),
        backend: selector.decide(args.scrollback),
    };

    if args.json {
        match theme_report_json(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{}", renderer.error(&format!("failed to encode JSON: {e}")));
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    } else {
        for line in renderer.theme_report(&summary) {
            println!("{line}");
        }
    }

    if args.strict && !report.is_clean() {
        return ExitCode::from(EXIT_WARNINGS);
    }
    ExitCode::SUCCESS
}
