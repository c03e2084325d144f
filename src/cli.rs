//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use twtheme::build_info;

/// Load a twin theme file and report the resulting chrome and colors.
#[derive(Debug, Parser)]
#[command(name = "twtheme", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Theme file to load (default: $TWTHEME_FILE, then the config search path).
    #[arg(short = 't', long = "theme", value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// Print the loaded theme as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Terminal backend preference: auto, vterm or legacy.
    #[arg(long = "term-backend", value_name = "NAME")]
    pub term_backend: Option<String>,

    /// Scrollback lines of the terminal; 0 forces the legacy backend.
    #[arg(
        long = "scrollback",
        value_name = "LINES",
        default_value_t = 1000,
        allow_negative_numbers = true
    )]
    pub scrollback: i32,

    /// Exit with status 2 when any theme line was rejected.
    #[arg(long = "strict")]
    pub strict: bool,
}
