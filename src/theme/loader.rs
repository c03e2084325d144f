//! Reads a theme file line by line and applies its directives.
//!
//! A bad line never aborts the load: it is logged with its path and line
//! number, recorded in the [`LoadReport`], and skipped. Only failing to open
//! a located file fails the whole load.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::directive::{Directive, DirectiveError};
use super::lexer::{sanitize, tokenize, MAX_TOKENS};
use super::state::ThemeState;
use crate::config::{resolve_theme_source, ThemeSource};
use crate::error::ThemeError;

/// Read buffer size per line, terminator included; longer lines are cut.
pub const LINE_BUFFER_LEN: usize = 4096;

/// A dropped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    pub path: PathBuf,
    /// 1-based.
    pub line: u32,
    pub error: DirectiveError,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.error)
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File that was read; `None` when no theme file exists.
    pub path: Option<PathBuf>,
    pub lines: u32,
    /// Directives written into the theme state.
    pub applied: usize,
    pub warnings: Vec<LineWarning>,
    /// Set when reading stopped early on an I/O error.
    pub read_error: Option<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.read_error.is_none()
    }
}

/// Sanitize, tokenize, and parse one raw line. `Ok(None)` means the line is
/// blank or a comment.
pub fn parse_theme_line(line: &[u8]) -> Result<Option<Directive>, DirectiveError> {
    let sanitized = sanitize(line);
    if sanitized.is_empty() {
        return Ok(None);
    }
    let tokens = tokenize(sanitized, MAX_TOKENS);
    if tokens.is_empty() {
        return Ok(None);
    }
    Directive::parse(&tokens).map(Some)
}

/// Locate the theme file via the environment and search path, then load it.
pub fn load_theme_config(state: &mut ThemeState) -> Result<LoadReport, ThemeError> {
    load_theme_source(state, &resolve_theme_source(None))
}

/// Load from an already resolved source.
pub fn load_theme_source(
    state: &mut ThemeState,
    source: &ThemeSource,
) -> Result<LoadReport, ThemeError> {
    match source.path() {
        Some(path) => load_theme_file(state, path),
        None => {
            debug!("no theme file found; keeping built-in theme");
            Ok(LoadReport::default())
        }
    }
}

/// Open and load `path`.
pub fn load_theme_file(state: &mut ThemeState, path: &Path) -> Result<LoadReport, ThemeError> {
    let file = File::open(path).map_err(|source| {
        warn!("failed to open theme file {}: {source}", path.display());
        ThemeError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), "loading theme file");
    Ok(load_theme_from_reader(state, path, BufReader::new(file)))
}

/// Apply every line of `reader`; `path` labels diagnostics.
pub fn load_theme_from_reader<R: BufRead>(
    state: &mut ThemeState,
    path: &Path,
    mut reader: R,
) -> LoadReport {
    let mut report = LoadReport {
        path: Some(path.to_path_buf()),
        ..LoadReport::default()
    };
    let mut line = Vec::with_capacity(LINE_BUFFER_LEN);
    loop {
        match read_bounded_line(&mut reader, &mut line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!(
                    "{}:{}: read failed, ignoring rest of file: {e}",
                    path.display(),
                    report.lines + 1
                );
                report.read_error = Some(e.to_string());
                break;
            }
        }
        report.lines += 1;
        match parse_theme_line(&line) {
            Ok(Some(directive)) => {
                debug!(line = report.lines, ?directive, "applying theme directive");
                directive.apply(state);
                report.applied += 1;
            }
            Ok(None) => {}
            Err(error) => {
                let warning = LineWarning {
                    path: path.to_path_buf(),
                    line: report.lines,
                    error,
                };
                warn!("{warning}");
                report.warnings.push(warning);
            }
        }
    }
    report
}

/// Read one line into `buf`, keeping at most `LINE_BUFFER_LEN - 1` bytes.
///
/// When the line is longer, the kept prefix is returned and the rest of the
/// line is consumed and discarded. Returns `false` at end of input.
fn read_bounded_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    let limit = LINE_BUFFER_LEN - 1;
    buf.clear();
    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(!buf.is_empty());
        }
        let window = &available[..available.len().min(limit - buf.len())];
        let (taken, found_newline) = match window.iter().position(|&b| b == b'\n') {
            Some(nl) => (nl + 1, true),
            None => (window.len(), false),
        };
        buf.extend_from_slice(&window[..taken]);
        reader.consume(taken);
        if found_newline {
            return Ok(true);
        }
        if buf.len() == limit {
            break;
        }
    }
    discard_rest_of_line(reader)?;
    Ok(true)
}

fn discard_rest_of_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(nl) => {
                reader.consume(nl + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}
