//! twtheme: loader for twin window-manager theme files.
//!
//! A theme file customizes the glyphs drawn for window chrome and the default
//! color attributes of UI elements. Lines that fail to parse are reported and
//! skipped; everything else is applied on top of the built-in theme.
//!
//! # Quick start
//!
//! ```no_run
//! use twtheme::theme::{load_theme_config, ColorTarget, ThemeState};
//!
//! let mut state = ThemeState::default();
//! let report = load_theme_config(&mut state).unwrap();
//! for warning in &report.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("{}", state.color(ColorTarget::Border));
//! ```

pub mod backend;
pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
