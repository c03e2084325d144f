//! Theme configuration: chrome glyphs and default colors.
//!
//! A theme file is plain text with one directive per line:
//!
//! ```text
//! # comments start with '#'
//! Chrome ScrollBarX "░◄►"
//! DefaultColors Gadgets High Yellow On Blue
//! ```
//!
//! Loading mutates a caller-owned [`ThemeState`] seeded with the built-in
//! theme. Each line either applies completely or not at all.

pub mod color;
pub mod directive;
pub mod lexer;
pub mod loader;
pub mod runes;
pub mod state;

pub use color::{parse_color_spec, ColorAttr, ColorSpecError, ColorValue, Hue};
pub use directive::{Directive, DirectiveError, DirectiveKind};
pub use lexer::{sanitize, tokenize, Token, MAX_TOKENS};
pub use loader::{
    load_theme_config, load_theme_file, load_theme_from_reader, load_theme_source,
    parse_theme_line, LineWarning, LoadReport, LINE_BUFFER_LEN,
};
pub use runes::{decode_runes, DecodedRunes, RuneEncoding};
pub use state::{ChromeGlyphs, ChromeTarget, ColorTarget, DefaultColors, ThemeState};
