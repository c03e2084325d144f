//! Theme directives: `Chrome <Target> "<glyphs>"` and
//! `DefaultColors <Target> <ColorSpec>`.
//!
//! Parsing is pure; a [`Directive`] only exists once every argument has been
//! validated, and applying it is the single point where theme state changes.

use std::fmt;

use super::color::{parse_color_spec, ColorAttr, ColorSpecError};
use super::lexer::Token;
use super::runes::decode_runes;
use super::state::{ChromeTarget, ColorTarget, ThemeState};

/// Directive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Chrome,
    DefaultColors,
}

impl DirectiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::DefaultColors => "DefaultColors",
        }
    }

    fn from_token(token: &Token) -> Option<Self> {
        [Self::Chrome, Self::DefaultColors]
            .into_iter()
            .find(|kind| token.is_keyword(kind.keyword()))
    }

    fn usage(self) -> &'static str {
        match self {
            Self::Chrome => "<Target> <String>",
            Self::DefaultColors => "<Target> <ColorSpec>",
        }
    }
}

/// One validated theme-file statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `glyphs` holds exactly `target.arity()` code points.
    Chrome {
        target: ChromeTarget,
        glyphs: Vec<char>,
    },
    DefaultColors {
        target: ColorTarget,
        color: ColorAttr,
    },
}

/// Why a line's directive was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    UnknownDirective(String),
    /// Fewer than keyword, target, and one value token.
    MissingArguments(DirectiveKind),
    UnknownChromeTarget(String),
    UnknownColorTarget(String),
    GlyphsTooShort {
        target: ChromeTarget,
        expected: usize,
        found: usize,
    },
    InvalidColorSpec(ColorSpecError),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirective(word) => write!(f, "unknown theme directive '{word}'"),
            Self::MissingArguments(kind) => {
                write!(f, "{} expects {}", kind.keyword(), kind.usage())
            }
            Self::UnknownChromeTarget(name) => write!(f, "unknown Chrome target '{name}'"),
            Self::UnknownColorTarget(name) => {
                write!(f, "unknown DefaultColors target '{name}'")
            }
            Self::GlyphsTooShort {
                target,
                expected,
                found,
            } => write!(
                f,
                "Chrome value too short for {}: expected {expected} glyphs, found {found}",
                target.name()
            ),
            Self::InvalidColorSpec(e) => write!(f, "invalid color spec: {e}"),
        }
    }
}

impl std::error::Error for DirectiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColorSpec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorSpecError> for DirectiveError {
    fn from(e: ColorSpecError) -> Self {
        Self::InvalidColorSpec(e)
    }
}

impl Directive {
    /// Build a directive from the tokens of one non-empty line.
    pub fn parse(tokens: &[Token]) -> Result<Directive, DirectiveError> {
        let Some(keyword) = tokens.first() else {
            return Err(DirectiveError::UnknownDirective(String::new()));
        };
        let kind = DirectiveKind::from_token(keyword)
            .ok_or_else(|| DirectiveError::UnknownDirective(keyword.text().into_owned()))?;
        if tokens.len() < 3 {
            return Err(DirectiveError::MissingArguments(kind));
        }
        let target = &tokens[1];

        match kind {
            DirectiveKind::Chrome => {
                let target = ChromeTarget::from_name(target.as_bytes()).ok_or_else(|| {
                    DirectiveError::UnknownChromeTarget(target.text().into_owned())
                })?;
                let glyphs = chrome_glyphs(target, &tokens[2])?;
                Ok(Directive::Chrome { target, glyphs })
            }
            DirectiveKind::DefaultColors => {
                let target = ColorTarget::from_name(target.as_bytes()).ok_or_else(|| {
                    DirectiveError::UnknownColorTarget(target.text().into_owned())
                })?;
                let color = parse_color_spec(tokens, 2)?;
                Ok(Directive::DefaultColors { target, color })
            }
        }
    }

    /// Write this directive into its slot.
    pub fn apply(&self, state: &mut ThemeState) {
        match self {
            Directive::Chrome { target, glyphs } => {
                let slot = state.chrome.get_mut(*target);
                let n = slot.len().min(glyphs.len());
                slot[..n].copy_from_slice(&glyphs[..n]);
            }
            Directive::DefaultColors { target, color } => {
                state.colors.set(*target, *color);
            }
        }
    }
}

/// Decode a glyph string for `target`; extra glyphs are dropped.
fn chrome_glyphs(target: ChromeTarget, value: &Token) -> Result<Vec<char>, DirectiveError> {
    let arity = target.arity();
    let decoded = decode_runes(value.as_bytes(), arity);
    if decoded.runes.len() < arity {
        return Err(DirectiveError::GlyphsTooShort {
            target,
            expected: arity,
            found: decoded.total,
        });
    }
    Ok(decoded.runes)
}
