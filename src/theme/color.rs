//! Eight-color palette, packed attributes, and the color-spec grammar.
//!
//! ```text
//! ColorSpec := "On" ["High"] ColorName
//!            | ["High"] ColorName ["On" ["High"] ColorName]
//! ```
//!
//! `Bold` is accepted as a synonym for `High`. A missing foreground is White;
//! a missing background is Black.

use std::fmt;

use crossterm::style::Color;
use serde::{Serialize, Serializer};

use super::lexer::Token;

/// Base hue, numbered in VGA order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hue {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

impl Hue {
    pub const ALL: [Hue; 8] = [
        Hue::Black,
        Hue::Blue,
        Hue::Green,
        Hue::Cyan,
        Hue::Red,
        Hue::Magenta,
        Hue::Yellow,
        Hue::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }

    /// Case-insensitive lookup of a color name.
    pub fn from_name(name: &[u8]) -> Option<Hue> {
        Self::ALL
            .iter()
            .copied()
            .find(|hue| name.eq_ignore_ascii_case(hue.name().as_bytes()))
    }

    fn from_bits(bits: u8) -> Hue {
        Self::ALL[usize::from(bits & 0x07)]
    }
}

const HIGH_BIT: u8 = 0x08;

/// A hue plus the high-intensity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue {
    pub hue: Hue,
    pub high: bool,
}

impl ColorValue {
    pub const fn new(hue: Hue, high: bool) -> Self {
        Self { hue, high }
    }

    pub const fn normal(hue: Hue) -> Self {
        Self::new(hue, false)
    }

    pub const fn bright(hue: Hue) -> Self {
        Self::new(hue, true)
    }

    /// Four-bit encoding: hue in bits 0-2, intensity in bit 3.
    pub fn bits(self) -> u8 {
        self.hue as u8 | if self.high { HIGH_BIT } else { 0 }
    }

    pub fn from_bits(bits: u8) -> Self {
        Self::new(Hue::from_bits(bits), bits & HIGH_BIT != 0)
    }

    /// Terminal color for rendering this value.
    pub fn to_crossterm(self) -> Color {
        match (self.hue, self.high) {
            (Hue::Black, false) => Color::Black,
            (Hue::Black, true) => Color::DarkGrey,
            (Hue::Blue, false) => Color::DarkBlue,
            (Hue::Blue, true) => Color::Blue,
            (Hue::Green, false) => Color::DarkGreen,
            (Hue::Green, true) => Color::Green,
            (Hue::Cyan, false) => Color::DarkCyan,
            (Hue::Cyan, true) => Color::Cyan,
            (Hue::Red, false) => Color::DarkRed,
            (Hue::Red, true) => Color::Red,
            (Hue::Magenta, false) => Color::DarkMagenta,
            (Hue::Magenta, true) => Color::Magenta,
            (Hue::Yellow, false) => Color::DarkYellow,
            (Hue::Yellow, true) => Color::Yellow,
            (Hue::White, false) => Color::Grey,
            (Hue::White, true) => Color::White,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high {
            f.write_str("High ")?;
        }
        f.write_str(self.hue.name())
    }
}

/// Foreground and background packed into one byte (`fg | bg << 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorAttr(u8);

impl ColorAttr {
    pub fn new(fg: ColorValue, bg: ColorValue) -> Self {
        Self(fg.bits() | (bg.bits() << 4))
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn fg(self) -> ColorValue {
        ColorValue::from_bits(self.0 & 0x0F)
    }

    pub fn bg(self) -> ColorValue {
        ColorValue::from_bits(self.0 >> 4)
    }
}

impl fmt::Display for ColorAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} On {}", self.fg(), self.bg())
    }
}

impl Serialize for ColorAttr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Why a color spec was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpecError {
    /// Tokens ran out where a color name was required.
    MissingColor,
    UnknownColor(String),
    /// A token other than `On` followed the foreground color.
    ExpectedOn(String),
    TrailingTokens(String),
}

impl fmt::Display for ColorSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColor => write!(f, "missing color name"),
            Self::UnknownColor(name) => write!(f, "unknown color '{name}'"),
            Self::ExpectedOn(found) => write!(f, "expected 'On', found '{found}'"),
            Self::TrailingTokens(found) => write!(f, "unexpected '{found}' after color spec"),
        }
    }
}

impl std::error::Error for ColorSpecError {}

fn is_high(token: &Token) -> bool {
    token.is_keyword("High") || token.is_keyword("Bold")
}

fn is_on(token: &Token) -> bool {
    token.is_keyword("On")
}

/// Cursor over the tokens of one color spec.
struct SpecCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> SpecCursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, pred: fn(&Token) -> bool) -> bool {
        match self.peek() {
            Some(token) if pred(token) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// `["High"] ColorName`
    fn color_value(&mut self) -> Result<ColorValue, ColorSpecError> {
        let high = self.eat(is_high);
        let token = self.peek().ok_or(ColorSpecError::MissingColor)?;
        let hue = Hue::from_name(token.as_bytes())
            .ok_or_else(|| ColorSpecError::UnknownColor(token.text().into_owned()))?;
        self.pos += 1;
        Ok(ColorValue::new(hue, high))
    }

    fn finish(&self) -> Result<(), ColorSpecError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ColorSpecError::TrailingTokens(token.text().into_owned())),
        }
    }
}

/// Parse `tokens[start..]` as a complete color spec.
pub fn parse_color_spec(tokens: &[Token], start: usize) -> Result<ColorAttr, ColorSpecError> {
    let mut cursor = SpecCursor {
        tokens: tokens.get(start..).unwrap_or_default(),
        pos: 0,
    };
    if cursor.peek().is_none() {
        return Err(ColorSpecError::MissingColor);
    }

    if cursor.eat(is_on) {
        let bg = cursor.color_value()?;
        cursor.finish()?;
        return Ok(ColorAttr::new(ColorValue::normal(Hue::White), bg));
    }

    let fg = cursor.color_value()?;
    let Some(next) = cursor.peek() else {
        return Ok(ColorAttr::new(fg, ColorValue::normal(Hue::Black)));
    };
    if !cursor.eat(is_on) {
        return Err(ColorSpecError::ExpectedOn(next.text().into_owned()));
    }
    let bg = cursor.color_value()?;
    cursor.finish()?;
    Ok(ColorAttr::new(fg, bg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(text: &str) -> Result<ColorAttr, ColorSpecError> {
        let tokens: Vec<Token> = text.split_whitespace().map(Token::from).collect();
        parse_color_spec(&tokens, 0)
    }

    #[test]
    fn every_color_name_parses_in_any_case() {
        for hue in Hue::ALL {
            for name in [
                hue.name().to_string(),
                hue.name().to_ascii_lowercase(),
                hue.name().to_ascii_uppercase(),
            ] {
                let attr = spec(&name).expect("color name should parse");
                assert_eq!(attr.fg(), ColorValue::normal(hue), "name {name}");
                assert!(!attr.fg().high);
                assert_eq!(attr.bg(), ColorValue::normal(Hue::Black));
            }
        }
    }

    #[test]
    fn high_foreground_on_background() {
        let attr = spec("High Blue On Green").expect("valid spec");
        assert_eq!(attr.fg(), ColorValue::bright(Hue::Blue));
        assert_eq!(attr.bg(), ColorValue::normal(Hue::Green));
        assert_eq!(attr.bits(), 0x29);
    }

    #[test]
    fn background_only_defaults_foreground_to_white() {
        let attr = spec("On High Red").expect("valid spec");
        assert_eq!(attr.fg(), ColorValue::normal(Hue::White));
        assert_eq!(attr.bg(), ColorValue::bright(Hue::Red));
    }

    #[test]
    fn bold_is_a_synonym_for_high() {
        assert_eq!(spec("bold cyan on BOLD magenta"), spec("High Cyan On High Magenta"));
    }

    #[test]
    fn missing_background_after_on_is_rejected() {
        assert_eq!(spec("Blue On"), Err(ColorSpecError::MissingColor));
        assert_eq!(spec("Blue On High"), Err(ColorSpecError::MissingColor));
        assert_eq!(spec("On"), Err(ColorSpecError::MissingColor));
    }

    #[test]
    fn malformed_specs_are_rejected() {
        assert_eq!(spec(""), Err(ColorSpecError::MissingColor));
        assert_eq!(spec("High"), Err(ColorSpecError::MissingColor));
        assert_eq!(spec("Purple"), Err(ColorSpecError::UnknownColor("Purple".into())));
        assert_eq!(spec("Blue Green"), Err(ColorSpecError::ExpectedOn("Green".into())));
        assert_eq!(spec("High High Blue"), Err(ColorSpecError::UnknownColor("High".into())));
        assert_eq!(
            spec("Blue On Green Red"),
            Err(ColorSpecError::TrailingTokens("Red".into()))
        );
        assert_eq!(
            spec("On Red On Blue"),
            Err(ColorSpecError::TrailingTokens("On".into()))
        );
    }

    #[test]
    fn parse_starts_at_given_index() {
        let tokens: Vec<Token> = ["DefaultColors", "Bars", "Yellow", "On", "Blue"]
            .into_iter()
            .map(Token::from)
            .collect();
        let attr = parse_color_spec(&tokens, 2).expect("valid spec");
        assert_eq!(attr.fg(), ColorValue::normal(Hue::Yellow));
        assert_eq!(attr.bg(), ColorValue::normal(Hue::Blue));
        assert_eq!(parse_color_spec(&tokens, 9), Err(ColorSpecError::MissingColor));
    }

    #[test]
    fn display_uses_theme_file_grammar() {
        let attr = ColorAttr::new(ColorValue::bright(Hue::Yellow), ColorValue::normal(Hue::Blue));
        assert_eq!(attr.to_string(), "High Yellow On Blue");
        assert_eq!(spec(&attr.to_string()), Ok(attr));
    }

    #[test]
    fn crossterm_mapping_distinguishes_intensity() {
        assert_eq!(ColorValue::normal(Hue::Blue).to_crossterm(), Color::DarkBlue);
        assert_eq!(ColorValue::bright(Hue::Blue).to_crossterm(), Color::Blue);
        assert_eq!(ColorValue::bright(Hue::Black).to_crossterm(), Color::DarkGrey);
    }
}
