//! Line sanitizing and tokenizing for theme files.
//!
//! Lines are handled as raw bytes: legacy theme files carry code page 437
//! glyphs that are not valid UTF-8, and quoted escapes may produce any byte.

use std::borrow::Cow;
use std::fmt;

/// Maximum number of tokens taken from one line; the rest is ignored.
pub const MAX_TOKENS: usize = 32;

/// One whitespace-separated word of a theme line.
///
/// Quoted tokens own their unescaped bytes, so the token may be shorter than
/// the span it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Case-insensitive ASCII comparison against a keyword.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.0.eq_ignore_ascii_case(keyword.as_bytes())
    }

    /// Lossy text form, for diagnostics.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Token {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Whitespace as C `isspace` sees it, which includes vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Drop an unquoted `#` comment and trim surrounding whitespace.
///
/// An empty result means the line has nothing to apply.
pub fn sanitize(line: &[u8]) -> &[u8] {
    let mut in_quote = false;
    let mut end = line.len();
    for (idx, &byte) in line.iter().enumerate() {
        if byte == b'"' && (idx == 0 || line[idx - 1] != b'\\') {
            in_quote = !in_quote;
        }
        if byte == b'#' && !in_quote {
            end = idx;
            break;
        }
    }
    trim(&line[..end])
}

fn trim(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !is_space(*first) {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !is_space(*last) {
            break;
        }
        bytes = rest;
    }
    bytes
}

/// Split a sanitized line into at most `max_tokens` tokens.
///
/// A token starting with `"` runs to the next unescaped `"` (or the end of
/// the line) and has its backslash escapes decoded. Bare tokens run to the
/// next whitespace and are taken verbatim.
pub fn tokenize(line: &[u8], max_tokens: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < line.len() && tokens.len() < max_tokens {
        while pos < line.len() && is_space(line[pos]) {
            pos += 1;
        }
        if pos >= line.len() || line[pos] == b'#' {
            break;
        }
        if line[pos] == b'"' {
            let (token, consumed) = parse_quoted(&line[pos + 1..]);
            tokens.push(token);
            pos += 1 + consumed;
            continue;
        }
        let start = pos;
        while pos < line.len() && !is_space(line[pos]) {
            pos += 1;
        }
        tokens.push(Token(line[start..pos].to_vec()));
    }
    tokens
}

/// Parse the body of a quoted span. Returns the token and the number of
/// source bytes consumed, including the closing quote when present.
fn parse_quoted(src: &[u8]) -> (Token, usize) {
    let mut out = Vec::with_capacity(src.len());
    let mut idx = 0;
    while idx < src.len() && src[idx] != b'"' {
        if src[idx] != b'\\' || idx + 1 >= src.len() {
            out.push(src[idx]);
            idx += 1;
            continue;
        }
        idx += 1 + decode_escape(&src[idx + 1..], &mut out);
    }
    if idx < src.len() {
        idx += 1;
    }
    (Token(out), idx)
}

/// Decode one escape whose body (the bytes after `\`) starts `rest`.
/// `rest` is never empty. Returns how many bytes of `rest` were used.
fn decode_escape(rest: &[u8], out: &mut Vec<u8>) -> usize {
    let simple = match rest[0] {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'e' => Some(0x1B),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'0' => Some(0),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return 1;
    }

    if rest[0] == b'x' {
        if let [_, hi, lo, ..] = rest {
            if let (Some(hi), Some(lo)) = (hex_value(*hi), hex_value(*lo)) {
                out.push((hi << 4) | lo);
                return 3;
            }
        }
    }

    if let [a, b, c, ..] = rest {
        if is_octal(*a) && is_octal(*b) && is_octal(*c) {
            let value = (u32::from(a - b'0') << 6) | (u32::from(b - b'0') << 3) | u32::from(c - b'0');
            // \400 through \777 keep the low byte.
            out.push((value & 0xFF) as u8);
            return 3;
        }
    }

    out.push(b'\\');
    out.push(rest[0]);
    1
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

fn is_octal(byte: u8) -> bool {
    (b'0'..=b'7').contains(&byte)
}
