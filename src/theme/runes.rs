//! Glyph-string decoding for `Chrome` values.
//!
//! Theme files written before UTF-8 was common store one glyph per byte in
//! IBM code page 437. Newer files use UTF-8. There is no mode marker in the
//! file format, so the decoder guesses: any control byte means legacy,
//! otherwise UTF-8 is tried and the legacy table is the fallback.

use serde::Serialize;

/// Which decoding path produced a [`DecodedRunes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuneEncoding {
    Utf8,
    LegacyCp437,
}

/// Result of decoding a glyph string into at most `capacity` code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRunes {
    /// Materialized code points; never longer than the requested capacity.
    pub runes: Vec<char>,
    /// Number of code points in the whole input, including any not stored.
    pub total: usize,
    pub encoding: RuneEncoding,
}

impl DecodedRunes {
    fn empty() -> Self {
        Self {
            runes: Vec::new(),
            total: 0,
            encoding: RuneEncoding::Utf8,
        }
    }

    /// True when the input held more code points than were materialized.
    pub fn overflowed(&self) -> bool {
        self.total > self.runes.len()
    }
}

/// Decode `bytes` into at most `capacity` code points.
pub fn decode_runes(bytes: &[u8], capacity: usize) -> DecodedRunes {
    if bytes.is_empty() || capacity == 0 {
        return DecodedRunes::empty();
    }

    if !has_control_bytes(bytes) {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return DecodedRunes {
                runes: text.chars().take(capacity).collect(),
                total: text.chars().count(),
                encoding: RuneEncoding::Utf8,
            };
        }
    }

    DecodedRunes {
        runes: bytes.iter().take(capacity).map(|&b| cp437_to_char(b)).collect(),
        total: bytes.len(),
        encoding: RuneEncoding::LegacyCp437,
    }
}

fn has_control_bytes(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| b < 0x20 || b == 0x7F)
}

/// Translate one code page 437 byte to its Unicode glyph.
pub fn cp437_to_char(byte: u8) -> char {
    CP437_TO_UNICODE[byte as usize]
}

#[rustfmt::skip]
const CP437_TO_UNICODE: [char; 256] = [
    // 0x00
    '\u{0000}', '\u{263A}', '\u{263B}', '\u{2665}', '\u{2666}', '\u{2663}', '\u{2660}', '\u{2022}',
    '\u{25D8}', '\u{25CB}', '\u{25D9}', '\u{2642}', '\u{2640}', '\u{266A}', '\u{266B}', '\u{263C}',
    // 0x10
    '\u{25BA}', '\u{25C4}', '\u{2195}', '\u{203C}', '\u{00B6}', '\u{00A7}', '\u{25AC}', '\u{21A8}',
    '\u{2191}', '\u{2193}', '\u{2192}', '\u{2190}', '\u{221F}', '\u{2194}', '\u{25B2}', '\u{25BC}',
    // 0x20
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    // 0x30
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    // 0x40
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    // 0x50
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    // 0x60
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    // 0x70
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '\u{2302}',
    // 0x80
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    // 0x90
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{20A7}', '\u{0192}',
    // 0xA0
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{2310}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    // 0xB0
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    // 0xC0
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    // 0xD0
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
    // 0xE0
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}',
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}',
    // 0xF0
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}',
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_multibyte_glyphs_decode_as_code_points() {
        let decoded = decode_runes("═╝".as_bytes(), 2);
        assert_eq!(decoded.runes, vec!['═', '╝']);
        assert_eq!(decoded.total, 2);
        assert_eq!(decoded.encoding, RuneEncoding::Utf8);
        assert!(!decoded.overflowed());
    }

    #[test]
    fn extra_code_points_are_counted_but_not_stored() {
        let decoded = decode_runes("abcde".as_bytes(), 3);
        assert_eq!(decoded.runes, vec!['a', 'b', 'c']);
        assert_eq!(decoded.total, 5);
        assert!(decoded.overflowed());
    }

    #[test]
    fn invalid_utf8_falls_back_to_code_page() {
        // 0xC4 opens a two-byte sequence but 0x41 is not a continuation byte.
        let decoded = decode_runes(&[0xC4, 0x41], 2);
        assert_eq!(decoded.encoding, RuneEncoding::LegacyCp437);
        assert_eq!(decoded.runes, vec!['─', 'A']);
    }

    #[test]
    fn control_byte_forces_legacy_even_when_valid_utf8() {
        // Valid UTF-8 but contains 0x01, so every byte maps on its own.
        let mut bytes = "é".as_bytes().to_vec();
        bytes.push(0x01);
        let decoded = decode_runes(&bytes, 8);
        assert_eq!(decoded.encoding, RuneEncoding::LegacyCp437);
        assert_eq!(decoded.total, 3);
        assert_eq!(decoded.runes, vec!['├', '⌐', '☺']);
    }

    #[test]
    fn delete_byte_counts_as_control() {
        let decoded = decode_runes(&[0x7F], 1);
        assert_eq!(decoded.encoding, RuneEncoding::LegacyCp437);
        assert_eq!(decoded.runes, vec!['⌂']);
    }

    #[test]
    fn empty_input_or_zero_capacity_decodes_nothing() {
        assert_eq!(decode_runes(b"", 3).total, 0);
        let decoded = decode_runes(b"abc", 0);
        assert!(decoded.runes.is_empty());
        assert_eq!(decoded.total, 0);
    }

    #[test]
    fn code_page_table_keeps_ascii_identity() {
        for byte in 0x20u8..0x7F {
            assert_eq!(cp437_to_char(byte), byte as char);
        }
        assert_eq!(cp437_to_char(0xDB), '█');
        assert_eq!(cp437_to_char(0xFF), '\u{00A0}');
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_never_materializes_past_capacity(
                bytes in proptest::collection::vec(any::<u8>(), 0..32),
                capacity in 0usize..8
            ) {
                let decoded = decode_runes(&bytes, capacity);
                prop_assert!(decoded.runes.len() <= capacity);
                prop_assert!(decoded.total >= decoded.runes.len());
                prop_assert!(decoded.total <= bytes.len());
            }
        }
    }
}
