//! The fixed set of text encodings accepted by `print` and `create`
//!
//! Names are matched case-insensitively. Decoding never fails: malformed
//! input is replaced with U+FFFD (or `?` for ASCII).

use std::fmt;

const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

/// A recognized text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8, written without a byte order mark
    #[default]
    Utf8,
    /// UTF-16 little-endian, written with a byte order mark
    Utf16,
    /// 7-bit ASCII; other characters become `?`
    Ascii,
    /// UTF-32 little-endian, written with a byte order mark
    Utf32,
}

impl TextEncoding {
    /// Every member of the encoding set
    pub const ALL: [TextEncoding; 4] = [Self::Utf8, Self::Utf16, Self::Ascii, Self::Utf32];

    /// Canonical name as typed at the prompt
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Ascii => "ascii",
            Self::Utf32 => "utf-32",
        }
    }

    /// Look up an encoding by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|enc| enc.name().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of all names, for diagnostics and help text
    pub fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// Encode text for writing to a file
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => encoding_rs::UTF_8.encode(text).0.into_owned(),
            Self::Utf16 => {
                let mut out = UTF16_LE_BOM.to_vec();
                out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                out
            }
            Self::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Self::Utf32 => {
                let mut out = UTF32_LE_BOM.to_vec();
                out.extend(text.chars().flat_map(|c| u32::from(c).to_le_bytes()));
                out
            }
        }
    }

    /// Decode file contents into text
    ///
    /// UTF-8 and UTF-16 honour a leading byte order mark, so a UTF-16 file
    /// printed as `utf-8` still reads correctly.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => encoding_rs::UTF_8.decode(bytes).0.into_owned(),
            Self::Utf16 => encoding_rs::UTF_16LE.decode(bytes).0.into_owned(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
                .collect(),
            Self::Utf32 => decode_utf32_le(bytes),
        }
    }
}

fn decode_utf32_le(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(&UTF32_LE_BOM).unwrap_or(bytes);
    let chunks = body.chunks_exact(4);
    let trailing = !chunks.remainder().is_empty();

    let mut text: String = chunks
        .map(|chunk| {
            let code = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_exactly_four_members() {
        assert_eq!(TextEncoding::ALL.len(), 4);
        assert_eq!(TextEncoding::names(), "utf-8, utf-16, ascii, utf-32");
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(TextEncoding::from_name("UTF-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::from_name("Ascii"), Some(TextEncoding::Ascii));
        assert_eq!(TextEncoding::from_name("latin1"), None);
        assert_eq!(TextEncoding::from_name("utf8"), None);
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default(), TextEncoding::Utf8);
    }

    #[test]
    fn test_utf8_has_no_bom() {
        assert_eq!(TextEncoding::Utf8.encode("hello"), b"hello");
    }

    #[test]
    fn test_utf16_layout() {
        assert_eq!(
            TextEncoding::Utf16.encode("hi"),
            vec![0xFF, 0xFE, b'h', 0, b'i', 0]
        );
    }

    #[test]
    fn test_utf32_layout() {
        assert_eq!(
            TextEncoding::Utf32.encode("A"),
            vec![0xFF, 0xFE, 0, 0, b'A', 0, 0, 0]
        );
    }

    #[test]
    fn test_ascii_replaces_non_ascii() {
        assert_eq!(TextEncoding::Ascii.encode("café"), b"caf?");
        assert_eq!(TextEncoding::Ascii.decode(&[b'o', 0xE9, b'k']), "o?k");
    }

    #[test]
    fn test_non_ascii_text_survives_each_unicode_encoding() {
        let text = "Привет, мир";
        for enc in [TextEncoding::Utf8, TextEncoding::Utf16, TextEncoding::Utf32] {
            assert_eq!(enc.decode(&enc.encode(text)), text, "{enc}");
        }
    }

    #[test]
    fn test_utf8_decode_sniffs_utf16_bom() {
        let bytes = TextEncoding::Utf16.encode("bom");
        assert_eq!(TextEncoding::Utf8.decode(&bytes), "bom");
    }

    #[test]
    fn test_malformed_utf8_is_replaced() {
        assert_eq!(TextEncoding::Utf8.decode(&[b'a', 0xFF]), "a\u{FFFD}");
    }

    #[test]
    fn test_truncated_utf32_is_replaced() {
        let mut bytes = TextEncoding::Utf32.encode("x");
        bytes.push(0x41);
        assert_eq!(TextEncoding::Utf32.decode(&bytes), "x\u{FFFD}");
    }
}
