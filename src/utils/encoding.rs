//! Text decoding for properties files.
//!
//! Decoding strategy:
//! - An explicit encoding label always wins
//! - Otherwise a byte-order mark selects UTF-8 / UTF-16 LE / UTF-16 BE
//! - Otherwise strict UTF-8 (fast path for most modern files)
//! - Otherwise the encoding guessed by chardetng, with replacement characters
//!
//! A leading U+FEFF is stripped from the decoded text unless the caller asks to
//! preserve it.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

const BOM: char = '\u{feff}';

/// Look up an encoding by WHATWG label (`utf-8`, `latin1`, `windows-1252`, ...).
pub fn resolve_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Decode raw file bytes into text.
pub fn decode_bytes(
    bytes: &[u8],
    encoding: Option<&'static Encoding>,
    preserve_bom: bool,
) -> String {
    let encoding = encoding
        .or_else(|| Encoding::for_bom(bytes).map(|(enc, _)| enc))
        .unwrap_or_else(|| detect_encoding(bytes));

    let (decoded, _had_errors) = encoding.decode_without_bom_handling(bytes);
    let text = decoded.into_owned();

    if !preserve_bom {
        if let Some(rest) = text.strip_prefix(BOM) {
            return rest.to_string();
        }
    }
    text
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        return encoding_rs::UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
