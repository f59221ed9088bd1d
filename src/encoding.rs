//! Character encoding detection for flat-text manuscripts.
//!
//! Detection is a best-effort classification: BOM first, then UTF-8
//! validation, then statistical detection via chardetng. Decoding is always
//! lossy (invalid sequences become U+FFFD) so a wrong guess degrades the
//! text instead of aborting the parse.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Guess the encoding of a raw byte buffer. Never fails; an empty or
/// undecidable buffer falls back to UTF-8.
pub fn detect(buffer: &[u8]) -> &'static Encoding {
    if buffer.is_empty() {
        return UTF_8;
    }

    // BOM is the most reliable signal when present.
    if let Some((encoding, _bom_len)) = Encoding::for_bom(buffer) {
        return encoding;
    }

    if std::str::from_utf8(buffer).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(buffer, true);
    detector.guess(None, true)
}

/// Decode a byte buffer to a UTF-8 string using the detected encoding.
///
/// BOMs are stripped and invalid sequences replaced, per the tolerant
/// decoding policy.
pub fn decode(buffer: &[u8]) -> (String, &'static Encoding) {
    let encoding = detect(buffer);
    let (text, _, _) = encoding.decode(buffer);
    (text.into_owned(), encoding)
}
