//! Payload decoding primitives: percent-unescaping, octet mapping, and
//! forgiving base64.
//!
//! The payload of a data URI is percent-unescaped into an intermediate text
//! before the final byte decode. The unescape works character-wise: each
//! `%XX` escape becomes the single char `U+00XX`. It is not a byte-wise
//! UTF-8 percent-decode, because the non-base64 path then maps every char
//! to the low byte of its code point; a UTF-8 decode would change the
//! output for escapes and literals above `U+007F`.

use base64::Engine;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, engine::DecodePaddingMode};

/// Standard-alphabet engine that accepts padded and unpadded input alike.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Replace `%XX` escapes (case-insensitive hex) with the char `U+00XX`.
///
/// A `%` not followed by two hex digits passes through literally, so
/// malformed escapes survive unescaping instead of failing.
pub(crate) fn percent_unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        if let Some(byte) = leading_hex_pair(tail) {
            out.push(char::from(byte));
            rest = &tail[2..];
        } else {
            out.push('%');
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

fn leading_hex_pair(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    let hi = char::from(*bytes.first()?).to_digit(16)?;
    let lo = char::from(*bytes.get(1)?).to_digit(16)?;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Two hex digits always fit in a u8."
    )]
    let byte = ((hi << 4) | lo) as u8;
    Some(byte)
}

/// Map each char of the unescaped text to the low byte of its code point.
///
/// This is the historical octet-mapping path: chars above `U+00FF` are
/// truncated, not UTF-8 encoded. Callers handing over text containing such
/// chars get lossy output by design.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Low-byte truncation is the octet mapping itself."
)]
pub(crate) fn octets(text: &str) -> Vec<u8> {
    text.chars().map(|c| (c as u32 & 0xFF) as u8).collect()
}

/// Decode base64 text forgivingly.
///
/// Characters outside the standard alphabet are skipped, decoding stops at
/// the first `=`, and a dangling final sextet is dropped. The sanitized
/// input is always decodable, so garbage yields a best-effort (possibly
/// empty) result instead of an error.
pub(crate) fn forgiving_base64(text: &str) -> Vec<u8> {
    let mut sanitized: Vec<u8> = text
        .bytes()
        .take_while(|&b| b != b'=')
        .filter(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
        .collect();
    // A lone trailing sextet carries no complete byte.
    if sanitized.len() % 4 == 1 {
        sanitized.pop();
    }
    FORGIVING.decode(&sanitized).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    //! Unit tests for the decoding primitives.

    use rstest::rstest;

    use super::{forgiving_base64, octets, percent_unescape};

    #[rstest]
    #[case::plain("hello", "hello")]
    #[case::space("A%20note", "A note")]
    #[case::lowercase_hex("%2f%2F", "//")]
    #[case::high_escape("%ff", "\u{ff}")]
    #[case::dangling_percent("100%", "100%")]
    #[case::short_escape("%4", "%4")]
    #[case::bad_hex("%G1", "%G1")]
    #[case::double_percent("%%41", "%A")]
    fn unescape_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(percent_unescape(input), expected);
    }

    #[test]
    fn octets_truncate_to_low_byte() {
        assert_eq!(octets("A\u{ff}\u{100}"), vec![0x41, 0xFF, 0x00]);
    }

    #[rstest]
    #[case::padded("aGVsbG8=", b"hello".to_vec())]
    #[case::unpadded("aGVsbG8", b"hello".to_vec())]
    #[case::stops_at_padding("aGVs=bG8=", b"hel".to_vec())]
    #[case::skips_invalid_chars("aGV sbG8 =", b"hello".to_vec())]
    #[case::dangling_sextet("aGVsbG8a1", b"hello\x1a".to_vec())]
    #[case::garbage("!!", Vec::new())]
    fn forgiving_base64_cases(#[case] input: &str, #[case] expected: Vec<u8>) {
        assert_eq!(forgiving_base64(input), expected);
    }
}
