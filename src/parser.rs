//! Single-pass data URI parsing: lexical validation, metadata extraction,
//! payload decoding, and result assembly.
//!
//! Only two things are validated: the `data:` scheme and the comma that
//! separates metadata from payload. Everything else (an empty type, unknown
//! modifier tokens, duplicate charsets, junk in a base64 payload) flows
//! through to the permissive decoders in [`crate::decode`]. Best-effort
//! extraction, not conformance checking.

use tracing::trace;

use crate::buffer::MimeBuffer;
use crate::decode::{forgiving_base64, octets, percent_unescape};
use crate::error::{FormatError, Result};

/// Length of the `data:` scheme prefix.
const SCHEME_LEN: usize = 5;

const DEFAULT_TYPE: &str = "text/plain";
const DEFAULT_CHARSET: &str = "US-ASCII";

/// Parse a data URI into decoded bytes plus MIME metadata.
///
/// Line breaks anywhere in the URI are stripped before parsing, so payloads
/// wrapped across lines decode the same as unwrapped ones.
///
/// # Examples
///
/// ```
/// let buf = datauri::parse("data:text/plain;base64,aGVsbG8=").expect("valid URI");
/// assert_eq!(&buf[..], b"hello");
/// assert_eq!(buf.type_full(), "text/plain");
/// ```
///
/// # Errors
///
/// Returns [`FormatError::NotDataUri`] when the input lacks the `data:`
/// scheme, and [`FormatError::Malformed`] when the metadata/payload comma is
/// missing or misplaced.
pub fn parse(uri: &str) -> Result<MimeBuffer> {
    let scheme = uri.get(..SCHEME_LEN).ok_or(FormatError::NotDataUri)?;
    if !scheme.eq_ignore_ascii_case("data:") {
        return Err(FormatError::NotDataUri);
    }

    // Line breaks may occur anywhere, including before the comma, so strip
    // them before locating it.
    let uri: String = uri.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    // The comma must land strictly past the "data:" prefix; landing at
    // index 5 exactly (empty metadata) is fine.
    let comma = uri.find(',').ok_or(FormatError::Malformed)?;
    if comma < SCHEME_LEN {
        return Err(FormatError::Malformed);
    }

    let mut segments = uri[SCHEME_LEN..comma].split(';');
    let type_token = segments.next().unwrap_or_default();
    let mime_type = if type_token.is_empty() {
        DEFAULT_TYPE
    } else {
        type_token
    };

    let mut type_full = mime_type.to_owned();
    let mut charset = String::new();
    let mut base64 = false;
    for segment in segments {
        if segment == "base64" {
            base64 = true;
        } else {
            // Empty or unrecognized modifiers are carried verbatim.
            type_full.push(';');
            type_full.push_str(segment);
            if let Some(value) = segment.strip_prefix("charset=") {
                charset = value.to_owned();
            }
        }
    }

    // US-ASCII is the default only when the type itself was omitted.
    if type_token.is_empty() && charset.is_empty() {
        type_full.push_str(";charset=");
        type_full.push_str(DEFAULT_CHARSET);
        charset = DEFAULT_CHARSET.to_owned();
    }

    let text = percent_unescape(&uri[comma + 1..]);
    let data = if base64 {
        forgiving_base64(&text)
    } else {
        octets(&text)
    };

    trace!(%type_full, base64, len = data.len(), "parsed data URI");
    Ok(MimeBuffer::new(data, mime_type.to_owned(), type_full, charset))
}
