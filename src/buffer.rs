//! Decoded payload bytes annotated with the MIME metadata declared by the
//! URI.
//!
//! A [`MimeBuffer`] behaves as a plain byte sequence for all byte-level
//! operations while also exposing the three string attributes derived from
//! the metadata portion of the URI. It is a pure value: constructed once per
//! parse, no mutable state afterwards.

use std::ops::Deref;

use bytes::Bytes;

/// Decoded data URI payload plus its declared MIME metadata.
///
/// Dereferences to `[u8]`, so slice methods apply directly:
///
/// ```
/// let buf = datauri::parse("data:text/plain,hello").expect("valid URI");
/// assert_eq!(&buf[..], b"hello");
/// assert_eq!(buf.len(), 5);
/// assert_eq!(buf.mime_type(), "text/plain");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MimeBuffer {
    data: Bytes,
    mime_type: String,
    type_full: String,
    charset: String,
}

impl MimeBuffer {
    pub(crate) fn new(
        data: Vec<u8>,
        mime_type: String,
        type_full: String,
        charset: String,
    ) -> Self {
        Self {
            data: Bytes::from(data),
            mime_type,
            type_full,
            charset,
        }
    }

    /// Bare MIME type, for example `text/plain`.
    ///
    /// Never empty: an omitted type defaults to `text/plain`.
    #[must_use]
    pub fn mime_type(&self) -> &str { &self.mime_type }

    /// MIME type with all non-base64 modifiers re-joined with `;`.
    ///
    /// Always starts with [`mime_type`](Self::mime_type). When the URI
    /// omitted both type and charset, this carries a synthesized
    /// `;charset=US-ASCII` suffix.
    #[must_use]
    pub fn type_full(&self) -> &str { &self.type_full }

    /// Charset captured from a `charset=` modifier.
    ///
    /// Empty unless the URI declared one, except that an omitted type with
    /// no charset defaults this to `US-ASCII`.
    #[must_use]
    pub fn charset(&self) -> &str { &self.charset }

    /// Decoded payload as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.data }

    /// Consume the buffer, returning the decoded payload.
    #[must_use]
    pub fn into_bytes(self) -> Bytes { self.data }
}

impl Deref for MimeBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] { &self.data }
}

impl AsRef<[u8]> for MimeBuffer {
    fn as_ref(&self) -> &[u8] { &self.data }
}

#[cfg(test)]
mod tests {
    //! Byte-sequence behaviour of the annotated buffer.

    use super::MimeBuffer;

    fn sample() -> MimeBuffer {
        MimeBuffer::new(
            b"hello".to_vec(),
            "text/plain".into(),
            "text/plain".into(),
            String::new(),
        )
    }

    #[test]
    fn derefs_to_payload_bytes() {
        let buf = sample();
        assert_eq!(&buf[..], b"hello");
        assert_eq!(buf.len(), 5);
        assert!(buf.starts_with(b"he"));
    }

    #[test]
    fn into_bytes_transfers_ownership() {
        let bytes = sample().into_bytes();
        assert_eq!(bytes.as_ref(), b"hello");
    }

    #[test]
    fn as_ref_matches_deref() {
        let buf = sample();
        assert_eq!(buf.as_ref(), &buf[..]);
    }
}
