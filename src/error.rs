//! Error surface for data URI parsing.
//!
//! Parsing is all-or-nothing: either the whole URI decodes into a
//! [`MimeBuffer`](crate::MimeBuffer) or one of the two variants below is
//! returned. Anything beyond the scheme and comma checks (unknown modifier
//! tokens, junk in the base64 payload, an empty type) is deliberately left
//! to the permissive decoding path rather than rejected here.

use thiserror::Error;

/// Structural failures detected while parsing a data URI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not begin with the case-insensitive `data:` scheme.
    #[error("not a data URI (must begin with \"data:\")")]
    NotDataUri,

    /// The comma separating metadata from payload is missing, or falls
    /// inside the `data:` prefix itself.
    #[error("malformed data URI")]
    Malformed,
}

/// Canonical result alias used by the crate's public API.
pub type Result<T> = std::result::Result<T, FormatError>;
