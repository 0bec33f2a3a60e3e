//! Decode `data:` URIs into bytes annotated with their MIME metadata.
//!
//! A data URI embeds content inline as `data:[<mediatype>][;base64],<data>`.
//! [`parse`] validates the scheme and structure, extracts the declared MIME
//! type, charset, and transfer encoding, percent-unescapes the payload, and
//! decodes it into a [`MimeBuffer`]: an owned byte sequence carrying the
//! parsed metadata alongside.
//!
//! Parsing is deliberately permissive: beyond the scheme and the
//! metadata/payload comma, nothing is validated. Malformed modifiers and
//! sloppy base64 decode best-effort rather than failing.
//!
//! ```
//! let buf = datauri::parse("data:,A%20brief%20note").expect("valid URI");
//! assert_eq!(&buf[..], b"A brief note");
//! assert_eq!(buf.type_full(), "text/plain;charset=US-ASCII");
//! assert_eq!(buf.charset(), "US-ASCII");
//! ```

pub mod buffer;
mod decode;
pub mod error;
pub mod parser;

pub use buffer::MimeBuffer;
pub use error::{FormatError, Result};
pub use parser::parse;
