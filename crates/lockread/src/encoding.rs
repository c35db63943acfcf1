//! Named-encoding resolution and strict decoding.
//!
//! Labels are resolved per the WHATWG Encoding Standard, so the usual
//! aliases work ("UTF-8", "utf-8", "latin1", ...). Note that "ASCII" is
//! an alias of windows-1252 under that standard.

use encoding_rs::Encoding;

use crate::error::{LockReadError, Result};

/// Resolve an encoding label to its encoding, or fail before any I/O.
pub(crate) fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| LockReadError::EncodingUnsupported(label.to_string()))
}

/// Decode `bytes` strictly: no BOM stripping, no replacement characters.
/// Malformed input yields an error rather than a partial or lossy string.
pub(crate) fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => Ok(text.into_owned()),
        None => Err(LockReadError::Decode {
            encoding: encoding.name(),
        }),
    }
}
