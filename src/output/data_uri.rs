//! `data:` URI encoding for PNG images.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Prefix of every PNG data URI produced by this crate.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encoder/decoder for `data:image/png;base64,` URIs.
pub struct DataUri;

impl DataUri {
    /// Wrap PNG bytes as an embeddable URI.
    #[must_use]
    pub fn encode_png(png: &[u8]) -> String {
        let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
        uri.push_str(PNG_DATA_URI_PREFIX);
        STANDARD.encode_string(png, &mut uri);
        uri
    }

    /// The base64 payload of a PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDataUri`] if the prefix is missing.
    pub fn payload(uri: &str) -> Result<&str> {
        uri.strip_prefix(PNG_DATA_URI_PREFIX).ok_or_else(|| {
            let shown: String = uri.chars().take(32).collect();
            Error::InvalidDataUri(format!("expected '{PNG_DATA_URI_PREFIX}' prefix, got '{shown}'"))
        })
    }

    /// Recover the PNG bytes from a data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing or the payload is not
    /// valid base64.
    pub fn decode(uri: &str) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(Self::payload(uri)?)?)
    }
}
