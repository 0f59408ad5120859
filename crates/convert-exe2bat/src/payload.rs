//! Base-64 payload embedded in the script

use base64::{engine::general_purpose, Engine};
use std::fmt;

/// Standard padded base-64 text of an executable
///
/// Always a single line, so it can sit between the sentinel markers
/// without wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payload(String);

impl Payload {
    /// Encode raw bytes
    #[must_use]
    pub fn encode(bytes: &[u8]) -> Self {
        Self(general_purpose::STANDARD.encode(bytes))
    }

    /// Decode back into raw bytes
    ///
    /// # Errors
    /// Returns error if the text is not valid padded base-64
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        general_purpose::STANDARD.decode(&self.0)
    }

    /// Borrow the encoded text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoded length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the encoded bytes start with an `MZ` header
    ///
    /// `MZ` always encodes to a leading `TV`; the script uses the same check
    /// when certutil fails.
    #[inline]
    #[must_use]
    pub fn has_mz_header(&self) -> bool {
        self.0.starts_with("TV")
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
