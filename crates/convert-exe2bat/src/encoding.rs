//! Single-byte text encodings for the rendered script
//!
//! `cmd.exe` reads batch files one byte per character, so the script is
//! never written as UTF-8. Characters above the encoding's range are an
//! error rather than being replaced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed one-byte-per-character encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// 7-bit US-ASCII
    Ascii,
    /// ISO-8859-1, code points U+0000..=U+00FF
    #[default]
    Latin1,
}

impl TextEncoding {
    /// Highest code point the encoding can carry
    #[inline]
    #[must_use]
    pub fn max_code_point(self) -> u32 {
        match self {
            Self::Ascii => 0x7F,
            Self::Latin1 => 0xFF,
        }
    }

    /// Encode text into bytes
    ///
    /// # Errors
    /// Returns [`UnmappableChar`] for the first character out of range.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, UnmappableChar> {
        text.char_indices()
            .map(|(offset, ch)| {
                u8::try_from(u32::from(ch))
                    .ok()
                    .filter(|&b| u32::from(b) <= self.max_code_point())
                    .ok_or(UnmappableChar {
                        ch,
                        offset,
                        encoding: self,
                    })
            })
            .collect()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Latin1 => write!(f, "latin-1"),
        }
    }
}

/// Character the target encoding cannot represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("character {ch:?} at byte {offset} is not representable in {encoding}")]
pub struct UnmappableChar {
    /// Offending character
    pub ch: char,
    /// Byte offset in the source text
    pub offset: usize,
    /// Encoding that rejected it
    pub encoding: TextEncoding,
}
