//! Handler configuration
//!
//! Everything tunable about the generated script lives here. Defaults
//! reproduce the classic output: Latin-1 bytes, LF line endings and a
//! `payload.b64` scratch file under `%TEMP%`.

use crate::encoding::TextEncoding;
use serde::{Deserialize, Serialize};

/// Default scratch file for the extracted payload text
pub const DEFAULT_PAYLOAD_FILE: &str = "payload.b64";

/// Line terminator used when rendering the script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Terminator text
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Configuration for [`ExeToBatHandler`](crate::ExeToBatHandler)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exe2BatConfig {
    /// Emit per-file debug events (sizes, payload length)
    pub verbose: bool,
    /// Byte encoding of the rendered script
    pub text_encoding: TextEncoding,
    /// Line terminator of the rendered script
    pub line_ending: LineEnding,
    /// Scratch file name the script extracts its payload into
    pub payload_file_name: String,
}

impl Exe2BatConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With verbose tracing
    #[inline]
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// With output text encoding
    #[inline]
    #[must_use]
    pub fn with_text_encoding(mut self, encoding: TextEncoding) -> Self {
        self.text_encoding = encoding;
        self
    }

    /// With line terminator
    #[inline]
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// With payload scratch file name
    #[inline]
    #[must_use]
    pub fn with_payload_file_name(mut self, name: impl Into<String>) -> Self {
        self.payload_file_name = name.into();
        self
    }
}

impl Default for Exe2BatConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            text_encoding: TextEncoding::Latin1,
            line_ending: LineEnding::Lf,
            payload_file_name: DEFAULT_PAYLOAD_FILE.to_string(),
        }
    }
}
