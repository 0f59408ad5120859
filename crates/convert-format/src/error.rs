//! Error types for format handlers
//!
//! Covers the two ways a conversion call can fail:
//! - Descriptor mismatch (the handler does not support the requested pair)
//! - Output encoding (rendered text cannot be turned into bytes)

/// Errors raised by a [`FormatHandler`](crate::FormatHandler) conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Requested MIME pair is not the one the handler declares
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    /// Rendered output could not be encoded into bytes
    #[error("encoding failed for {file}: {reason}")]
    EncodingFailure { file: String, reason: String },
}

impl ConvertError {
    /// Create unsupported conversion error for a MIME pair
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create encoding failure for a file
    pub fn encoding(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EncodingFailure {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
