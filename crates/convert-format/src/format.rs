//! File format descriptors
//!
//! A [`FileFormat`] tells the host what a handler can read and write:
//! MIME type, extension, direction flags and category. Handlers derive
//! their own descriptors from the shared [`CommonFormats`] catalogue
//! through a [`FormatBuilder`].

use serde::{Deserialize, Serialize};

/// MIME type of a Windows portable executable
pub const PE_MIME: &str = "application/vnd.microsoft.portable-executable";

/// MIME type of a Windows batch script
pub const BATCH_MIME: &str = "application/x-bat";

/// Describes one file format a handler supports
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileFormat {
    /// Human-readable name
    pub name: String,
    /// Short format id
    pub format: String,
    /// File extension (without dot)
    pub extension: String,
    /// MIME content type
    pub mime: String,
    /// Usable as a conversion source
    pub from: bool,
    /// Usable as a conversion target
    pub to: bool,
    /// Handler-internal id
    pub internal: String,
    /// Category tag
    pub category: String,
    /// Conversion into this format preserves all information
    #[serde(default)]
    pub lossless: bool,
}

impl FileFormat {
    /// Create a descriptor with both direction flags off
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        format: impl Into<String>,
        extension: impl Into<String>,
        mime: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let format = format.into();
        Self {
            name: name.into(),
            internal: format.clone(),
            format,
            extension: extension.into(),
            mime: mime.into(),
            from: false,
            to: false,
            category: category.into(),
            lossless: false,
        }
    }

    /// Start a builder from this descriptor with a new internal id
    #[inline]
    #[must_use]
    pub fn builder(&self, internal: impl Into<String>) -> FormatBuilder {
        FormatBuilder::from_base(self.clone()).internal(internal)
    }

    /// Whether the content type matches
    #[inline]
    #[must_use]
    pub fn has_mime(&self, mime: &str) -> bool {
        self.mime == mime
    }
}

/// Builder for deriving handler-specific descriptors
#[derive(Debug, Clone)]
#[must_use]
pub struct FormatBuilder {
    format: FileFormat,
}

impl FormatBuilder {
    /// Start from an existing descriptor
    #[inline]
    pub fn from_base(format: FileFormat) -> Self {
        Self { format }
    }

    /// Set the handler-internal id
    #[inline]
    pub fn internal(mut self, internal: impl Into<String>) -> Self {
        self.format.internal = internal.into();
        self
    }

    /// Mark usable as a conversion source
    #[inline]
    pub fn allow_from(mut self) -> Self {
        self.format.from = true;
        self
    }

    /// Mark usable as a conversion target
    #[inline]
    pub fn allow_to(mut self) -> Self {
        self.format.to = true;
        self
    }

    /// Mark conversion into this format as lossless
    #[inline]
    pub fn mark_lossless(mut self) -> Self {
        self.format.lossless = true;
        self
    }

    /// Finish the descriptor
    #[inline]
    #[must_use]
    pub fn build(self) -> FileFormat {
        self.format
    }
}

impl From<FormatBuilder> for FileFormat {
    fn from(builder: FormatBuilder) -> Self {
        builder.build()
    }
}

/// Shared catalogue of well-known formats
pub struct CommonFormats;

impl CommonFormats {
    /// Windows batch script
    #[must_use]
    pub fn batch() -> FileFormat {
        FileFormat::new("Windows Batch file", "batch", "bat", BATCH_MIME, "text")
    }

    /// Windows portable executable
    #[must_use]
    pub fn exe() -> FileFormat {
        FileFormat::new("Windows Executable", "exe", "exe", PE_MIME, "application")
    }
}
