//! Conversion plugin contract
//!
//! Shared types every format handler speaks with its host.
//!
//! # Core Concepts
//!
//! - [`FileFormat`]: Descriptor of a readable/writable format (MIME, extension, flags)
//! - [`FormatBuilder`]: Derives handler-specific descriptors from [`CommonFormats`]
//! - [`FileData`]: Named byte buffer passed in and out of a conversion
//! - [`FormatHandler`]: Async trait implemented by each converter plugin
//! - [`ConvertError`]: Failure taxonomy for conversions
//!
//! # Example
//!
//! ```rust,ignore
//! use convert_format::prelude::*;
//!
//! # async fn example(handler: &dyn FormatHandler) -> ConvertResult<()> {
//! let inputs = vec![FileData::new("setup.exe", std::fs::read("setup.exe")?)];
//! let outputs = handler
//!     .convert(&inputs, &CommonFormats::exe(), &CommonFormats::batch(), &[])
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod data;
pub mod error;
pub mod format;
pub mod handler;

// Re-exports for convenience
pub use data::FileData;
pub use error::{ConvertError, ConvertResult};
pub use format::{CommonFormats, FileFormat, FormatBuilder, BATCH_MIME, PE_MIME};
pub use handler::FormatHandler;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for writing or calling format handlers
    pub use crate::{
        CommonFormats, ConvertError, ConvertResult, FileData, FileFormat, FormatBuilder,
        FormatHandler,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
