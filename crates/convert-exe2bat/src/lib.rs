//! EXE to BAT conversion
//!
//! Turns Windows executables into self-extracting batch scripts. The
//! executable is embedded as base-64 between two sentinel lines; when run,
//! the script extracts it, decodes it with certutil and launches it.
//!
//! # Architecture
//!
//! ```text
//! FileData (.exe) → Payload (base-64) → ScriptTemplate → TextEncoding → FileData (.bat)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use convert_exe2bat::prelude::*;
//!
//! # async fn example() -> ConvertResult<()> {
//! let mut handler = ExeToBatHandler::new();
//! handler.init().await?;
//!
//! let inputs = vec![FileData::new("setup.exe", vec![0x4D, 0x5A, 0x90, 0x00])];
//! let outputs = handler
//!     .convert(&inputs, &CommonFormats::exe(), &CommonFormats::batch(), &[])
//!     .await?;
//! assert_eq!(outputs[0].name, "setup.bat");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod encoding;
pub mod handler;
pub mod payload;
pub mod script;

// Re-exports for convenience
pub use config::{Exe2BatConfig, LineEnding};
pub use encoding::{TextEncoding, UnmappableChar};
pub use handler::{ExeToBatHandler, HANDLER_NAME, TARGET_EXTENSION};
pub use payload::Payload;
pub use script::{extract_payload, ScriptTemplate, PAYLOAD_BEGIN, PAYLOAD_END};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the EXE to BAT handler
    pub use crate::{Exe2BatConfig, ExeToBatHandler, LineEnding, TextEncoding};
    pub use convert_format::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
