//! Testing utilities for the exe2bat workspace
//!
//! Shared fixtures and helpers for reading generated scripts back.

#![allow(missing_docs)]

use base64::{engine::general_purpose, Engine};
use convert_exe2bat::extract_payload;
use convert_format::{CommonFormats, FileData, FileFormat};

/// `MZ` header followed by a few DOS stub bytes
pub const PE_STUB: [u8; 4] = [0x4D, 0x5A, 0x90, 0x00];

pub fn exe_format() -> FileFormat {
    CommonFormats::exe()
}

pub fn bat_format() -> FileFormat {
    CommonFormats::batch()
}

pub fn png_format() -> FileFormat {
    FileFormat::new("Portable Network Graphics", "png", "png", "image/png", "image")
}

pub fn exe_file(name: &str) -> FileData {
    FileData::new(name, PE_STUB.to_vec())
}

/// `count` stub executables named `app0.exe`, `app1.exe`, ...
/// with distinct trailing bytes
pub fn exe_batch(count: usize) -> Vec<FileData> {
    (0..count)
        .map(|i| {
            let mut bytes = PE_STUB.to_vec();
            bytes.extend_from_slice(&i.to_le_bytes());
            FileData::new(format!("app{i}.exe"), bytes)
        })
        .collect()
}

/// Decode script bytes as Latin-1 text
pub fn script_text(file: &FileData) -> String {
    file.bytes.iter().copied().map(char::from).collect()
}

/// Extract and base-64 decode the embedded executable
pub fn embedded_bytes(file: &FileData) -> Vec<u8> {
    let text = script_text(file);
    let payload = extract_payload(&text).expect("script has no payload section");
    general_purpose::STANDARD
        .decode(payload)
        .expect("payload is not valid base-64")
}

/// Install a test subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
