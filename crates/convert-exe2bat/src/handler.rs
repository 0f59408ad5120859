//! EXE → BAT format handler
//!
//! Wraps each executable of a batch into a self-extracting batch script.
//! Conversion is fail-fast: the first file that cannot be converted aborts
//! the whole call and no partial output is returned.

use crate::config::Exe2BatConfig;
use crate::payload::Payload;
use crate::script::ScriptTemplate;
use async_trait::async_trait;
use convert_format::{
    CommonFormats, ConvertError, ConvertResult, FileData, FileFormat, FormatHandler, BATCH_MIME,
    PE_MIME,
};

/// Stable handler identifier
pub const HANDLER_NAME: &str = "exe2bat";

/// Extension of generated scripts
pub const TARGET_EXTENSION: &str = "bat";

/// Converts Windows executables into self-extracting batch scripts
#[derive(Debug, Clone)]
pub struct ExeToBatHandler {
    config: Exe2BatConfig,
    template: ScriptTemplate,
    formats: Vec<FileFormat>,
    ready: bool,
}

impl ExeToBatHandler {
    /// Create handler with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Exe2BatConfig::default())
    }

    /// Create handler with specific configuration
    #[must_use]
    pub fn with_config(config: Exe2BatConfig) -> Self {
        Self {
            template: ScriptTemplate::from_config(&config),
            config,
            formats: supported_formats(),
            ready: false,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Exe2BatConfig {
        &self.config
    }

    /// Verify the requested pair is executable → batch
    ///
    /// Only the MIME types are compared; file contents are never inspected.
    ///
    /// # Errors
    /// `ConvertError::UnsupportedConversion` if either MIME type differs
    pub fn check_pair(&self, input: &FileFormat, output: &FileFormat) -> ConvertResult<()> {
        if input.has_mime(PE_MIME) && output.has_mime(BATCH_MIME) {
            return Ok(());
        }

        tracing::warn!(
            handler = HANDLER_NAME,
            "MIME type mismatch: expected {} -> {}, got {} -> {}",
            PE_MIME,
            BATCH_MIME,
            input.mime,
            output.mime
        );
        Err(ConvertError::unsupported(&input.mime, &output.mime))
    }

    /// Convert a single executable into its batch wrapper
    ///
    /// # Errors
    /// `ConvertError::EncodingFailure` if the rendered script contains a
    /// character the configured text encoding cannot carry
    pub fn convert_file(&self, file: &FileData) -> ConvertResult<FileData> {
        let base = file.stem();
        let name = file.name_with_extension(TARGET_EXTENSION);
        let payload = Payload::encode(&file.bytes);

        if self.config.verbose {
            tracing::debug!(
                file = %file.name,
                size = file.len(),
                payload_len = payload.len(),
                mz_header = payload.has_mz_header(),
                "Encoding executable"
            );
        }

        let script = self.template.render(base, &payload);
        let bytes = self.config.text_encoding.encode(&script).map_err(|e| {
            tracing::warn!(file = %file.name, "Failed to encode batch content: {}", e);
            ConvertError::encoding(&file.name, e.to_string())
        })?;

        if self.config.verbose {
            tracing::debug!(output = %name, script_len = bytes.len(), "Encoded batch content");
        }

        Ok(FileData { name, bytes })
    }
}

impl Default for ExeToBatHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormatHandler for ExeToBatHandler {
    fn name(&self) -> &str {
        HANDLER_NAME
    }

    fn supported_formats(&self) -> &[FileFormat] {
        &self.formats
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn init(&mut self) -> ConvertResult<()> {
        self.ready = true;
        if self.config.verbose {
            tracing::debug!(
                handler = HANDLER_NAME,
                formats = self.formats.len(),
                "Handler ready"
            );
        }
        Ok(())
    }

    async fn convert(
        &self,
        inputs: &[FileData],
        input_format: &FileFormat,
        output_format: &FileFormat,
        _args: &[String],
    ) -> ConvertResult<Vec<FileData>> {
        if self.config.verbose {
            tracing::debug!(
                "Converting {} -> {}, {} input files",
                input_format.mime,
                output_format.mime,
                inputs.len()
            );
        }

        self.check_pair(input_format, output_format)?;

        let outputs = inputs
            .iter()
            .map(|file| self.convert_file(file))
            .collect::<ConvertResult<Vec<_>>>()?;

        tracing::debug!(handler = HANDLER_NAME, "Converted {} files", outputs.len());
        Ok(outputs)
    }
}

/// Executable source and lossless batch target
fn supported_formats() -> Vec<FileFormat> {
    vec![
        CommonFormats::exe().builder("exe").allow_from().build(),
        CommonFormats::batch()
            .builder(TARGET_EXTENSION)
            .allow_to()
            .mark_lossless()
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::TextEncoding;
    use crate::script::extract_payload;

    fn exe() -> FileFormat {
        CommonFormats::exe()
    }

    fn bat() -> FileFormat {
        CommonFormats::batch()
    }

    #[test]
    fn declared_formats() {
        let handler = ExeToBatHandler::new();
        let formats = handler.supported_formats();
        assert_eq!(formats.len(), 2);

        let source = &formats[0];
        assert_eq!(source.name, "Windows Executable");
        assert_eq!(source.format, "exe");
        assert_eq!(source.extension, "exe");
        assert_eq!(source.mime, PE_MIME);
        assert_eq!(source.internal, "exe");
        assert_eq!(source.category, "application");
        assert!(source.from && !source.to);

        let target = &formats[1];
        assert_eq!(target.mime, BATCH_MIME);
        assert_eq!(target.internal, "bat");
        assert!(target.to && target.lossless);
        assert!(!target.from);
    }

    #[test]
    fn registration_surface() {
        let handler = ExeToBatHandler::default();
        assert_eq!(handler.name(), "exe2bat");
        assert!(!handler.supports_any_input());
        assert!(handler.declares_pair(PE_MIME, BATCH_MIME));
        assert!(!handler.declares_pair(BATCH_MIME, PE_MIME));
    }

    #[tokio::test]
    async fn init_sets_ready() {
        let mut handler = ExeToBatHandler::new();
        assert!(!handler.is_ready());
        handler.init().await.unwrap();
        assert!(handler.is_ready());
        handler.init().await.unwrap();
        assert!(handler.is_ready());
    }

    #[test]
    fn check_pair_accepts_declared() {
        let handler = ExeToBatHandler::new();
        assert!(handler.check_pair(&exe(), &bat()).is_ok());
    }

    #[test]
    fn check_pair_ignores_other_fields() {
        let handler = ExeToBatHandler::new();
        let mut input = exe();
        input.extension = "com".into();
        input.from = false;
        assert!(handler.check_pair(&input, &bat()).is_ok());
    }

    #[test]
    fn check_pair_rejects_swapped() {
        let handler = ExeToBatHandler::new();
        let err = handler.check_pair(&bat(), &exe()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedConversion { ref from, ref to }
                if from == BATCH_MIME && to == PE_MIME
        ));
    }

    #[test]
    fn convert_file_scenario() {
        let handler = ExeToBatHandler::new();
        let out = handler
            .convert_file(&FileData::new("setup.exe", vec![0x4D, 0x5A, 0x90, 0x00]))
            .unwrap();

        assert_eq!(out.name, "setup.bat");
        let text = String::from_utf8(out.bytes).unwrap();
        assert!(text.contains("-----BEGIN PAYLOAD-----\nTVpakAA=\n-----END PAYLOAD-----"));
        assert!(text.contains("setup.exe"));
    }

    #[test]
    fn convert_file_latin1_name() {
        let handler = ExeToBatHandler::new();
        let out = handler.convert_file(&FileData::new("café.exe", vec![1])).unwrap();
        assert_eq!(out.name, "café.bat");
        assert!(out.bytes.windows(5).any(|w| w == [b'c', b'a', b'f', 0xE9, b'.']));
    }

    #[test]
    fn convert_file_unencodable_name() {
        let handler = ExeToBatHandler::new();
        let err = handler
            .convert_file(&FileData::new("程序.exe", vec![1]))
            .unwrap_err();
        assert!(matches!(err, ConvertError::EncodingFailure { ref file, .. } if file == "程序.exe"));
    }

    #[test]
    fn ascii_config_rejects_latin1() {
        let handler = ExeToBatHandler::with_config(
            Exe2BatConfig::new().with_text_encoding(TextEncoding::Ascii),
        );
        assert!(handler.convert_file(&FileData::new("café.exe", vec![])).is_err());
        assert!(handler.convert_file(&FileData::new("cafe.exe", vec![])).is_ok());
    }

    #[test]
    fn payload_survives_conversion() {
        let handler = ExeToBatHandler::with_config(Exe2BatConfig::new().with_verbose(true));
        let bytes: Vec<u8> = (0..=255).cycle().take(1000).collect();
        let out = handler.convert_file(&FileData::new("big.exe", bytes.clone())).unwrap();

        let text = String::from_utf8(out.bytes).unwrap();
        let payload = extract_payload(&text).unwrap();
        assert_eq!(Payload::encode(&bytes).as_str(), payload);
    }
}
