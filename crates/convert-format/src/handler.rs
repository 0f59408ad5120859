//! Format handler contract
//!
//! Every converter plugin implements [`FormatHandler`]. The host calls
//! [`init`](FormatHandler::init) once, reads the declared formats to build
//! its routing table, then calls [`convert`](FormatHandler::convert) with
//! batches of files.

use crate::data::FileData;
use crate::error::ConvertResult;
use crate::format::FileFormat;
use async_trait::async_trait;

/// Converter plugin contract
///
/// Implement this trait to add support for a new conversion.
#[async_trait]
pub trait FormatHandler: Send + Sync {
    /// Stable handler identifier
    fn name(&self) -> &str;

    /// Formats this handler reads and writes
    fn supported_formats(&self) -> &[FileFormat];

    /// Whether [`init`](Self::init) has completed
    fn is_ready(&self) -> bool;

    /// Whether the handler accepts inputs outside its declared formats
    fn supports_any_input(&self) -> bool {
        false
    }

    /// Check the declared formats for a source/target MIME pair
    fn declares_pair(&self, from_mime: &str, to_mime: &str) -> bool {
        let formats = self.supported_formats();
        formats.iter().any(|f| f.from && f.has_mime(from_mime))
            && formats.iter().any(|f| f.to && f.has_mime(to_mime))
    }

    /// Prepare the handler for use
    async fn init(&mut self) -> ConvertResult<()>;

    /// Convert a batch of files from `input_format` to `output_format`
    ///
    /// # Errors
    /// Implementation-specific; see [`ConvertError`](crate::ConvertError).
    async fn convert(
        &self,
        inputs: &[FileData],
        input_format: &FileFormat,
        output_format: &FileFormat,
        args: &[String],
    ) -> ConvertResult<Vec<FileData>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::format::{CommonFormats, BATCH_MIME, PE_MIME};

    struct UpperHandler {
        formats: Vec<FileFormat>,
        ready: bool,
    }

    impl UpperHandler {
        fn new() -> Self {
            Self {
                formats: vec![
                    CommonFormats::exe().builder("in").allow_from().build(),
                    CommonFormats::batch().builder("out").allow_to().build(),
                ],
                ready: false,
            }
        }
    }

    #[async_trait]
    impl FormatHandler for UpperHandler {
        fn name(&self) -> &str {
            "upper"
        }

        fn supported_formats(&self) -> &[FileFormat] {
            &self.formats
        }

        fn is_ready(&self) -> bool {
            self.ready
        }

        async fn init(&mut self) -> ConvertResult<()> {
            self.ready = true;
            Ok(())
        }

        async fn convert(
            &self,
            inputs: &[FileData],
            input_format: &FileFormat,
            output_format: &FileFormat,
            _args: &[String],
        ) -> ConvertResult<Vec<FileData>> {
            if !self.declares_pair(&input_format.mime, &output_format.mime) {
                return Err(ConvertError::unsupported(
                    &input_format.mime,
                    &output_format.mime,
                ));
            }
            Ok(inputs
                .iter()
                .map(|f| FileData::new(f.name_with_extension("bat"), f.bytes.to_ascii_uppercase()))
                .collect())
        }
    }

    #[tokio::test]
    async fn init_flips_ready() {
        let mut handler = UpperHandler::new();
        assert!(!handler.is_ready());
        handler.init().await.unwrap();
        assert!(handler.is_ready());
    }

    #[test]
    fn declares_pair_respects_direction() {
        let handler = UpperHandler::new();
        assert!(handler.declares_pair(PE_MIME, BATCH_MIME));
        assert!(!handler.declares_pair(BATCH_MIME, PE_MIME));
        assert!(!handler.declares_pair(PE_MIME, PE_MIME));
    }

    #[test]
    fn any_input_defaults_off() {
        assert!(!UpperHandler::new().supports_any_input());
    }

    #[tokio::test]
    async fn trait_object_dispatch() {
        let handler: Box<dyn FormatHandler> = Box::new(UpperHandler::new());
        let out = handler
            .convert(
                &[FileData::new("a.exe", b"mz".to_vec())],
                &CommonFormats::exe(),
                &CommonFormats::batch(),
                &[],
            )
            .await
            .unwrap();

        assert_eq!(out, vec![FileData::new("a.bat", b"MZ".to_vec())]);
        assert_eq!(handler.name(), "upper");
    }
}
