//! File payloads exchanged with the host
//!
//! A [`FileData`] is a named byte buffer. Handlers take a batch of them in
//! and hand a new batch back; the host owns both.

/// Named file content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileData {
    /// File name including extension
    pub name: String,
    /// Raw content
    pub bytes: Vec<u8>,
}

impl FileData {
    /// Create from name and bytes
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Name with the final `.suffix` removed
    ///
    /// Names without a dot are returned whole.
    #[inline]
    #[must_use]
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(stem, _)| stem)
    }

    /// Name with the final `.suffix` replaced by `extension`
    #[must_use]
    pub fn name_with_extension(&self, extension: &str) -> String {
        format!("{}.{extension}", self.stem())
    }

    /// Content length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_last_suffix() {
        assert_eq!(FileData::new("setup.exe", vec![]).stem(), "setup");
        assert_eq!(FileData::new("app.v2.exe", vec![]).stem(), "app.v2");
        assert_eq!(FileData::new("noext", vec![]).stem(), "noext");
    }

    #[test]
    fn stem_edge_cases() {
        assert_eq!(FileData::new("trailing.", vec![]).stem(), "trailing");
        assert_eq!(FileData::new(".hidden", vec![]).stem(), "");
        assert_eq!(FileData::new("", vec![]).stem(), "");
    }

    #[test]
    fn name_with_extension() {
        let file = FileData::new("tool.com", vec![1, 2]);
        assert_eq!(file.name_with_extension("bat"), "tool.bat");

        let file = FileData::new("noext", vec![]);
        assert_eq!(file.name_with_extension("bat"), "noext.bat");
    }

    #[test]
    fn len_and_empty() {
        let file = FileData::new("a.exe", vec![0x4D, 0x5A]);
        assert_eq!(file.len(), 2);
        assert!(!file.is_empty());
        assert!(FileData::default().is_empty());
    }
}
