//! High-level conversion entry point.
//!
//! `DocumentConverter` resolves the input format (extension first, content
//! sniffing as fallback) and dispatches to the matching backend.

use crate::rtf::RtfBackend;
use crate::traits::{BackendOptions, DocumentBackend};
use detext_core::{DetextError, Document, InputFormat};
use std::path::Path;

/// Converts documents of any supported format to plain text
///
/// ## Example
///
/// ```rust,no_run
/// use detext_backend::DocumentConverter;
///
/// let converter = DocumentConverter::new();
/// let doc = converter.convert("letter.rtf")?;
/// println!("{}", doc.text);
/// # Ok::<(), detext_core::DetextError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentConverter {
    options: BackendOptions,
}

impl DocumentConverter {
    /// Create a converter with default options
    #[inline]
    #[must_use = "creates a new converter"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit backend options
    #[inline]
    #[must_use = "creates a new converter"]
    pub const fn with_options(options: BackendOptions) -> Self {
        Self { options }
    }

    /// Convert a file, resolving its format from the extension or, failing
    /// that, from the leading bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, its format cannot be
    /// resolved, or the backend rejects the content.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Document, DetextError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        let format = InputFormat::from_path(path)
            .or_else(|| InputFormat::detect_from_bytes(&data))
            .ok_or_else(|| {
                DetextError::FormatError(format!("unsupported input format: {}", path.display()))
            })?;
        log::debug!("resolved {} as {format}", path.display());

        self.convert_bytes_as(&data, format)
    }

    /// Convert in-memory bytes, sniffing the format from content.
    ///
    /// # Errors
    /// Returns an error if no supported format matches the content or the
    /// backend rejects it.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<Document, DetextError> {
        let format = InputFormat::detect_from_bytes(data).ok_or_else(|| {
            DetextError::FormatError("content matches no supported input format".to_string())
        })?;
        self.convert_bytes_as(data, format)
    }

    /// Convert in-memory bytes as a known format.
    ///
    /// # Errors
    /// Returns an error if the backend rejects the content.
    pub fn convert_bytes_as(
        &self,
        data: &[u8],
        format: InputFormat,
    ) -> Result<Document, DetextError> {
        match format {
            InputFormat::Rtf => RtfBackend::new().parse_bytes(data, &self.options),
            // `InputFormat` is non-exhaustive; no other variants exist yet.
            _ => unreachable!("unsupported input format: {format:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_convert_bytes_sniffs_rtf() {
        let converter = DocumentConverter::new();
        let doc = converter.convert_bytes(br"{\rtf1\ansi Hi}").unwrap();
        assert_eq!(doc.text, "Hi");
        assert_eq!(doc.format, InputFormat::Rtf);
    }

    #[test]
    fn test_convert_bytes_rejects_unknown_content() {
        let converter = DocumentConverter::new();
        let result = converter.convert_bytes(b"plain prose");
        assert!(matches!(result, Err(DetextError::FormatError(_))));
    }

    #[test]
    fn test_convert_file_by_extension() {
        let mut temp = Builder::new().suffix(".rtf").tempfile().unwrap();
        temp.write_all(br"{\rtf1 On disk.}").unwrap();
        temp.flush().unwrap();

        let doc = DocumentConverter::new().convert(temp.path()).unwrap();
        assert_eq!(doc.text, "On disk.");
    }

    #[test]
    fn test_convert_file_by_sniffing_without_extension() {
        let mut temp = Builder::new().suffix("").tempfile().unwrap();
        temp.write_all(br"{\rtf1 Sniffed.}").unwrap();
        temp.flush().unwrap();

        let doc = DocumentConverter::new().convert(temp.path()).unwrap();
        assert_eq!(doc.text, "Sniffed.");
    }

    #[test]
    fn test_convert_missing_file() {
        let result = DocumentConverter::new().convert("/nonexistent/file.rtf");
        assert!(matches!(result, Err(DetextError::IoError(_))));
    }

    #[test]
    fn test_converter_options_flow_through() {
        let converter =
            DocumentConverter::with_options(BackendOptions::default().with_max_chars(Some(2)));
        let doc = converter.convert_bytes(br"{\rtf1 Hello}").unwrap();
        assert_eq!(doc.text, "He");
    }
}
