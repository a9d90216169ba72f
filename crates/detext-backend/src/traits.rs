//! Core trait definitions for conversion backends

use detext_core::{DetextError, Document, InputFormat};
use std::path::Path;

/// Options for backend processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendOptions {
    /// Require the input to carry the format's magic prefix.
    ///
    /// When disabled, the backend extracts best-effort from content that
    /// merely claims the right extension (fragments, clipboard dumps).
    pub require_magic: bool,

    /// Maximum characters of extracted text to keep (None = unlimited).
    ///
    /// Useful for previews; truncation happens after normalization.
    pub max_chars: Option<usize>,
}

impl BackendOptions {
    /// Set whether the format magic prefix is required
    #[inline]
    #[must_use = "returns options with the magic requirement configured"]
    pub const fn with_require_magic(mut self, require: bool) -> Self {
        self.require_magic = require;
        self
    }

    /// Set the maximum characters of extracted text to keep
    #[inline]
    #[must_use = "returns options with the character limit configured"]
    pub const fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl Default for BackendOptions {
    #[inline]
    fn default() -> Self {
        Self {
            require_magic: true,
            max_chars: None,
        }
    }
}

/// Main trait for document backends
///
/// Each backend implements this trait to turn the bytes of one input format
/// into the plain-text document model.
pub trait DocumentBackend: Send + Sync {
    /// Get the format this backend handles
    fn format(&self) -> InputFormat;

    /// Parse document from bytes
    ///
    /// # Errors
    /// Returns an error if decoding or validation fails. Extraction itself
    /// is total; only the surrounding steps can fail.
    fn parse_bytes(&self, data: &[u8], options: &BackendOptions)
        -> Result<Document, DetextError>;

    /// Parse document from file path
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn parse_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &BackendOptions,
    ) -> Result<Document, DetextError> {
        let data = std::fs::read(path.as_ref())?;
        self.parse_bytes(&data, options)
    }

    /// Check if this backend can handle the given format
    fn can_handle(&self, format: InputFormat) -> bool {
        self.format() == format
    }
}
