//! RTF backend
//!
//! Wraps the hand-built scanner from `detext-rtf` into the document model:
//! UTF-8 validation, optional magic-prefix check, extraction, optional
//! truncation, metadata.

use crate::traits::{BackendOptions, DocumentBackend};
use detext_core::{DetextError, Document, InputFormat};
use std::path::Path;

/// RTF backend
///
/// Converts Rich Text Format (.rtf) bytes to a plain-text [`Document`].
/// Extraction never fails on malformed RTF; the only error paths are
/// invalid UTF-8 and (in the default strict mode) a missing `{\rtf` prefix.
///
/// ## Example
///
/// ```rust
/// use detext_backend::{BackendOptions, DocumentBackend, RtfBackend};
///
/// let backend = RtfBackend::new();
/// let doc = backend
///     .parse_bytes(br"{\rtf1\ansi Hello, World!}", &BackendOptions::default())
///     .unwrap();
/// assert_eq!(doc.text, "Hello, World!");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RtfBackend;

impl RtfBackend {
    /// Create a new RTF backend instance
    #[inline]
    #[must_use = "creates a new RTF backend instance"]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentBackend for RtfBackend {
    #[inline]
    fn format(&self) -> InputFormat {
        InputFormat::Rtf
    }

    fn parse_bytes(
        &self,
        data: &[u8],
        options: &BackendOptions,
    ) -> Result<Document, DetextError> {
        let content = std::str::from_utf8(data)
            .map_err(|e| DetextError::EncodingError(format!("invalid UTF-8 in RTF input: {e}")))?;

        if options.require_magic && InputFormat::detect_from_bytes(data) != Some(InputFormat::Rtf)
        {
            return Err(DetextError::FormatError(
                "input does not open an RTF group (expected `{\\rtf` prefix)".to_string(),
            ));
        }

        let mut text = detext_rtf::extract(content);
        if let Some(limit) = options.max_chars {
            if text.chars().count() > limit {
                log::debug!("truncating extracted text to {limit} characters");
                text = text.chars().take(limit).collect();
            }
        }
        log::debug!(
            "extracted {} characters from {} input bytes",
            text.chars().count(),
            data.len()
        );

        Ok(Document::from_text(text, InputFormat::Rtf))
    }

    fn parse_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &BackendOptions,
    ) -> Result<Document, DetextError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        self.parse_bytes(&data, options).map_err(|err| match err {
            DetextError::FormatError(msg) => {
                DetextError::FormatError(format!("{msg}: {}", path.display()))
            }
            DetextError::EncodingError(msg) => {
                DetextError::EncodingError(format!("{msg}: {}", path.display()))
            }
            other => other,
        })
    }
}
