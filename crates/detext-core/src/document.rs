//! Plain-text document model produced by conversion backends.
//!
//! A [`Document`] is the single artifact of a conversion: normalized plain
//! text plus coarse metadata. Downstream consumers (a `text/plain` file
//! writer, a page-layout renderer) take the text as-is; nothing here retains
//! source-format structure.

use serde::{Deserialize, Serialize};

use crate::error::{DetextError, Result};
use crate::format::InputFormat;

/// Metadata describing a converted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Total characters (Unicode scalar values) in the extracted text
    pub num_characters: usize,

    /// Non-empty paragraphs (blank-line separated blocks) in the text
    pub num_paragraphs: usize,
}

/// A converted plain-text document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Normalized plain text (blank runs collapsed, outer whitespace trimmed)
    pub text: String,

    /// Format the text was extracted from
    pub format: InputFormat,

    /// Document metadata
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Build a document from already-extracted text, computing metadata.
    #[must_use = "constructs a document that should be used"]
    pub fn from_text(text: String, format: InputFormat) -> Self {
        let metadata = DocumentMetadata {
            num_characters: text.chars().count(),
            num_paragraphs: text
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .count(),
        };
        Self {
            text,
            format,
            metadata,
        }
    }

    /// The extracted plain text
    #[inline]
    #[must_use = "returns the document text"]
    pub fn to_text(&self) -> &str {
        &self.text
    }

    /// Serialize the document (text + metadata) to pretty-printed JSON
    ///
    /// # Errors
    /// Returns `ConversionError` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DetextError::ConversionError(format!("JSON serialization failed: {e}")))
    }
}
