//! Input format types for document conversion
//!
//! This module defines the `InputFormat` enum for the formats detext can
//! process, along with detection from file extensions and raw bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Magic prefix of an RTF document: the root group always opens with the
/// `rtf` control word (`{\rtf1 ...`).
const RTF_MAGIC: &[u8] = b"{\\rtf";

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum InputFormat {
    /// RTF (Rich Text Format) (.rtf)
    #[serde(rename = "RTF")]
    Rtf,
}

impl InputFormat {
    /// Detect format from file extension
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "rtf" => Some(Self::Rtf),
            _ => None,
        }
    }

    /// Detect format from a file path's extension
    #[inline]
    #[must_use = "detects format from path"]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Detect format by sniffing the leading bytes of the content.
    ///
    /// Leading ASCII whitespace before the root group is tolerated; some
    /// writers emit a BOM-free file with a leading newline.
    #[must_use = "detects format from content"]
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        let start = data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(data.len());
        if data[start..].starts_with(RTF_MAGIC) {
            Some(Self::Rtf)
        } else {
            None
        }
    }

    /// File extensions associated with this format
    #[must_use = "returns the extensions for this format"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Rtf => &["rtf"],
        }
    }

    /// Human-readable format description
    #[must_use = "returns the description for this format"]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Rtf => "Rich Text Format",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rtf => write!(f, "RTF"),
        }
    }
}
