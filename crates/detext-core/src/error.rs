//! Error types for document conversion operations.
//!
//! The extraction core itself is total and never fails; errors only arise
//! around it (file I/O, byte decoding, format detection).

use thiserror::Error;

/// Error types that can occur during document conversion.
///
/// # Examples
///
/// ```rust
/// use detext_core::DetextError;
///
/// fn report(err: &DetextError) {
///     match err {
///         DetextError::IoError(e) => eprintln!("file error: {e}"),
///         DetextError::EncodingError(msg) => eprintln!("bad encoding: {msg}"),
///         DetextError::FormatError(msg) => eprintln!("unsupported format: {msg}"),
///         DetextError::ConversionError(msg) => eprintln!("conversion failed: {msg}"),
///         _ => eprintln!("error: {err}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DetextError {
    /// File I/O error (unreadable input, unwritable output).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input bytes could not be decoded as text.
    ///
    /// Callers are responsible for decoding the source document from its
    /// original byte encoding; inputs reaching the backends must be UTF-8.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Input is not a supported format, or format detection failed.
    #[error("Format error: {0}")]
    FormatError(String),

    /// General conversion failure that fits no other category.
    #[error("Conversion error: {0}")]
    ConversionError(String),
}

/// Convenience result alias for detext operations.
pub type Result<T> = std::result::Result<T, DetextError>;
