//! # Detext Core - Document types for plain-text extraction
//!
//! Core types shared by the detext conversion crates: the plain-text
//! [`Document`] model, input format detection, and the error taxonomy.
//!
//! ## Quick Start
//!
//! ```rust
//! use detext_core::{Document, InputFormat};
//!
//! let doc = Document::from_text("Hello, World!".to_string(), InputFormat::Rtf);
//! assert_eq!(doc.text, "Hello, World!");
//! assert_eq!(doc.metadata.num_characters, 13);
//! ```
//!
//! Conversion backends live in the `detext-backend` crate; the hand-built
//! RTF scanner lives in `detext-rtf`.

/// Plain-text document model and metadata
pub mod document;
/// Error types for conversion operations
pub mod error;
/// Input format types and detection
pub mod format;

pub use document::{Document, DocumentMetadata};
pub use error::{DetextError, Result};
pub use format::InputFormat;
