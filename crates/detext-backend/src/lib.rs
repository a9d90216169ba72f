//! # Detext Backend - Conversion backends
//!
//! Format backends turn raw document bytes into the plain-text
//! [`Document`](detext_core::Document) model. Each backend implements
//! [`DocumentBackend`]; the [`DocumentConverter`] facade picks one from the
//! detected input format.
//!
//! ## Example
//!
//! ```rust
//! use detext_backend::DocumentConverter;
//!
//! let converter = DocumentConverter::new();
//! let doc = converter.convert_bytes(br"{\rtf1\ansi Hello}").unwrap();
//! assert_eq!(doc.text, "Hello");
//! ```

/// High-level conversion entry point
pub mod converter;
/// RTF backend
pub mod rtf;
/// Core trait definitions for conversion backends
pub mod traits;

pub use converter::DocumentConverter;
pub use rtf::RtfBackend;
pub use traits::{BackendOptions, DocumentBackend};
