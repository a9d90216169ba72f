//! RTF (Rich Text Format) plain-text extraction
//!
//! A single-pass scanner over the raw characters of an RTF document. It
//! tracks group nesting with a depth counter, discards whole non-textual
//! destinations (font tables, stylesheets, embedded objects, headers and
//! footers), decodes the escape families (`\\`, `\'hh`, `\uN`, named
//! symbols), and normalizes the result. No document tree is ever built.
//!
//! Extraction is total: malformed input degrades gracefully and always
//! produces a string.
//!
//! ## Examples
//!
//! ```rust
//! use detext_rtf::extract;
//!
//! let rtf = r"{\rtf1\ansi{\fonttbl{\f0 Arial;}}Hello \b World\b0!}";
//! assert_eq!(extract(rtf), "Hello World!");
//! ```
//!
//! ```rust
//! use detext_rtf::extract;
//!
//! assert_eq!(extract(r"First\par Second"), "First\nSecond");
//! assert_eq!(extract(r"caf\'e9"), "café");
//! assert_eq!(extract(r"\u65?"), "A");
//! ```

/// Control-word classification tables
pub mod control;
/// The single-pass scanner
pub mod extract;

pub use control::ControlWord;
pub use extract::extract;
