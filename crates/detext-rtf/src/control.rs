//! Control-word classification.
//!
//! Two small tables drive the scanner: the set of destination group words
//! whose entire content is discarded, and the mapping from control word to
//! emitted output. Keeping the mapping as an explicit enum (rather than
//! conditionals inside the scanner loop) keeps the substitution set easy to
//! extend and test in isolation.

/// Destination groups carrying non-textual metadata. A group whose first
/// control word is in this set is discarded entirely, nested groups
/// included. The `\*` marker (optional destinations unknown to the reader)
/// is handled separately by the scanner.
const DISCARD_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "header",
    "footer",
    "headerl",
    "headerr",
    "headerf",
    "footerl",
    "footerr",
    "footerf",
    "pict",
    "object",
    "fldinst",
];

/// Output action selected by a control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlWord {
    /// `\par` / `\line`: paragraph or forced line break
    ParagraphBreak,
    /// `\tab`: horizontal tab
    Tab,
    /// `\u<N>`: signed 16-bit code-point escape with fallback glyph
    Unicode,
    /// Named typographic substitution (quotes, dashes, bullet)
    Symbol(char),
    /// Formatting or destination word with no plain-text output
    Ignored,
}

impl ControlWord {
    /// Map a control-word name to its output action.
    ///
    /// Every name not in the substitution set is [`ControlWord::Ignored`]:
    /// formatting words (`\b`, `\fs24`, `\qc`, ...) affect appearance, not
    /// text content.
    #[must_use = "classification selects the scanner's output action"]
    pub fn classify(name: &str) -> Self {
        match name {
            "par" | "line" => Self::ParagraphBreak,
            "tab" => Self::Tab,
            "u" => Self::Unicode,
            "lquote" => Self::Symbol('\u{2018}'),
            "rquote" => Self::Symbol('\u{2019}'),
            "ldblquote" => Self::Symbol('\u{201C}'),
            "rdblquote" => Self::Symbol('\u{201D}'),
            "bullet" => Self::Symbol('\u{2022}'),
            "endash" => Self::Symbol('\u{2013}'),
            "emdash" => Self::Symbol('\u{2014}'),
            _ => Self::Ignored,
        }
    }

    /// Check whether a group-opening control word names a discard
    /// destination.
    #[must_use = "determines whether the scanner discards the group"]
    pub fn is_discard_destination(name: &str) -> bool {
        DISCARD_DESTINATIONS.contains(&name)
    }
}
