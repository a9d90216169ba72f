//! Single-pass RTF scanner.
//!
//! The scanner walks the source left to right, one character of lookahead at
//! a time, with two pieces of state: the current group nesting depth and an
//! optional "skipping since depth D" marker. Everything else is an
//! append-only output buffer that is normalized once at the end.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::control::ControlWord;

/// Runs of three or more newlines collapse to exactly one blank line.
static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline-collapse pattern is valid"));

/// Extract normalized plain text from RTF source.
///
/// Total function: malformed escapes, unbalanced braces, and truncated input
/// are absorbed rather than reported, and whatever text was accumulated is
/// returned. Re-running on escape-free output returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use detext_rtf::extract;
///
/// assert_eq!(extract(r"{\fonttbl{\f0 Arial;}}Hello"), "Hello");
/// assert_eq!(extract(r"A\par\par\par B"), "A\n\nB");
/// assert_eq!(extract("{{{unclosed"), "unclosed");
/// ```
#[must_use = "extraction produces the plain text of the document"]
pub fn extract(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut scanner = Scanner {
        chars: &chars,
        pos: 0,
        depth: 0,
        skip_from: None,
        out: String::with_capacity(source.len()),
    };
    scanner.run();
    normalize(&scanner.out)
}

/// Collapse excess blank lines and trim outer whitespace.
fn normalize(raw: &str) -> String {
    EXCESS_NEWLINES.replace_all(raw, "\n\n").trim().to_string()
}

/// Scanner state for one extraction call. Nothing outlives the call.
struct Scanner<'a> {
    /// Source characters; `pos` only ever moves forward
    chars: &'a [char],
    pos: usize,
    /// Group nesting depth; a stray closing brace at depth 0 is a no-op
    depth: usize,
    /// Depth at which the active discard region started, if any
    skip_from: Option<usize>,
    out: String,
}

impl Scanner<'_> {
    fn run(&mut self) {
        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '{' => self.open_group(),
                '}' => self.close_group(),
                '\\' if !self.skipping() => self.escape(),
                // Raw line breaks are insignificant formatting; real breaks
                // only come from \par and \line.
                '\r' | '\n' => self.pos += 1,
                _ => {
                    if !self.skipping() {
                        self.out.push(c);
                    }
                    self.pos += 1;
                }
            }
        }
        if self.skip_from.is_some() || self.depth > 0 {
            log::debug!(
                "input ended with {} unclosed group(s), skipping={}",
                self.depth,
                self.skip_from.is_some()
            );
        }
    }

    fn skipping(&self) -> bool {
        self.skip_from.is_some()
    }

    fn open_group(&mut self) {
        self.depth += 1;
        if self.skip_from.is_none() && self.group_is_discarded() {
            self.skip_from = Some(self.depth);
        }
        self.pos += 1;
    }

    fn close_group(&mut self) {
        if self.skip_from == Some(self.depth) {
            self.skip_from = None;
        }
        self.depth = self.depth.saturating_sub(1);
        self.pos += 1;
    }

    /// Peek past the opening brace: a group whose first token is a discard
    /// destination, or the `\*` optional-destination marker, is skipped
    /// wholesale.
    fn group_is_discarded(&self) -> bool {
        let mut i = self.pos + 1;
        if self.chars.get(i) != Some(&'\\') {
            return false;
        }
        i += 1;
        match self.chars.get(i) {
            Some('*') => true,
            Some(c) if c.is_ascii_lowercase() => {
                let start = i;
                while matches!(self.chars.get(i), Some(c) if c.is_ascii_lowercase()) {
                    i += 1;
                }
                let name: String = self.chars[start..i].iter().collect();
                ControlWord::is_discard_destination(&name)
            }
            _ => false,
        }
    }

    /// Decode one escape sequence. `pos` is on the backslash.
    fn escape(&mut self) {
        self.pos += 1;
        let Some(&c) = self.chars.get(self.pos) else {
            // Truncated escape at end of input: nothing left to decode.
            return;
        };
        match c {
            '\\' | '{' | '}' => {
                self.out.push(c);
                self.pos += 1;
            }
            '~' => {
                self.out.push('\u{00A0}'); // non-breaking space
                self.pos += 1;
            }
            '-' => {
                self.out.push('\u{00AD}'); // soft hyphen
                self.pos += 1;
            }
            '_' => {
                self.out.push('\u{2011}'); // non-breaking hyphen
                self.pos += 1;
            }
            '\'' => self.hex_escape(),
            c if c.is_ascii_lowercase() => self.control_word(),
            // Anything else is not an escape target: the backslash is
            // dropped and the character rescanned as ordinary text.
            _ => {}
        }
    }

    /// `\'hh` hexadecimal byte escape. `pos` is on the quote. Both digit
    /// slots are consumed whether or not they parse; an invalid pair emits
    /// nothing.
    fn hex_escape(&mut self) {
        let hi = self.chars.get(self.pos + 1).copied();
        let lo = self.chars.get(self.pos + 2).copied();
        self.pos = (self.pos + 3).min(self.chars.len());

        let (Some(hi), Some(lo)) = (hi, lo) else {
            return;
        };
        if let (Some(h), Some(l)) = (hi.to_digit(16), lo.to_digit(16)) {
            let code = h * 16 + l; // 0..=255, always a valid scalar
            if let Some(ch) = char::from_u32(code) {
                self.out.push(ch);
            }
        } else {
            log::debug!("invalid hex escape \\'{hi}{lo} dropped");
        }
    }

    /// Control word: maximal run of lowercase letters, optional signed
    /// integer parameter, one trailing space consumed as the word delimiter.
    /// `pos` is on the first letter.
    fn control_word(&mut self) {
        let start = self.pos;
        while matches!(self.chars.get(self.pos), Some(c) if c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();
        let param = self.read_parameter();
        if self.chars.get(self.pos) == Some(&' ') {
            self.pos += 1;
        }

        match ControlWord::classify(&name) {
            ControlWord::ParagraphBreak => self.out.push('\n'),
            ControlWord::Tab => self.out.push('\t'),
            ControlWord::Symbol(ch) => self.out.push(ch),
            ControlWord::Unicode => self.unicode_escape(param),
            ControlWord::Ignored => {}
        }
    }

    /// Optional numeric parameter glued to a control word: an optional
    /// leading minus, then digits. A bare minus is left in place as text.
    fn read_parameter(&mut self) -> Option<i32> {
        let start = self.pos;
        let mut i = self.pos;
        if self.chars.get(i) == Some(&'-') {
            i += 1;
        }
        let digits_start = i;
        while matches!(self.chars.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
        if i == digits_start {
            return None;
        }
        self.pos = i;

        let text: String = self.chars[start..i].iter().collect();
        match text.parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::debug!("control-word parameter {text:?} out of range, ignored");
                None
            }
        }
    }

    /// `\u<N>` code-point escape. Negative values wrap by +65536 (the
    /// parameter is a signed 16-bit quantity on the wire). Writers follow
    /// the escape with a fallback glyph for non-Unicode-aware readers; it is
    /// consumed here so it does not duplicate the decoded character, unless
    /// the next character is an escape introducer or scope marker.
    fn unicode_escape(&mut self, param: Option<i32>) {
        let Some(value) = param else {
            // `\u` with no parameter decodes nothing and owns no fallback.
            return;
        };
        let code = if value < 0 { value + 65536 } else { value };
        match u32::try_from(code).ok().and_then(char::from_u32) {
            Some(ch) => self.out.push(ch),
            None => log::debug!("code point {code} is not a valid scalar, dropped"),
        }
        match self.chars.get(self.pos) {
            Some('\\' | '{' | '}') | None => {}
            Some(_) => self.pos += 1,
        }
    }
}
