//! Property tests for the RTF scanner.
//!
//! The scanner is a total function: whatever bytes reach it, it must return
//! a normalized string without panicking.

use detext_rtf::extract;
use proptest::prelude::*;

proptest! {
    /// Arbitrary input never panics.
    #[test]
    fn extraction_is_total(input in ".*") {
        let _ = extract(&input);
    }

    /// Raw line breaks never survive; only `\par` and `\line` emit breaks,
    /// so escape-free input yields break-free output.
    #[test]
    fn raw_line_breaks_are_dropped(input in "[a-zA-Z0-9 .,\r\n]{0,64}") {
        let out = extract(&input);
        prop_assert!(!out.contains('\r') && !out.contains('\n'));
    }

    /// RTF-flavored input (braces, backslashes, control words) never panics.
    #[test]
    fn rtf_flavored_input_is_total(
        input in r"(\\[a-z]{1,9}(-?[0-9]{1,5})? ?|\\'[0-9a-zA-Z]{0,2}|\{|\}|\\u-?[0-9]{1,6}\??|[ -~]{0,8}){0,40}"
    ) {
        let _ = extract(&input);
    }

    /// Normalization holds: no run of three or more newlines, no outer
    /// whitespace.
    #[test]
    fn output_is_normalized(input in ".*") {
        let out = extract(&input);
        prop_assert!(!out.contains("\n\n\n"), "blank runs must be collapsed");
        prop_assert_eq!(out.trim(), out.as_str(), "output must be trimmed");
    }

    /// Output containing no scope markers, escape introducers, or raw line
    /// breaks rescans to itself.
    #[test]
    fn marker_free_output_is_a_fixed_point(input in ".*") {
        let out = extract(&input);
        if !out.contains(['{', '}', '\\', '\n']) {
            prop_assert_eq!(extract(&out), out);
        }
    }

    /// Plain alphanumeric text passes through unchanged (modulo trim).
    #[test]
    fn plain_text_round_trips(input in "[a-zA-Z0-9 .,!?]{0,64}") {
        prop_assert_eq!(extract(&input), input.trim());
    }
}
