//! Single-pass marker scanner.

use memchr::memmem;

use super::segment::{ConversionResult, Segment};
use super::superscript::to_superscript;

const MARKER_OPEN: &str = "{{fn:";
const MARKER_CLOSE: &str = "}}";

/// Convert raw text with `{{fn: ...}}` markers into a [`ConversionResult`].
///
/// One left-to-right pass over the input using literal substring search.
/// Literal search (rather than a regex state machine) keeps the
/// malformed-marker fallback easy to reason about: no closing `}}`
/// found means the rest of the input is consumed as plain text.
///
/// This function is total: any string, including empty or arbitrarily
/// malformed input, produces a well-formed result. It is pure and
/// side-effect-free, so concurrent calls and repeat calls are safe.
///
/// # Examples
///
/// ```
/// use citefix::convert;
///
/// let result = convert("This is text.{{fn: Smith, 2020}} More.{{fn: Doe v. Roe}}");
/// assert_eq!(result.main_text, "This is text.¹ More.²");
/// assert_eq!(result.footnotes, vec!["Smith, 2020", "Doe v. Roe"]);
/// ```
pub fn convert(input: &str) -> ConversionResult {
    if input.trim().is_empty() {
        return ConversionResult::default();
    }

    let open = memmem::Finder::new(MARKER_OPEN);
    let close = memmem::Finder::new(MARKER_CLOSE);
    let bytes = input.as_bytes();

    let mut main_text = String::new();
    let mut footnotes: Vec<String> = Vec::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut counter = 1usize;
    let mut i = 0usize;

    while i < input.len() {
        let Some(start) = open.find(&bytes[i..]).map(|p| i + p) else {
            // No more markers: the remainder is a trailing text span.
            let rest = &input[i..];
            if !rest.is_empty() {
                main_text.push_str(rest);
                segments.push(Segment::text(rest));
            }
            break;
        };

        // Text before the marker. Empty spans between adjacent markers
        // are not emitted.
        let before = &input[i..start];
        if !before.is_empty() {
            main_text.push_str(before);
            segments.push(Segment::text(before));
        }

        let Some(end) = close.find(&bytes[start..]).map(|p| start + p) else {
            // Unterminated marker: keep everything from `{{fn:` onward
            // verbatim, braces included.
            let rest = &input[start..];
            main_text.push_str(rest);
            segments.push(Segment::text(rest));
            break;
        };

        // Strictly between "{{fn:" and the matched "}}". The first
        // closing "}}" always terminates the marker, even when the
        // citation was meant to contain literal braces.
        let citation = input[start + MARKER_OPEN.len()..end].trim();

        if !citation.is_empty() {
            footnotes.push(citation.to_string());
            segments.push(Segment::footnote(citation, counter));
            main_text.push_str(&to_superscript(counter));
            counter += 1;
        }
        // Empty citations are dropped silently: no segment, and the
        // counter does not advance.

        i = end + MARKER_CLOSE.len();
    }

    ConversionResult {
        main_text,
        footnotes,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn footnote_segments(result: &ConversionResult) -> Vec<(&str, usize)> {
        result
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::Footnote { content, number } => Some((content.as_str(), *number)),
                Segment::Text { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let result = convert("");
        assert_eq!(result, ConversionResult::default());

        let result = convert("   \n\t ");
        assert_eq!(result, ConversionResult::default());
    }

    #[test]
    fn test_no_markers() {
        let result = convert("Just plain text.");
        assert_eq!(result.main_text, "Just plain text.");
        assert!(result.footnotes.is_empty());
        assert_eq!(result.segments, vec![Segment::text("Just plain text.")]);
    }

    #[test]
    fn test_standard_case() {
        let input = "This is a test.{{fn: Footnote 1}} With another.{{fn: Footnote 2}} And a [Link](url).";
        let result = convert(input);

        assert_eq!(
            result.segments,
            vec![
                Segment::text("This is a test."),
                Segment::footnote("Footnote 1", 1),
                Segment::text(" With another."),
                Segment::footnote("Footnote 2", 2),
                Segment::text(" And a [Link](url)."),
            ]
        );
        assert_eq!(result.footnotes, vec!["Footnote 1", "Footnote 2"]);
        assert_eq!(
            result.main_text,
            "This is a test.¹ With another.² And a [Link](url)."
        );
    }

    #[test]
    fn test_citation_text_never_inlined() {
        let result = convert("A{{fn: hidden}}B");
        assert_eq!(result.main_text, "A¹B");
        assert!(!result.main_text.contains("hidden"));
    }

    #[test]
    fn test_empty_citation_dropped() {
        let result = convert("A{{fn:   }}B");
        assert_eq!(result.segments, vec![Segment::text("A"), Segment::text("B")]);
        assert!(result.footnotes.is_empty());
        assert_eq!(result.main_text, "AB");
    }

    #[test]
    fn test_empty_citation_does_not_advance_counter() {
        let result = convert("A{{fn: }}B{{fn: real}}C");
        assert_eq!(result.footnotes, vec!["real"]);
        assert_eq!(footnote_segments(&result), vec![("real", 1)]);
        assert_eq!(result.main_text, "AB¹C");
    }

    #[test]
    fn test_unterminated_marker() {
        let result = convert("A{{fn: oops");
        assert_eq!(
            result.segments,
            vec![Segment::text("A"), Segment::text("{{fn: oops")]
        );
        assert!(result.footnotes.is_empty());
        assert_eq!(result.main_text, "A{{fn: oops");
    }

    #[test]
    fn test_unterminated_marker_at_start() {
        let result = convert("{{fn: never closed");
        assert_eq!(result.segments, vec![Segment::text("{{fn: never closed")]);
        assert!(result.footnotes.is_empty());
    }

    #[test]
    fn test_adjacent_markers_no_empty_text_between() {
        let result = convert("Start{{fn: one}}{{fn: two}}End");
        assert_eq!(
            result.segments,
            vec![
                Segment::text("Start"),
                Segment::footnote("one", 1),
                Segment::footnote("two", 2),
                Segment::text("End"),
            ]
        );
        assert_eq!(result.main_text, "Start¹²End");
    }

    #[test]
    fn test_marker_at_string_start_and_end() {
        let result = convert("{{fn: lead}}body{{fn: tail}}");
        assert_eq!(
            result.segments,
            vec![
                Segment::footnote("lead", 1),
                Segment::text("body"),
                Segment::footnote("tail", 2),
            ]
        );
    }

    #[test]
    fn test_first_close_terminates_marker() {
        // "{note}" supplies the first '}' of the terminating "}}"; the
        // citation keeps the opening brace and the tail stays text.
        let result = convert("X{{fn: brace {note}} tail");
        assert_eq!(
            result.segments,
            vec![
                Segment::text("X"),
                Segment::footnote("brace {note", 1),
                Segment::text(" tail"),
            ]
        );
    }

    #[test]
    fn test_citation_whitespace_trimmed() {
        let result = convert("A{{fn:   Smith, 2020  }}");
        assert_eq!(result.footnotes, vec!["Smith, 2020"]);
    }

    #[test]
    fn test_superscript_two_digit_number() {
        let mut input = String::new();
        for n in 1..=12 {
            input.push_str(&format!("s{n}{{{{fn: note {n}}}}}"));
        }
        let result = convert(&input);
        assert_eq!(result.footnotes.len(), 12);
        // 12 renders as two superscript glyphs, never a single one.
        assert!(result.main_text.ends_with("¹²"));
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let result = convert("Voir déjà.{{fn: Émile Zola, « J'accuse »}} Fin.");
        assert_eq!(result.footnotes, vec!["Émile Zola, « J'accuse »"]);
        assert_eq!(result.main_text, "Voir déjà.¹ Fin.");
    }

    #[test]
    fn test_repeat_calls_identical() {
        let input = "A{{fn: x}}B{{fn: broken";
        assert_eq!(convert(input), convert(input));
    }

    proptest! {
        #[test]
        fn prop_convert_is_total(input in ".*") {
            // Must never panic, whatever the input.
            let _ = convert(&input);
        }

        #[test]
        fn prop_footnote_numbering_invariant(input in ".*") {
            let result = convert(&input);
            let numbers: Vec<usize> = result
                .segments
                .iter()
                .filter_map(|s| match s {
                    Segment::Footnote { number, .. } => Some(*number),
                    Segment::Text { .. } => None,
                })
                .collect();
            // Count matches, and numbers are exactly 1..=len in order.
            prop_assert_eq!(numbers.len(), result.footnotes.len());
            prop_assert_eq!(numbers, (1..=result.footnotes.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_markerless_input_is_single_segment(input in "[^{]*") {
            let result = convert(&input);
            if input.trim().is_empty() {
                prop_assert!(result.segments.is_empty());
            } else {
                prop_assert_eq!(&result.segments, &vec![Segment::text(input.as_str())]);
                prop_assert_eq!(result.main_text, input);
            }
        }
    }
}
