//! Unicode superscript rendering of footnote numbers.

/// Superscript forms of the decimal digits 0-9.
///
/// Note the code points are not contiguous: 1-3 predate the U+207x
/// block and live in Latin-1 (U+00B9, U+00B2, U+00B3).
const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}',
    '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Render a footnote number as a Unicode superscript string.
///
/// Multi-digit numbers render as the concatenation of each digit's
/// superscript glyph (12 becomes superscript '1' followed by
/// superscript '2', never a single glyph).
///
/// # Examples
///
/// ```
/// use citefix::to_superscript;
///
/// assert_eq!(to_superscript(1), "\u{00B9}");
/// assert_eq!(to_superscript(12), "\u{00B9}\u{00B2}");
/// ```
pub fn to_superscript(n: usize) -> String {
    n.to_string()
        .bytes()
        .map(|b| SUPERSCRIPT_DIGITS[(b - b'0') as usize])
        .collect()
}

/// Whether a character is one of the superscript digit glyphs emitted
/// by [`to_superscript`]. Renderers use this to recognize footnote
/// reference runs in annotated text.
pub fn is_superscript_digit(c: char) -> bool {
    SUPERSCRIPT_DIGITS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        assert_eq!(to_superscript(0), "⁰");
        assert_eq!(to_superscript(1), "¹");
        assert_eq!(to_superscript(2), "²");
        assert_eq!(to_superscript(3), "³");
        assert_eq!(to_superscript(4), "⁴");
        assert_eq!(to_superscript(9), "⁹");
    }

    #[test]
    fn test_multi_digit_concatenates_per_digit() {
        assert_eq!(to_superscript(12), "¹²");
        assert_eq!(to_superscript(105), "¹⁰⁵");
    }

    #[test]
    fn test_is_superscript_digit() {
        for c in "⁰¹²³⁴⁵⁶⁷⁸⁹".chars() {
            assert!(is_superscript_digit(c));
        }
        assert!(!is_superscript_digit('1'));
        assert!(!is_superscript_digit('a'));
    }
}
