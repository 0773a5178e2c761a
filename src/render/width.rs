//! Display width of tokens and tags in terminal columns.

use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthChar;

/// Returns the number of terminal columns `s` occupies.
///
/// The string is NFKC-normalized first. Each resulting character counts as
/// 2 columns when it is East-Asian wide, otherwise 1. Zero-width and control
/// characters still count as 1.
pub fn display_width(s: &str) -> usize {
    s.nfkc().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

// East-Asian-Wide marks that `unicode-width` measures as zero or one column.
const WIDE_MARKS: &[(char, char)] = &[
    ('\u{302A}', '\u{302F}'),
    ('\u{3099}', '\u{309A}'),
    ('\u{16FE4}', '\u{16FE4}'),
    ('\u{16FF0}', '\u{16FF1}'),
];

// NFKC folds fullwidth forms to their narrow equivalents, so after
// normalization a double-width char is a Wide one. Wide combining marks are
// not double-width in `unicode-width` and are listed separately.
fn is_wide(c: char) -> bool {
    c.width() == Some(2) || WIDE_MARKS.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Pads `s` with trailing spaces until it spans `width` columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut padded = String::with_capacity(s.len() + width.saturating_sub(current));
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    padded
}
