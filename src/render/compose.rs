//! Composes the aligned token, underline, and tag lines for one sentence.

use std::collections::BTreeSet;

use super::palette::ColorAssignment;
use super::width::{display_width, pad_to_width};

/// Glyph repeated under each token.
pub const UNDERLINE_GLYPH: char = '▔';

/// How tags are laid out beneath the tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One tag per token, column-aligned with the token above it.
    #[default]
    Inline,
    /// Distinct tags as a bullet list below the underline.
    List,
}

/// The three lines rendered for a sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedLines {
    pub tokens: String,
    pub underline: String,
    /// Inline tag line, or the bullet list (one `- tag` per line) in list layout.
    pub tags: String,
}

impl ComposedLines {
    pub fn into_lines(self) -> [String; 3] {
        [self.tokens, self.underline, self.tags]
    }
}

/// Builds aligned lines from `(token, tag)` pairs.
///
/// Widths are always measured on the bare tag text; `colors` only affects
/// what is displayed. Pass `None` to render without color.
pub fn compose_lines(
    pairs: &[(String, String)],
    layout: Layout,
    colors: Option<&ColorAssignment>,
) -> ComposedLines {
    let mut lines = ComposedLines::default();
    let mut seen_tags: BTreeSet<&str> = BTreeSet::new();

    for (token, tag) in pairs {
        let tag_width = display_width(tag);
        let token_width = display_width(token);

        let column = match layout {
            Layout::Inline => token_width.max(tag_width),
            Layout::List => {
                seen_tags.insert(tag);
                token_width
            }
        };

        lines.tokens.push(' ');
        lines.tokens.push_str(&pad_to_width(token, column));

        let underline: String = std::iter::repeat_n(UNDERLINE_GLYPH, column).collect();
        lines.underline.push(' ');
        lines.underline.push_str(&paint(colors, tag, &underline));

        if layout == Layout::Inline {
            // Padding sits outside the escape sequence
            let padding = " ".repeat(column - tag_width);
            lines.tags.push(' ');
            lines.tags.push_str(&paint(colors, tag, tag));
            lines.tags.push_str(&padding);
        }
    }

    if layout == Layout::List {
        lines.tags = render_tag_list(seen_tags, colors);
    }

    lines
}

fn paint(colors: Option<&ColorAssignment>, tag: &str, text: &str) -> String {
    colors.map_or_else(|| text.to_string(), |c| c.paint(tag, text))
}

// Shortest first; the set's alphabetical order breaks ties.
fn render_tag_list(tags: BTreeSet<&str>, colors: Option<&ColorAssignment>) -> String {
    let mut tags: Vec<&str> = tags.into_iter().collect();
    tags.sort_by_key(|tag| tag.chars().count());

    tags.iter()
        .map(|tag| format!("- {}", paint(colors, tag, tag)))
        .collect::<Vec<_>>()
        .join("\n")
}
