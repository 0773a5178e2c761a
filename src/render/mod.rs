//! Aligned, colorized rendering of tagged sentences.
//!
//! Each sentence becomes a block of three lines (tokens, underline, tags),
//! optionally followed by a translation and always closed by a separator rule.

mod compose;
mod formatter;
mod palette;
mod width;

pub use compose::{ComposedLines, Layout, UNDERLINE_GLYPH, compose_lines};
pub use formatter::{FormatOptions, Formatter, RULE_GLYPH, RuleWidth, Translation};
pub use palette::{
    ColorAssignment, DEFAULT_EXCLUDED, PALETTE, TagColor, assign_colors, is_known_color,
};
pub use width::{display_width, pad_to_width};
