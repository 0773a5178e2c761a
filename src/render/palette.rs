//! Tag color allocation.
//!
//! Every distinct tag in a sentence gets its own color from a fixed catalog,
//! minus the colors the user excluded (typically the ones that vanish on a
//! dark background).

use anyhow::{Result, bail};
use owo_colors::{AnsiColors, OwoColorize};
use std::collections::{BTreeSet, HashMap};

/// Named terminal colors in catalog order.
pub const PALETTE: &[(&str, AnsiColors)] = &[
    ("black", AnsiColors::Black),
    ("grey", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("light_grey", AnsiColors::White),
    ("dark_grey", AnsiColors::BrightBlack),
    ("light_red", AnsiColors::BrightRed),
    ("light_green", AnsiColors::BrightGreen),
    ("light_yellow", AnsiColors::BrightYellow),
    ("light_blue", AnsiColors::BrightBlue),
    ("light_magenta", AnsiColors::BrightMagenta),
    ("light_cyan", AnsiColors::BrightCyan),
    ("white", AnsiColors::BrightWhite),
];

/// Colors excluded when nothing else is configured.
pub const DEFAULT_EXCLUDED: &[&str] = &["black", "grey", "dark_grey"];

/// A color picked from [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagColor {
    name: &'static str,
    ansi: AnsiColors,
}

impl TagColor {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Wraps `text` in this color's escape sequence.
    pub fn paint(&self, text: &str) -> String {
        format!("{}", text.color(self.ansi))
    }
}

/// Mapping from tag to display color for one sentence.
#[derive(Debug, Clone, Default)]
pub struct ColorAssignment {
    colors: HashMap<String, TagColor>,
}

impl ColorAssignment {
    pub fn get(&self, tag: &str) -> Option<TagColor> {
        self.colors.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Paints `text` with the color assigned to `tag`, or returns it bare.
    pub fn paint(&self, tag: &str, text: &str) -> String {
        self.get(tag)
            .map_or_else(|| text.to_string(), |color| color.paint(text))
    }
}

/// Returns `true` if `name` is a color in the catalog.
pub fn is_known_color(name: &str) -> bool {
    PALETTE.iter().any(|(known, _)| *known == name)
}

/// Assigns a color to each distinct tag.
///
/// Tags are taken in sorted order and paired with the palette minus
/// `excluded`. When there are more tags than colors the palette cycles.
///
/// # Errors
///
/// Returns an error if `excluded` removes every color in the palette.
pub fn assign_colors<'a, I, S>(tags: I, excluded: &[S]) -> Result<ColorAssignment>
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    let tags: BTreeSet<&str> = tags.into_iter().collect();
    if tags.is_empty() {
        return Ok(ColorAssignment::default());
    }

    let available: Vec<TagColor> = PALETTE
        .iter()
        .filter(|(name, _)| !excluded.iter().any(|e| e.as_ref() == *name))
        .map(|&(name, ansi)| TagColor { name, ansi })
        .collect();

    if available.is_empty() {
        bail!(
            "No colors left to assign: every palette color is excluded\n\n\
             Remove some entries from 'exclude_colors' or pass --no-color."
        );
    }

    let colors = tags
        .into_iter()
        .zip(available.iter().cycle())
        .map(|(tag, color)| (tag.to_string(), *color))
        .collect();

    Ok(ColorAssignment { colors })
}
