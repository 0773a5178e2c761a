//! Styling for banners, tables, and messages printed around the analysis.
//!
//! Every helper returns plain text when colors are disabled globally.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

fn styled<T: Display>(text: T, paint: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        paint(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers (e.g., "Penn Treebank tags", "Configuration")
    pub fn header<T: Display>(text: T) -> String {
        styled(text, |t| t.bold().to_string())
    }

    /// Labels and keys (e.g., "tags", "translator")
    pub fn label<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Primary values (e.g., resolved settings)
    pub fn value<T: Display>(text: T) -> String {
        styled(text, |t| t.cyan().to_string())
    }

    /// Supplementary info (e.g., expansions, language names)
    pub fn secondary<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        styled(text, |t| t.red().bold().to_string())
    }

    /// REPL commands (e.g., "q", "help")
    pub fn command<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Language and tag codes
    pub fn code<T: Display>(text: T) -> String {
        styled(text, |t| t.yellow().to_string())
    }
}
