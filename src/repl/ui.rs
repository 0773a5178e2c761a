//! Banners and help text for interactive mode.

use std::io::{self, Write};

use super::command::COMMANDS;
use crate::ui::Style;

pub const START_BANNER: &str = "Interactive mode has been initiated.";
pub const STOP_BANNER: &str = "Interactive mode has been terminated.";

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    for (word, description) in COMMANDS {
        writeln!(
            out,
            "Type {} to {}",
            Style::command(format!("'{word}'")),
            Style::secondary(description.to_lowercase())
        )?;
    }
    Ok(())
}

pub fn print_error(message: &str) {
    crate::warn!("{} {message}", Style::error("Error:"));
}
