use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};
use std::io::BufRead;

use crate::ui::is_prompt_cancelled;

/// Supplies REPL input one line at a time.
pub trait LineSource {
    /// Returns the next line, or `None` once input has ended or the user
    /// cancelled the prompt.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive prompt for a terminal.
pub struct PromptLines {
    render_config: RenderConfig<'static>,
}

impl Default for PromptLines {
    fn default() -> Self {
        let prompt_style = Styled::new(">")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        Self { render_config }
    }
}

impl LineSource for PromptLines {
    fn next_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let answer = Text::new("")
            .with_render_config(self.render_config)
            .with_help_message("Type an English sentence, 'help' for commands, 'q' to quit")
            .prompt();

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(err) if is_prompt_cancelled(&err) => {
                println!();
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Lines from any buffered reader, for piped stdin and tests.
///
/// The prompt is not echoed.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
