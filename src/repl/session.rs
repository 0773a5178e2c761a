use anyhow::Result;
use std::io::Write;

use super::command::{ReplCommand, parse_command};
use super::source::LineSource;
use super::ui;
use crate::render::Formatter;
use crate::tagging::Analyzer;
use crate::ui::{CLEAR_SCREEN, Spinner};

/// Prompt shown before each line of input.
pub const PROMPT: &str = "> ";

/// An interactive analysis session.
///
/// Each line is analyzed and formatted on its own. A failure on one line is
/// reported on stderr and the session keeps going.
pub struct ReplSession {
    analyzer: Analyzer,
    formatter: Formatter,
    running: bool,
    clear_on_start: bool,
}

impl ReplSession {
    pub const fn new(analyzer: Analyzer, formatter: Formatter) -> Self {
        Self {
            analyzer,
            formatter,
            running: false,
            clear_on_start: false,
        }
    }

    /// Clears the screen before the start banner.
    #[must_use]
    pub const fn clear_on_start(mut self, clear: bool) -> Self {
        self.clear_on_start = clear;
        self
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Runs until `q`, end of input, or a cancelled prompt.
    pub async fn run<W: Write>(
        &mut self,
        source: &mut dyn LineSource,
        out: &mut W,
    ) -> Result<()> {
        if self.clear_on_start {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.start(out)?;

        while self.running {
            let Some(line) = source.next_line(PROMPT)? else {
                break;
            };

            match parse_command(&line) {
                None => {}
                Some(ReplCommand::Quit) => break,
                Some(ReplCommand::Clear) => {
                    out.write_all(CLEAR_SCREEN.as_bytes())?;
                    out.flush()?;
                }
                Some(ReplCommand::Help) => ui::write_help(out)?,
                Some(ReplCommand::Analyze(text)) => {
                    match self.analyze(&text).await {
                        Ok(formatted) if formatted.is_empty() => {}
                        Ok(formatted) => writeln!(out, "{formatted}")?,
                        Err(err) => ui::print_error(&format!("{err:#}")),
                    }
                    out.flush()?;
                }
            }
        }

        self.stop(out)
    }

    fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.running = true;
        writeln!(out, "{}", ui::START_BANNER)?;
        Ok(())
    }

    fn stop<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.running = false;
        writeln!(out, "{}", ui::STOP_BANNER)?;
        out.flush()?;
        Ok(())
    }

    async fn analyze(&self, text: &str) -> Result<String> {
        let sentences = self.analyzer.analyze(text)?;
        let _spinner = self
            .formatter
            .translates()
            .then(|| Spinner::new("Translating..."));
        self.formatter.format(&sentences).await
    }
}
