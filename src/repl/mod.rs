//! Interactive read-eval-print loop over the analyzer and formatter.

/// Command parsing for REPL input.
pub mod command;
mod session;
mod source;
mod ui;

pub use session::{PROMPT, ReplSession};
pub use source::{LineSource, PromptLines, ReaderLines};
