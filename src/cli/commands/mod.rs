//! Subcommand implementations.

/// One-shot analysis of arguments, a file, or stdin.
pub mod analyze;

/// `config` command handler.
pub mod config;

/// Interactive mode handler.
pub mod repl;

/// `tags` command handler.
pub mod tags;

mod pipeline;
