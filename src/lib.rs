//! # hinshi - part-of-speech tagging in the terminal
//!
//! `hinshi` (品詞, "part of speech") tags English sentences and prints each
//! token above its tag, column-aligned even when tags are East-Asian wide
//! glosses. Tags can be colorized, listed instead of aligned, and each
//! sentence can be followed by a translation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Analyze text given as arguments
//! hinshi The quick brown fox jumps over the lazy dog.
//!
//! # Japanese glosses, translated into Japanese
//! hinshi --tags japanese --to ja "I saw it."
//!
//! # Analyze a file or stdin
//! hinshi -f notes.txt
//! echo "It works." | hinshi --list
//!
//! # Interactive mode
//! hinshi repl
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/hinshi/config.toml`:
//!
//! ```toml
//! [hinshi]
//! tags = "japanese"
//! translate = true
//! to = "ja"
//! translator = "deepl"
//!
//! [translators.deepl]
//! api_key_env = "DEEPL_API_KEY"
//! ```

/// Translation cache backed by `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files, and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

pub mod render;

/// Interactive mode.
pub mod repl;

pub mod tagging;

/// Translation backends and the cache wrapper.
pub mod translation;

/// Terminal UI components (spinner, styles).
pub mod ui;
