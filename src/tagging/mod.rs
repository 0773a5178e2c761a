//! Sentence splitting, tokenization, and part-of-speech tagging.

mod analyzer;
mod table;
mod tagger;

/// Sentence and word tokenization.
pub mod tokenize;

pub use analyzer::{Analyzer, TaggedSentence};
pub use table::{TagEntry, TagMode, TagTable};
pub use tagger::{HeuristicTagger, Tagger};
