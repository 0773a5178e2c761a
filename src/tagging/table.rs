//! Penn Treebank tag table and tag display modes.

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Penn Treebank codes with their English expansion and Japanese gloss.
const PENN_TREEBANK: &[(&str, &str, &str)] = &[
    ("CC", "Coordinating conjunction", "調整接続詞"),
    ("CD", "Cardinal number", "基数"),
    ("DT", "Determiner", "限定詞"),
    ("EX", "Existential there", "存在を表す there"),
    ("FW", "Foreign word", "外国語"),
    ("IN", "Preposition or subordinating conjunction", "前置詞|従属接続詞"),
    ("JJ", "Adjective", "形容詞"),
    ("JJR", "Adjective, comparative", "形容詞(比較級)"),
    ("JJS", "Adjective, superlative", "形容詞(最上級)"),
    ("LS", "List item marker", "-"),
    ("MD", "Modal", "法"),
    ("NN", "Noun, singular or mass", "名詞"),
    ("NNS", "Noun, plural", "名詞(複数形)"),
    ("NNP", "Proper noun, singular", "固有名詞"),
    ("NNPS", "Proper noun, plural", "固有名詞(複数形)"),
    ("PDT", "Predeterminer", "前限定辞"),
    ("POS", "Possessive ending", "所有格の終わり"),
    ("PRP", "Personal pronoun", "人称代名詞"),
    ("PRP$", "Possessive pronoun", "所有代名詞"),
    ("RB", "Adverb", "副詞"),
    ("RBR", "Adverb, comparative", "副詞(比較級)"),
    ("RBS", "Adverb, superlative", "副詞(最上級)"),
    ("RP", "Particle", "不変化詞"),
    ("SYM", "Symbol", "記号"),
    ("TO", "to", "前置詞 to"),
    ("UH", "Interjection", "感嘆詞"),
    ("VB", "Verb, base form", "動詞(原形)"),
    ("VBD", "Verb, past tense", "動詞(過去形)"),
    ("VBG", "Verb, gerund or present participle", "動詞(動名詞|現在分詞)"),
    ("VBN", "Verb, past participle", "動詞(過去分詞)"),
    ("VBP", "Verb, non-3rd person singular present", "動詞(三人称単数以外の現在形)"),
    ("VBZ", "Verb, 3rd person singular present", "動詞(三人称単数の現在形)"),
    ("WDT", "Wh-determiner", "Wh 限定詞"),
    ("WP", "Wh-pronoun", "Wh 代名詞"),
    ("WP$", "Possessive wh-pronoun", "所有 Wh 代名詞"),
    ("WRB", "Wh-adverb", "Wh 副詞"),
    (",", ",", ","),
    (".", ".", "."),
];

/// How a tag is shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// The raw code, e.g. `NN`.
    #[default]
    Abbreviation,
    /// The English name, e.g. `Noun, singular or mass`.
    Expansion,
    /// The Japanese gloss, e.g. `名詞`.
    Japanese,
}

impl TagMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abbreviation => "abbreviation",
            Self::Expansion => "expansion",
            Self::Japanese => "japanese",
        }
    }
}

/// One row of the tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub code: &'static str,
    pub expansion: &'static str,
    pub gloss: &'static str,
}

/// Immutable lookup from tag code to its display forms.
#[derive(Debug, Clone)]
pub struct TagTable {
    entries: Vec<TagEntry>,
    index: HashMap<&'static str, usize>,
}

impl Default for TagTable {
    fn default() -> Self {
        Self::penn_treebank()
    }
}

impl TagTable {
    /// The Penn Treebank tagset plus the comma and period tags.
    pub fn penn_treebank() -> Self {
        let entries: Vec<TagEntry> = PENN_TREEBANK
            .iter()
            .map(|&(code, expansion, gloss)| TagEntry {
                code,
                expansion,
                gloss,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.code, i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, code: &str) -> Option<&TagEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Renders `code` in the requested mode.
    ///
    /// # Errors
    ///
    /// Returns an error for codes missing from the table, except in
    /// [`TagMode::Abbreviation`] where the code is shown as-is.
    pub fn display(&self, code: &str, mode: TagMode) -> Result<String> {
        if mode == TagMode::Abbreviation {
            return Ok(code.to_string());
        }

        let entry = self
            .get(code)
            .ok_or_else(|| anyhow!("Unknown tag: '{code}' has no {} entry", mode.as_str()))?;

        Ok(match mode {
            TagMode::Expansion => entry.expansion.to_string(),
            TagMode::Japanese | TagMode::Abbreviation => entry.gloss.to_string(),
        })
    }
}
