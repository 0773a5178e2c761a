use anyhow::Result;

use super::table::{TagMode, TagTable};
use super::tagger::{HeuristicTagger, Tagger};
use super::tokenize;

/// A sentence and its `(token, tag)` pairs, with tags already rendered in
/// the analyzer's [`TagMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSentence {
    pub text: String,
    pub token_tag_pairs: Vec<(String, String)>,
}

impl TaggedSentence {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.token_tag_pairs.iter().map(|(_, tag)| tag.as_str())
    }
}

/// Splits text into sentences, tags each one, and renders the tags.
pub struct Analyzer {
    tagger: Box<dyn Tagger>,
    table: TagTable,
    mode: TagMode,
}

impl Analyzer {
    pub fn new(tagger: Box<dyn Tagger>, table: TagTable, mode: TagMode) -> Self {
        Self {
            tagger,
            table,
            mode,
        }
    }

    /// The built-in heuristic tagger with the Penn Treebank table.
    pub fn with_mode(mode: TagMode) -> Self {
        Self::new(
            Box::new(HeuristicTagger::new()),
            TagTable::penn_treebank(),
            mode,
        )
    }

    pub const fn mode(&self) -> TagMode {
        self.mode
    }

    /// Analyzes `text`, one [`TaggedSentence`] per sentence.
    ///
    /// # Errors
    ///
    /// Returns an error when the tagger produces a code the table cannot
    /// render in the current mode.
    pub fn analyze(&self, text: &str) -> Result<Vec<TaggedSentence>> {
        tokenize::sentences(text)
            .into_iter()
            .map(|sentence| self.analyze_sentence(sentence))
            .collect()
    }

    fn analyze_sentence(&self, text: String) -> Result<TaggedSentence> {
        let tokens = tokenize::words(&text);
        let token_tag_pairs = self
            .tagger
            .tag(&tokens)
            .into_iter()
            .map(|(token, code)| Ok((token, self.table.display(&code, self.mode)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(TaggedSentence {
            text,
            token_tag_pairs,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FixedTagger(&'static str);

    impl Tagger for FixedTagger {
        fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
            tokens
                .iter()
                .map(|token| (token.clone(), self.0.to_string()))
                .collect()
        }
    }

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

    #[test]
    fn test_pangram_abbreviation() {
        let analyzer = Analyzer::with_mode(TagMode::Abbreviation);
        let sentences = analyzer.analyze(PANGRAM).unwrap();

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, PANGRAM);
        assert_eq!(sentences[0].token_tag_pairs.len(), 10);
        assert_eq!(
            sentences[0].tags().collect::<Vec<_>>(),
            vec!["DT", "JJ", "JJ", "NN", "VBZ", "IN", "DT", "JJ", "NN", "."]
        );
    }

    #[test]
    fn test_pangram_japanese() {
        let analyzer = Analyzer::with_mode(TagMode::Japanese);
        let sentences = analyzer.analyze(PANGRAM).unwrap();
        let pairs = &sentences[0].token_tag_pairs;

        assert_eq!(pairs[0], ("The".to_string(), "限定詞".to_string()));
        assert_eq!(pairs[3], ("fox".to_string(), "名詞".to_string()));
        assert_eq!(pairs[9], (".".to_string(), ".".to_string()));
    }

    #[test]
    fn test_expansion_mode() {
        let analyzer = Analyzer::with_mode(TagMode::Expansion);
        let sentences = analyzer.analyze("Dogs bark.").unwrap();
        assert_eq!(
            sentences[0].tags().collect::<Vec<_>>(),
            vec!["Noun, plural", "Noun, singular or mass", "."]
        );
    }

    #[test]
    fn test_multiple_sentences() {
        let analyzer = Analyzer::with_mode(TagMode::Abbreviation);
        let sentences = analyzer.analyze("I run. You walk.").unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(
            sentences[0].token_tag_pairs[2],
            (".".to_string(), ".".to_string())
        );
        assert_eq!(sentences[0].text, "I run.");
        assert_eq!(sentences[1].text, "You walk.");
    }

    #[test]
    fn test_empty_text_yields_no_sentences() {
        let analyzer = Analyzer::with_mode(TagMode::Japanese);
        assert!(analyzer.analyze("").unwrap().is_empty());
        assert!(analyzer.analyze("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_code_fails_in_gloss_modes() {
        let analyzer = Analyzer::new(
            Box::new(FixedTagger("``")),
            TagTable::penn_treebank(),
            TagMode::Japanese,
        );
        let err = analyzer.analyze("hello").unwrap_err();
        assert!(err.to_string().contains("Unknown tag"));
    }

    #[test]
    fn test_unknown_code_passes_in_abbreviation_mode() {
        let analyzer = Analyzer::new(
            Box::new(FixedTagger("``")),
            TagTable::penn_treebank(),
            TagMode::Abbreviation,
        );
        let sentences = analyzer.analyze("hello").unwrap();
        assert_eq!(sentences[0].tags().collect::<Vec<_>>(), vec!["``"]);
    }
}
