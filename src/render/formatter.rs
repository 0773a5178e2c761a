//! Formats tagged sentences into printable blocks, one per sentence.

use anyhow::{Result, bail};
use terminal_size::{Width, terminal_size};

use super::compose::{Layout, compose_lines};
use super::palette::{DEFAULT_EXCLUDED, assign_colors};
use crate::tagging::TaggedSentence;
use crate::translation::Translator;

/// Character used for the separator rule between sentences.
pub const RULE_GLYPH: char = '─';

/// Where the separator rule gets its width from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleWidth {
    /// Query the attached terminal every time a rule is drawn.
    #[default]
    Terminal,
    /// Always use this many columns.
    Fixed(usize),
}

impl RuleWidth {
    pub fn columns(self) -> Result<usize> {
        match self {
            Self::Fixed(columns) => Ok(columns),
            Self::Terminal => match terminal_size() {
                Some((Width(columns), _)) => Ok(usize::from(columns)),
                None => bail!(
                    "Could not determine the terminal width (no terminal attached)\n\n\
                     Pass --width <columns> or set 'width' in the config file."
                ),
            },
        }
    }

    /// Renders a full separator rule.
    pub fn rule(self) -> Result<String> {
        Ok(std::iter::repeat_n(RULE_GLYPH, self.columns()?).collect())
    }
}

/// Rendering options for a [`Formatter`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub layout: Layout,
    pub color: bool,
    pub excluded_colors: Vec<String>,
    pub rule_width: RuleWidth,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Inline,
            color: false,
            excluded_colors: DEFAULT_EXCLUDED.iter().map(ToString::to_string).collect(),
            rule_width: RuleWidth::Terminal,
        }
    }
}

/// Translation step appended to each sentence block.
pub struct Translation {
    translator: Box<dyn Translator>,
    target_language: Option<String>,
}

impl Translation {
    pub fn new(translator: Box<dyn Translator>, target_language: Option<String>) -> Self {
        Self {
            translator,
            target_language,
        }
    }

    async fn apply(&self, text: &str) -> Result<String> {
        match &self.target_language {
            Some(target) => self.translator.translate(text, target).await,
            None => Ok(text.to_string()),
        }
    }
}

/// Turns tagged sentences into the final display text.
pub struct Formatter {
    options: FormatOptions,
    translation: Option<Translation>,
}

impl Formatter {
    pub const fn new(options: FormatOptions) -> Self {
        Self {
            options,
            translation: None,
        }
    }

    /// Enables the translation line under each sentence.
    #[must_use]
    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = Some(translation);
        self
    }

    pub const fn translates(&self) -> bool {
        self.translation.is_some()
    }

    /// Formats every sentence into a block and joins the blocks.
    ///
    /// Sentences are processed in order; a failed translation aborts the
    /// whole call.
    pub async fn format(&self, sentences: &[TaggedSentence]) -> Result<String> {
        let mut blocks = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            blocks.push(self.format_sentence(sentence).await?);
        }
        Ok(blocks.join("\n"))
    }

    async fn format_sentence(&self, sentence: &TaggedSentence) -> Result<String> {
        let colors = if self.options.color {
            Some(assign_colors(
                sentence.tags(),
                &self.options.excluded_colors,
            )?)
        } else {
            None
        };

        let composed = compose_lines(
            &sentence.token_tag_pairs,
            self.options.layout,
            colors.as_ref(),
        );
        let mut lines = Vec::from(composed.into_lines());

        if let Some(translation) = &self.translation {
            let translated = translation.apply(&sentence.text).await?;
            lines.push(format!("\n{translated}"));
        }

        let rule = self.options.rule_width.rule()?;
        lines.push(format!("\n{rule}\n"));

        Ok(lines.join("\n"))
    }
}
