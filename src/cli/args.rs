use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;
use crate::tagging::TagMode;
use crate::translation::TranslatorKind;

#[derive(Parser, Debug)]
#[command(name = "hinshi")]
#[command(about = "Part-of-speech tagging for English with aligned, colorized output")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// English text to analyze (reads --file or stdin if omitted)
    pub text: Vec<String>,

    /// File to analyze
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by one-shot analysis and interactive mode.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// How tags are displayed
    #[arg(long, value_enum, value_name = "MODE")]
    pub tags: Option<TagMode>,

    /// List each sentence's distinct tags instead of aligning them under tokens
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Color tags (default unless NO_COLOR is set)
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Disable colors
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,

    /// Color never used for tags (repeatable, replaces the configured list)
    #[arg(long = "exclude-color", value_name = "NAME")]
    pub exclude_colors: Vec<String>,

    /// Append a translation of each sentence
    #[arg(long)]
    pub translate: bool,

    /// Target language code (ISO 639-1, e.g., ja, en, zh); implies --translate
    #[arg(short = 't', long = "to", value_name = "LANG")]
    pub to: Option<String>,

    /// Translation backend
    #[arg(long, value_enum)]
    pub translator: Option<TranslatorKind>,

    /// Model name for the openai backend
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Separator width in columns (defaults to the terminal width)
    #[arg(short = 'w', long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Disable the translation cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Suppress status output on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl AnalysisArgs {
    /// Converts flags into config overrides. `no_color_env` is whether
    /// `NO_COLOR` is set; an explicit flag still wins over it.
    pub fn resolve_options(&self, no_color_env: bool) -> ResolveOptions {
        let color = if self.no_color {
            Some(false)
        } else if self.color {
            Some(true)
        } else if no_color_env {
            Some(false)
        } else {
            None
        };

        ResolveOptions {
            tags: self.tags,
            list: self.list.then_some(true),
            color,
            exclude_colors: self.exclude_colors.clone(),
            translate: (self.translate || self.to.is_some()).then_some(true),
            to: self.to.clone(),
            translator: self.translator,
            model: self.model.clone(),
            width: self.width,
            no_cache: self.no_cache,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive mode: analyze one line at a time
    Repl {
        #[command(flatten)]
        analysis: AnalysisArgs,
    },
    /// List the part-of-speech tags with their expansions and glosses
    Tags,
    /// List supported language codes
    Languages,
    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}
