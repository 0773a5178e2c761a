mod cached;
mod deepl;
mod google;
mod language;
mod openai;
mod prompt;

use anyhow::Result;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use cached::CachedTranslator;
pub use deepl::{DEFAULT_DEEPL_ENDPOINT, DeepLTranslator};
pub use google::{DEFAULT_GOOGLE_ENDPOINT, GoogleTranslator};
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, validate_language};
pub use openai::OpenAiTranslator;
pub use prompt::prompt_hash;

/// Translates one sentence into a target language.
pub trait Translator: Send + Sync {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> BoxFuture<'a, Result<String>>;
}

/// Translation backends selectable from the command line or config.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorKind {
    #[default]
    Google,
    Deepl,
    Openai,
}

impl TranslatorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Deepl => "deepl",
            Self::Openai => "openai",
        }
    }
}

impl std::fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
