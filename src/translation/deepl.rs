use anyhow::{Context, Result, bail};
use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Translator;

/// Endpoint for DeepL API Free keys (keys ending in `:fx`).
pub const DEFAULT_DEEPL_ENDPOINT: &str = "https://api-free.deepl.com";

// ISO 639-3 codes from whatlang mapped to DeepL source codes.
const DEEPL_SOURCES: &[(&str, &str)] = &[
    ("ara", "AR"),
    ("bul", "BG"),
    ("ces", "CS"),
    ("cmn", "ZH"),
    ("dan", "DA"),
    ("deu", "DE"),
    ("ell", "EL"),
    ("eng", "EN"),
    ("est", "ET"),
    ("fin", "FI"),
    ("fra", "FR"),
    ("hun", "HU"),
    ("ind", "ID"),
    ("ita", "IT"),
    ("jpn", "JA"),
    ("kor", "KO"),
    ("lav", "LV"),
    ("lit", "LT"),
    ("nld", "NL"),
    ("nob", "NB"),
    ("pol", "PL"),
    ("por", "PT"),
    ("ron", "RO"),
    ("rus", "RU"),
    ("slk", "SK"),
    ("slv", "SL"),
    ("spa", "ES"),
    ("swe", "SV"),
    ("tur", "TR"),
    ("ukr", "UK"),
];

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Translates through the DeepL REST API.
///
/// The source language is detected locally first and sent along when the
/// detection is reliable and DeepL supports it.
pub struct DeepLTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl DeepLTranslator {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    async fn request(&self, text: &str, target_language: &str) -> Result<String> {
        let url = format!("{}/v2/translate", self.endpoint.trim_end_matches('/'));
        let body = TranslateRequest {
            text: [text],
            target_lang: deepl_target(target_language),
            source_lang: detect_source(text),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse DeepL response")?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .context("DeepL response contained no translation")
    }
}

impl Translator for DeepLTranslator {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(self.request(text, target_language))
    }
}

/// Maps an ISO 639-1 target code to the code DeepL expects.
fn deepl_target(code: &str) -> String {
    match code {
        "en" => "EN-US".to_string(),
        "no" => "NB".to_string(),
        "pt" => "PT-PT".to_string(),
        "zh" => "ZH-HANS".to_string(),
        "zh-TW" => "ZH-HANT".to_string(),
        other => other.to_uppercase(),
    }
}

/// Detects the source language, `None` when unsure or unsupported.
fn detect_source(text: &str) -> Option<&'static str> {
    let info = whatlang::detect(text)?;
    if !info.is_reliable() {
        return None;
    }
    let code = info.lang().code();
    DEEPL_SOURCES
        .iter()
        .find(|(iso3, _)| *iso3 == code)
        .map(|(_, deepl)| *deepl)
}
