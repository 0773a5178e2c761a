use anyhow::{Context, Result, bail};
use futures_util::future::BoxFuture;
use reqwest::{Client, Url};
use serde_json::Value;

use super::Translator;

/// Public web endpoint used by the Google Translate widget.
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com";

/// Translates through Google's keyless `translate_a/single` endpoint.
///
/// The source language is always auto-detected by the service.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_GOOGLE_ENDPOINT.to_string())
    }
}

impl GoogleTranslator {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, text: &str, target_language: &str) -> Result<Url> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .with_context(|| format!("Invalid translation endpoint: {}", self.endpoint))
    }

    async fn request(&self, text: &str, target_language: &str) -> Result<String> {
        let url = self.request_url(text, target_language)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse Google Translate response")?;

        parse_response(&body)
    }
}

impl Translator for GoogleTranslator {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(self.request(text, target_language))
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists segments as
/// `[translated, original, ...]`.
fn parse_response(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Unexpected Google Translate response: missing segments")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        bail!("Unexpected Google Translate response: empty translation");
    }

    Ok(translated)
}
