use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::Translator;
use super::language::language_name;
use super::prompt::build_system_prompt;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Translates through an OpenAI-compatible chat completions endpoint.
pub struct OpenAiTranslator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    async fn request(&self, text: &str, target_language: &str) -> Result<String> {
        let url = self.completions_url();

        // Prompt with the language name when we know it, the raw code otherwise
        let language = language_name(target_language).unwrap_or(target_language);
        let chat_request = build_request(&self.model, language, text);

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        extract_content(body)
    }
}

impl Translator for OpenAiTranslator {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(self.request(text, target_language))
    }
}

fn build_request<'a>(model: &'a str, language: &str, text: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![
            Message {
                role: "system",
                content: Cow::Owned(build_system_prompt(language)),
            },
            Message {
                role: "user",
                content: Cow::Borrowed(text),
            },
        ],
        stream: false,
    }
}

fn extract_content(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .context("API response contained no translation")
}
