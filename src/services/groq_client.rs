use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{AdventureError, Result};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_TEMPERATURE: f64 = 0.8;
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Thin client for the hosted chat-completion endpoint.
///
/// One request per call, no retries and no streaming: a failed round trip is
/// absorbed into the caller's fallback path instead. The credential is
/// injected at construction, never read from ambient globals.
#[derive(Clone, Debug)]
pub struct GroqClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn set_max_tokens(&mut self, max_tokens: u32) {
        self.max_tokens = max_tokens;
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one completion request and return the first choice's message
    /// content.
    ///
    /// Non-2xx statuses become [`AdventureError::Generation`]; a success
    /// response without usable content becomes
    /// [`AdventureError::EmptyCompletion`].
    pub async fn chat_completion(
        &self,
        system: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let request_url = build_chat_url(&self.base_url);
        debug!(url = %request_url, model = %self.model, "sending completion request");

        let response = client
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        debug!(status = status.as_u16(), bytes = response_text.len(), "completion response");

        if !status.is_success() {
            return Err(AdventureError::Generation {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let response_json: Value =
            serde_json::from_str(&response_text).unwrap_or(Value::Null);
        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|value| value.as_str());

        match content {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(AdventureError::EmptyCompletion),
        }
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_url_appends_path() {
        assert_eq!(
            build_chat_url("https://api.groq.com/openai/v1"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_build_chat_url_keeps_full_path() {
        assert_eq!(
            build_chat_url("http://127.0.0.1:9000/chat/completions"),
            "http://127.0.0.1:9000/chat/completions"
        );
    }
}
