use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    error::{AdventureError, Result},
    services::groq_client::GroqClient,
    services::prompt::{build_prompt, SYSTEM_PROMPT},
    services::resolver::{fallback_suggestions, parse_suggestions},
    types::{AdventureRequest, AdventureSuggestion, GenerationResult, SUGGESTION_COUNT},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Front door of the generation pipeline.
///
/// One call to [`generate`](AdventureGenerator::generate) is one attempt:
/// build the prompt, make a single completion round trip, parse the result.
/// Any failure along the way degrades to the mood-keyed fallback set, so the
/// caller always receives five suggestions. Overlapping calls are
/// independent; the generator holds no mutable state.
#[derive(Debug)]
pub struct AdventureGenerator {
    client: GroqClient,
    timeout: Duration,
}

impl AdventureGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GroqClient::new(api_key),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client.set_model(model);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.client.set_temperature(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.client.set_max_tokens(max_tokens);
        self
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            AdventureError::Config(
                "GROQ_API_KEY environment variable must be set before creating an \
                 AdventureGenerator"
                    .to_string(),
            )
        })?;
        let mut generator = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            generator.client.set_base_url(base_url);
        }
        Ok(generator)
    }

    /// Run one generation attempt. Never fails: transport, HTTP and parse
    /// errors all degrade to the fallback set for the request's mood, and
    /// the outcome is reported on the result and as a structured log event.
    pub async fn generate(&self, request: &AdventureRequest) -> GenerationResult {
        match self.attempt(request).await {
            Ok(suggestions) => {
                info!(
                    mood = request.mood.as_str(),
                    location = %request.location,
                    outcome = "generated",
                    "adventure generation succeeded"
                );
                GenerationResult::generated(suggestions)
            }
            Err(err) => {
                warn!(
                    mood = request.mood.as_str(),
                    location = %request.location,
                    outcome = "fallback",
                    code = err.error_code(),
                    error = %err,
                    "adventure generation degraded to fallback"
                );
                GenerationResult::fallback(fallback_suggestions(request.mood.as_str()))
            }
        }
    }

    async fn attempt(&self, request: &AdventureRequest) -> Result<Vec<AdventureSuggestion>> {
        let prompt = build_prompt(request);
        debug!(chars = prompt.len(), "built generation prompt");

        let content = self
            .client
            .chat_completion(SYSTEM_PROMPT, &prompt, self.timeout)
            .await?;
        let suggestions = parse_suggestions(&content)?;

        // no partial results: anything other than the full fan-out fails the attempt
        if suggestions.len() != SUGGESTION_COUNT {
            return Err(AdventureError::Parse(format!(
                "expected {} activities, got {}",
                SUGGESTION_COUNT,
                suggestions.len()
            )));
        }

        Ok(suggestions)
    }
}
