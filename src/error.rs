use thiserror::Error;

/// Main error type for the adventure service layer
#[derive(Error, Debug)]
pub enum AdventureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation request failed with HTTP {status}: {body}")]
    Generation { status: u16, body: String },

    #[error("Completion response contained no content")]
    EmptyCompletion,

    #[error("Failed to parse generated activities: {0}")]
    Parse(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AdventureError>;

impl AdventureError {
    /// Check if the generation pipeline may absorb this error into the
    /// fallback suggestion set instead of surfacing it to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AdventureError::Generation { .. }
                | AdventureError::EmptyCompletion
                | AdventureError::Parse(_)
                | AdventureError::Http(_)
                | AdventureError::Serialization(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AdventureError::Config(_) => "CONFIG_ERROR",
            AdventureError::Generation { .. } => "GENERATION_ERROR",
            AdventureError::EmptyCompletion => "EMPTY_COMPLETION",
            AdventureError::Parse(_) => "PARSE_ERROR",
            AdventureError::Http(_) => "HTTP_ERROR",
            AdventureError::Serialization(_) => "SERIALIZATION_ERROR",
            AdventureError::Api { .. } => "API_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}
