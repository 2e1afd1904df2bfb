use serde::{Deserialize, Serialize};

use super::adventure::AdventureSuggestion;

/// Whether the suggestions came from the model or from the canned templates.
/// Both are successful outcomes for the caller; the distinction exists for
/// observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationOutcome {
    Generated,
    Fallback,
}

/// Result of one generation attempt. Always carries exactly five suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub suggestions: Vec<AdventureSuggestion>,
    pub outcome: GenerationOutcome,
}

impl GenerationResult {
    pub fn generated(suggestions: Vec<AdventureSuggestion>) -> Self {
        Self {
            suggestions,
            outcome: GenerationOutcome::Generated,
        }
    }

    pub fn fallback(suggestions: Vec<AdventureSuggestion>) -> Self {
        Self {
            suggestions,
            outcome: GenerationOutcome::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == GenerationOutcome::Fallback
    }

    pub fn into_suggestions(self) -> Vec<AdventureSuggestion> {
        self.suggestions
    }
}
