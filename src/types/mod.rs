pub mod adventure;
pub mod api;
pub mod result;

pub use adventure::{AdventureRequest, AdventureSuggestion, Mood, SUGGESTION_COUNT};
pub use result::{GenerationOutcome, GenerationResult};
