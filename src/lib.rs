//! sidequest: the service layer for a spontaneous mini-adventure app
//!
//! This library covers two concerns of the app: generating five personalized
//! activity suggestions through a hosted chat-completion endpoint (with a
//! deterministic mood-keyed fallback so generation never fails the user), and
//! a thin typed client for the companion CRUD backend.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sidequest::{AdventureGenerator, AdventureRequest, Mood};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = AdventureGenerator::from_env()?;
//!
//!     let request = AdventureRequest {
//!         mood: Mood::Active,
//!         time_budget: "45".to_string(),
//!         budget: "Free".to_string(),
//!         location: "Lisbon".to_string(),
//!         latitude: 38.7223,
//!         longitude: -9.1393,
//!     };
//!
//!     let result = generator.generate(&request).await;
//!     for suggestion in &result.suggestions {
//!         println!("{} {}", suggestion.emoji, suggestion.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod services;
pub mod types;

pub use crate::core::AdventureGenerator;
pub use error::{AdventureError, Result};
pub use services::api_client::ApiClient;
pub use services::groq_client::GroqClient;
pub use services::prompt::{build_prompt, SYSTEM_PROMPT};
pub use services::resolver::{extract_json_object, fallback_suggestions, parse_suggestions};
pub use types::api::{
    AuthResponse, Friend, FriendRequest, FriendRequestAction, Memory, NewAdventure, NewMemory,
    SavedAdventure, User,
};
pub use types::{
    AdventureRequest, AdventureSuggestion, GenerationOutcome, GenerationResult, Mood,
    SUGGESTION_COUNT,
};

#[cfg(feature = "cli")]
pub mod cli;
