pub mod api_client;
pub mod groq_client;
pub mod prompt;
pub mod resolver;

pub use api_client::ApiClient;
pub use groq_client::GroqClient;
