//! Text-generation capability used by the outline and drafting services.
//!
//! [`TextGenerator`] is the seam the HTTP layer depends on; [`GeminiClient`]
//! implements it against the Gemini `generateContent` REST endpoint using
//! [`reqwest`].

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod wire;

pub use config::GenAiConfig;
pub use error::GenAiError;
pub use gemini::GeminiClient;
pub use generator::TextGenerator;
