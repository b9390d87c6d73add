//! Domain layer for the thesis writing assistant.
//!
//! Holds the request/response types shared by the server and the client,
//! the presence checks applied to incoming requests, the prompt builders
//! for both generation steps, and the outline item rendering rule.

pub mod error;
pub mod outline;
pub mod prompts;
pub mod types;
pub mod validation;
