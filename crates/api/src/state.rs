use std::sync::Arc;

use scholar_genai::TextGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Text-generation backend used by both writing endpoints.
    pub generator: Arc<dyn TextGenerator>,
}
