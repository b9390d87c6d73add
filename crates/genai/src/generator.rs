use async_trait::async_trait;
use scholar_core::types::GenerationRequest;

use crate::error::GenAiError;

/// Something that turns a system instruction plus prompt into text.
///
/// Handlers hold an `Arc<dyn TextGenerator>` so tests can swap in a stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation and return the raw model text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenAiError>;

    /// Name of the backing model, for logs and the health endpoint.
    fn model(&self) -> &str;

    /// Whether credentials are configured. Without them every
    /// [`TextGenerator::generate`] call fails.
    fn has_api_key(&self) -> bool;
}
