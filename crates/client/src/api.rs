//! HTTP client for the outline and drafting endpoints.

use scholar_core::types::{DraftRequest, DraftResponse, ErrorBody, OutlineRequest, OutlineResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

/// Shown when the server fails an outline call without an `error` field.
pub const OUTLINE_FALLBACK_ERROR: &str = "Server error during outline generation.";

/// Shown when the server fails a draft call without an `error` field.
pub const DRAFT_FALLBACK_ERROR: &str = "Server error during section drafting.";

/// HTTP client for one Scholar server.
#[derive(Debug, Clone)]
pub struct ScholarApi {
    client: reqwest::Client,
    base_url: String,
}

impl ScholarApi {
    /// Create a new client.
    ///
    /// * `base_url` - Server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Request an outline for `topic`.
    ///
    /// Sends `POST /api/generate-outline`.
    pub async fn generate_outline(
        &self,
        topic: &str,
        keywords: Option<&str>,
    ) -> Result<OutlineResponse, ClientError> {
        let body = OutlineRequest {
            topic: Some(topic.to_string()),
            keywords: keywords.map(String::from),
        };
        self.post("/api/generate-outline", &body, OUTLINE_FALLBACK_ERROR)
            .await
    }

    /// Request a paragraph for one section of `full_outline`.
    ///
    /// Sends `POST /api/draft-section`.
    pub async fn draft_section(
        &self,
        full_outline: &str,
        section_title: &str,
        main_topic: &str,
    ) -> Result<DraftResponse, ClientError> {
        let body = DraftRequest {
            full_outline: Some(full_outline.to_string()),
            section_title: Some(section_title.to_string()),
            main_topic: Some(main_topic.to_string()),
        };
        self.post("/api/draft-section", &body, DRAFT_FALLBACK_ERROR)
            .await
    }

    // ---- private helpers ----

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::debug!(status = status.as_u16(), %message, path, "Server rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
