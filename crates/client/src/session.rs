//! Two-step writing session: outline first, then drafts per section.

use scholar_core::outline::{outline_items, section_titles, OutlineItem};

use crate::api::ScholarApi;
use crate::error::ClientError;

/// Outline and topic returned by the first step.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutlineState {
    outline: String,
    topic: String,
}

/// Client-side session holding the current outline and topic.
///
/// The topic kept is the server's `mainTopic` echo, and it is what later
/// draft requests send.
#[derive(Debug, Clone)]
pub struct WritingSession {
    api: ScholarApi,
    current: Option<OutlineState>,
}

impl WritingSession {
    pub fn new(api: ScholarApi) -> Self {
        Self { api, current: None }
    }

    /// Generate an outline and make it the session's current one.
    ///
    /// On failure the previous outline, if any, is kept.
    pub async fn generate_outline(
        &mut self,
        topic: &str,
        keywords: Option<&str>,
    ) -> Result<&str, ClientError> {
        let response = self.api.generate_outline(topic, keywords).await?;
        tracing::debug!(topic = %response.main_topic, "Outline stored in session");

        let state = self.current.insert(OutlineState {
            outline: response.outline,
            topic: response.main_topic,
        });
        Ok(&state.outline)
    }

    /// Draft a paragraph for `section_title` using the stored outline and
    /// topic as context.
    pub async fn draft(&self, section_title: &str) -> Result<String, ClientError> {
        let state = self.current.as_ref().ok_or(ClientError::NoOutline)?;
        let response = self
            .api
            .draft_section(&state.outline, section_title, &state.topic)
            .await?;
        Ok(response.draft)
    }

    pub fn outline(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.outline.as_str())
    }

    pub fn topic(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.topic.as_str())
    }

    /// The current outline split into display items. Empty before the
    /// first outline.
    pub fn items(&self) -> Vec<OutlineItem> {
        self.outline().map(outline_items).unwrap_or_default()
    }

    /// Titles that can be passed to [`WritingSession::draft`].
    pub fn section_titles(&self) -> Vec<String> {
        self.outline().map(section_titles).unwrap_or_default()
    }
}
