//! Handler for the outline step.
//!
//! Route:
//! - `POST /api/generate-outline` -- generate a thesis outline

use axum::extract::State;
use axum::Json;
use scholar_core::error::CoreError;
use scholar_core::types::{OutlineRequest, OutlineResponse};
use scholar_core::{prompts, validation};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Message returned to the caller when the generator fails.
pub const OUTLINE_FAILED: &str = "Failed to generate outline. Check API Key and server logs.";

/// POST /api/generate-outline
///
/// Requires `topic`; `keywords` is optional. Returns the raw model output
/// as `outline` and echoes the topic back as `mainTopic`.
pub async fn generate_outline(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<OutlineRequest>,
) -> AppResult<Json<OutlineResponse>> {
    let input = validation::validate_outline(request)?;

    let outline = state
        .generator
        .generate(&prompts::outline_request(&input))
        .await
        .map_err(|e| CoreError::upstream(OUTLINE_FAILED, e))?;

    tracing::info!(
        topic = %input.topic,
        has_keywords = input.keywords.is_some(),
        outline_len = outline.len(),
        "Outline generated"
    );

    Ok(Json(OutlineResponse {
        outline,
        main_topic: input.topic,
    }))
}
