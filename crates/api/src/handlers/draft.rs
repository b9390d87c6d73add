//! Handler for the drafting step.
//!
//! Route:
//! - `POST /api/draft-section` -- draft one paragraph for an outline section

use axum::extract::State;
use axum::Json;
use scholar_core::error::CoreError;
use scholar_core::types::{DraftRequest, DraftResponse};
use scholar_core::{prompts, validation};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Message returned to the caller when the generator fails.
pub const DRAFT_FAILED: &str = "Failed to draft section. Check API Key and server logs.";

/// POST /api/draft-section
///
/// Requires `fullOutline`, `sectionTitle` and `mainTopic`. The whole outline
/// goes to the model as context for the one section being drafted.
pub async fn draft_section(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DraftRequest>,
) -> AppResult<Json<DraftResponse>> {
    let input = validation::validate_draft(request)?;

    let draft = state
        .generator
        .generate(&prompts::draft_request(&input))
        .await
        .map_err(|e| CoreError::upstream(DRAFT_FAILED, e))?;

    tracing::info!(
        section = %input.section_title,
        draft_len = draft.len(),
        "Section drafted"
    );

    Ok(Json(DraftResponse { draft }))
}
