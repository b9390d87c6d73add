//! Presence checks for incoming generation requests.
//!
//! A field is present when its text is non-empty. Whitespace-only text
//! counts as present. Present values are passed on untouched; nothing else
//! about their content is checked.

use crate::error::CoreError;
use crate::types::{DraftRequest, OutlineRequest};

/// Message returned when the outline topic is missing.
pub const MISSING_TOPIC: &str = "Topic is required.";

/// Message returned when any of the three drafting fields is missing.
pub const MISSING_DRAFT_CONTEXT: &str = "Missing required context for drafting.";

/// An outline request that passed presence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineInput {
    pub topic: String,
    /// `None` when keywords were omitted or empty.
    pub keywords: Option<String>,
}

/// A draft request that passed presence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftInput {
    pub full_outline: String,
    pub section_title: String,
    pub main_topic: String,
}

/// Validate an outline request: `topic` must be present.
pub fn validate_outline(request: OutlineRequest) -> Result<OutlineInput, CoreError> {
    let topic = present(request.topic)
        .ok_or_else(|| CoreError::Validation(MISSING_TOPIC.to_string()))?;

    Ok(OutlineInput {
        topic,
        keywords: present(request.keywords),
    })
}

/// Validate a draft request: all three fields must be present.
pub fn validate_draft(request: DraftRequest) -> Result<DraftInput, CoreError> {
    match (
        present(request.full_outline),
        present(request.section_title),
        present(request.main_topic),
    ) {
        (Some(full_outline), Some(section_title), Some(main_topic)) => Ok(DraftInput {
            full_outline,
            section_title,
            main_topic,
        }),
        _ => Err(CoreError::Validation(MISSING_DRAFT_CONTEXT.to_string())),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
