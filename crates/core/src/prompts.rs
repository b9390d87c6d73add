//! Prompt construction for the outline and drafting steps.
//!
//! Each step pairs a fixed system instruction with a short prompt that has
//! the user's input interpolated verbatim. No escaping or rewriting of the
//! input happens here.

use crate::types::GenerationRequest;
use crate::validation::{DraftInput, OutlineInput};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sampling temperature for outline generation. Kept low so the outline
/// stays structured.
pub const OUTLINE_TEMPERATURE: f32 = 0.3;

/// Sampling temperature for section drafting.
pub const DRAFT_TEMPERATURE: f32 = 0.5;

/// Rendered in place of keywords when none were given.
pub const NO_KEYWORDS: &str = "none specified";

/// System instruction for the outline step.
pub const OUTLINE_INSTRUCTION: &str = "\
You are an expert Academic Assistant. Your task is to generate a formal, multi-level thesis outline.
The outline MUST include: I. Introduction, several Body Sections (II, III, etc.) with sub-points (A, B, C, etc.), and a Final Conclusion.
Use the provided topic and keywords to structure your response.
Format the output strictly as plain, readable text (markdown list format is acceptable, but ensure clear numbering/lettering).
Do NOT include any extra introductory or concluding remarks. Just the outline.";

/// System instruction for the drafting step.
pub const DRAFT_INSTRUCTION: &str = "\
You are an Academic Writer. Your goal is to write a single, detailed, and highly focused paragraph that serves as a specific section of a larger academic thesis.
The writing MUST be formal, objective, and adhere strictly to the academic style.
Use the provided full thesis outline and main topic as context to ensure the paragraph fits coherently into the overall structure.
Do NOT include a title for the section or any other surrounding text. Just the drafted paragraph.";

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the generation request for a thesis outline.
pub fn outline_request(input: &OutlineInput) -> GenerationRequest {
    let keywords = input.keywords.as_deref().unwrap_or(NO_KEYWORDS);
    let prompt = format!(
        "Generate a thesis outline for the topic: \"{topic}\"\n\
         Focus areas (keywords): {keywords}",
        topic = input.topic,
    );

    GenerationRequest {
        system_instruction: OUTLINE_INSTRUCTION.to_string(),
        prompt,
        temperature: OUTLINE_TEMPERATURE,
    }
}

/// Build the generation request for one section, with the whole outline
/// embedded as context.
pub fn draft_request(input: &DraftInput) -> GenerationRequest {
    let prompt = format!(
        "Main Thesis Topic: {main_topic}\n\
         Full Thesis Outline (Context):\n\
         ---\n\
         {full_outline}\n\
         ---\n\
         \n\
         Now, draft a single, detailed paragraph ONLY for this specific section title: \"{section_title}\"",
        main_topic = input.main_topic,
        full_outline = input.full_outline,
        section_title = input.section_title,
    );

    GenerationRequest {
        system_instruction: DRAFT_INSTRUCTION.to_string(),
        prompt,
        temperature: DRAFT_TEMPERATURE,
    }
}
