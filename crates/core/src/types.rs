//! Wire types for the two generation endpoints.
//!
//! Request fields are all `Option<String>`. Any JSON value is accepted:
//! falsy values (`null`, `false`, `0`) read as absent, other scalars are
//! rendered as text, and arrays or objects as their JSON text. The presence
//! checks in [`crate::validation`] then decide what is missing.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/generate-outline`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    #[serde(default, deserialize_with = "truthy_text")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub keywords: Option<String>,
}

/// Successful response of `POST /api/generate-outline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineResponse {
    /// Raw model output.
    pub outline: String,
    /// The submitted topic, echoed back verbatim.
    pub main_topic: String,
}

/// Body of `POST /api/draft-section`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default, deserialize_with = "truthy_text")]
    pub full_outline: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub main_topic: Option<String>,
}

/// Successful response of `POST /api/draft-section`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    /// Raw model output.
    pub draft: String,
}

/// Error body returned by both endpoints on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A single call to the text-generation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Fixed instruction describing the role and output format.
    pub system_instruction: String,
    /// Per-request prompt with user input interpolated.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Read any JSON value as optional text; falsy non-strings become `None`.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(other) => Some(other.to_string()),
    })
}
