/// Errors from the text-generation layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// No API key was configured.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout, bad JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error.message` from the response, or the raw body.
        message: String,
    },

    /// The API answered 2xx but produced no text. Carries the block or
    /// finish reason when one was reported.
    #[error("Gemini returned no text (reason: {0:?})")]
    EmptyResponse(Option<String>),
}
