/// Errors from the writing-endpoint client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, bad JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        /// The server's `error` field, or a fallback message.
        message: String,
    },

    /// A section was requested before any outline was generated.
    #[error("No outline has been generated yet")]
    NoOutline,
}
