/// Boxed error used to carry the cause of an upstream failure without
/// tying this crate to a particular generator implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The text-generation call failed. `message` is safe to show to
    /// callers; `source` is for logs only.
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl CoreError {
    /// Wrap a generator failure with the caller-facing message.
    pub fn upstream(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        CoreError::Upstream {
            message: message.into(),
            source: source.into(),
        }
    }
}
