#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to decode response at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rate limited by the metadata source")]
    RateLimited,
}
