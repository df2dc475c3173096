//! Error types for metadata provider operations

/// Errors that can occur when resolving metadata
///
/// Expected absence (unknown id, empty search) is not an error and is
/// reported through `Option`/empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("MyAnimeList error: {0}")]
    Source(#[from] mal::SourceError),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid MyAnimeList id: {0:?}")]
    InvalidExternalId(String),
}

/// Errors that can occur when loading provider configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
