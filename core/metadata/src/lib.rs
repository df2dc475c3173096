//! MyAnimeList identity resolution for media libraries
//!
//! Turns what a library knows about an item (a stored id, a title that may
//! carry a `[mal-<id>]` tag) into exactly one anime record, and maps that
//! record into the metadata shape the library stores.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 MalProvider                  │
//! │ resolve_series_metadata / resolve_movie_...  │
//! │ search / list_images                         │
//! └──────────────────────────────────────────────┘
//!        │                         │
//!        ▼                         ▼
//! ┌──────────────┐        ┌─────────────────────┐
//! │   Resolver   │        │ mapper / search /   │
//! │ id → tag →   │        │ images (pure)       │
//! │ title search │        └─────────────────────┘
//! └──────────────┘
//!    │        │
//!    ▼        ▼
//! RateLimiter  mal::AnimeSource
//! ```
//!
//! # Example
//!
//! ```ignore
//! use metadata::{LookupRequest, MalProvider, ProviderConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! let provider = MalProvider::new(Arc::new(source), ProviderConfig::default());
//! let lookup = LookupRequest::new("Cowboy Bebop [mal-1]");
//! let metadata = provider
//!     .resolve_series_metadata(&lookup, &CancellationToken::new())
//!     .await?;
//! ```

mod cancel;
mod config;
mod error;
mod extract;
mod host;
mod images;
mod mapper;
mod models;
mod provider;
mod resolver;
mod search;
mod throttle;

#[cfg(test)]
mod testing;

pub use config::ProviderConfig;
pub use error::{ConfigError, ProviderError};
pub use extract::{extract_id, parse_anime_id};
pub use host::HasProviderIds;
pub use images::to_remote_images;
pub use mapper::{parse_community_rating, parse_genres, parse_status, parse_studios, to_metadata};
pub use models::{
    ImageKind, LookupRequest, MediaKind, ProviderIds, RemoteImage, ResolvedMetadata,
    SearchResultEntry, SeriesStatus,
};
pub use provider::MalProvider;
pub use resolver::Resolver;
pub use search::{to_search_result, to_search_results};
pub use throttle::{FixedDelay, RateLimiter, SharedSpacing};

/// Provider name, also the key external ids are stored under
pub const PROVIDER_NAME: &str = "MyAnimeList";

/// Plugin identifier registered with the library host
pub const PLUGIN_GUID: &str = "41b9d545-325d-4f3e-b712-085b3b7f1b0c";

/// External id link template
pub const URL_TEMPLATE: &str = "https://myanimelist.net/anime/{id}";

/// Default position among the host's metadata providers
pub const DEFAULT_ORDER: i32 = -3;

pub type Result<T> = std::result::Result<T, ProviderError>;
