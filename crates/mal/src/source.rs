use async_trait::async_trait;

use crate::models::{AnimeRecord, ImageSet};

/// Read-only query interface of a MyAnimeList-compatible metadata source.
///
/// Implementations apply their own transport concerns (timeouts, server-side
/// rate limits). Absence is not an error: an unknown id yields `Ok(None)`
/// and a search without hits yields an empty vector.
#[async_trait]
pub trait AnimeSource: Send + Sync {
    /// GET /anime/{id}
    async fn fetch_by_id(&self, id: i64) -> crate::Result<Option<AnimeRecord>>;

    /// GET /anime?q={text}
    ///
    /// Candidates are returned in the order the source ranks them.
    async fn search_by_name(&self, text: &str) -> crate::Result<Vec<AnimeRecord>>;

    /// GET /anime/{id}/pictures
    async fn fetch_pictures(&self, id: i64) -> crate::Result<Vec<ImageSet>>;
}
