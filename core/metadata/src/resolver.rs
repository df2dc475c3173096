//! Identity resolution: lookup hints in, at most one anime record out

use std::sync::Arc;

use mal::{AnimeRecord, AnimeSource, ImageSet};
use tokio_util::sync::CancellationToken;

use crate::cancel::or_cancelled;
use crate::extract::{extract_id, parse_anime_id};
use crate::{ProviderError, RateLimiter};

/// Decides between a direct id lookup and a title search, and fetches the
/// authoritative record.
///
/// Every query goes through the injected [`RateLimiter`] first.
pub struct Resolver {
    source: Arc<dyn AnimeSource>,
    limiter: Arc<dyn RateLimiter>,
}

impl Resolver {
    pub fn new(source: Arc<dyn AnimeSource>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self { source, limiter }
    }

    /// Resolve an item to its anime record.
    ///
    /// Id sources are tried in order: the known id, a `[mal-<id>]` title
    /// suffix, then the first hit of a title search. Malformed ids fall
    /// through to the next source. `Ok(None)` means nothing matched.
    pub async fn resolve(
        &self,
        known_id: Option<&str>,
        title: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<AnimeRecord>, ProviderError> {
        let Some(anime_id) = self.identify(known_id, title, cancel).await? else {
            return Ok(None);
        };

        let anime = self.fetch_by_id(anime_id, cancel).await?;
        if anime.is_none() {
            tracing::info!("No anime found for id {}", anime_id);
        }
        Ok(anime)
    }

    async fn identify(
        &self,
        known_id: Option<&str>,
        title: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<i64>, ProviderError> {
        if let Some(known_id) = known_id.filter(|id| !id.trim().is_empty()) {
            match parse_anime_id(known_id) {
                Some(anime_id) => return Ok(Some(anime_id)),
                None => tracing::warn!("Ignoring malformed MyAnimeList id {:?}", known_id),
            }
        }

        if let Some(matched) = extract_id(title) {
            tracing::info!("Matched id from name: {}", matched);
            match parse_anime_id(&matched) {
                Some(anime_id) => return Ok(Some(anime_id)),
                None => tracing::warn!("Ignoring malformed id {:?} in title {:?}", matched, title),
            }
        }

        if title.trim().is_empty() {
            tracing::debug!("No id and no title to search for");
            return Ok(None);
        }

        // First result wins; the source's ordering is not second-guessed.
        let candidates = self.search_by_name(title, cancel).await?;
        match candidates.first() {
            Some(first) => {
                tracing::debug!(
                    "Picked '{}' ({}) out of {} candidates for '{}'",
                    first.title,
                    first.id,
                    candidates.len(),
                    title
                );
                Ok(Some(first.id))
            }
            None => {
                tracing::info!("No search results for '{}'", title);
                Ok(None)
            }
        }
    }

    /// Throttled fetch of a single record
    pub async fn fetch_by_id(
        &self,
        anime_id: i64,
        cancel: &CancellationToken,
    ) -> Result<Option<AnimeRecord>, ProviderError> {
        self.limiter.throttle(cancel).await?;
        tracing::info!("Fetching anime with id: {}", anime_id);
        Ok(or_cancelled(cancel, self.source.fetch_by_id(anime_id)).await??)
    }

    /// Throttled title search, candidates in source order
    pub async fn search_by_name(
        &self,
        title: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<AnimeRecord>, ProviderError> {
        self.limiter.throttle(cancel).await?;
        tracing::info!("Searching for anime by title: {}", title);
        Ok(or_cancelled(cancel, self.source.search_by_name(title)).await??)
    }

    /// Throttled fetch of the picture gallery
    pub async fn fetch_pictures(
        &self,
        anime_id: i64,
        cancel: &CancellationToken,
    ) -> Result<Vec<ImageSet>, ProviderError> {
        self.limiter.throttle(cancel).await?;
        tracing::info!("Fetching pictures for anime id: {}", anime_id);
        Ok(or_cancelled(cancel, self.source.fetch_pictures(anime_id)).await??)
    }
}
