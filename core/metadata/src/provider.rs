//! MyAnimeList metadata provider exposed to the library host

use std::sync::Arc;

use mal::AnimeSource;
use tokio_util::sync::CancellationToken;

use crate::extract::parse_anime_id;
use crate::images::to_remote_images;
use crate::mapper::to_metadata;
use crate::search::{to_search_result, to_search_results};
use crate::{
    FixedDelay, HasProviderIds, ImageKind, LookupRequest, MediaKind, ProviderConfig,
    ProviderError, RateLimiter, RemoteImage, ResolvedMetadata, Resolver, SearchResultEntry,
};

/// Metadata, search and image provider backed by a MyAnimeList source
pub struct MalProvider {
    resolver: Resolver,
    config: ProviderConfig,
}

impl MalProvider {
    /// Create a provider that waits `config.throttle_interval()` before each
    /// query.
    pub fn new(source: Arc<dyn AnimeSource>, config: ProviderConfig) -> Self {
        let limiter = Arc::new(FixedDelay::new(config.throttle_interval()));
        Self::with_rate_limiter(source, limiter, config)
    }

    /// Create a provider with an explicit rate limiter, e.g. a
    /// [`SharedSpacing`](crate::SharedSpacing) shared with other providers.
    pub fn with_rate_limiter(
        source: Arc<dyn AnimeSource>,
        limiter: Arc<dyn RateLimiter>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            resolver: Resolver::new(source, limiter),
            config,
        }
    }

    /// Provider name, also the key external ids are stored under
    pub fn name(&self) -> &str {
        &self.config.provider_name
    }

    pub fn order(&self) -> i32 {
        self.config.order
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn supports(&self, kind: MediaKind) -> bool {
        matches!(kind, MediaKind::Movie | MediaKind::Series)
    }

    pub fn supported_image_kinds(&self) -> &'static [ImageKind] {
        &[ImageKind::Primary]
    }

    /// Link to the MyAnimeList page of an external id
    pub fn external_url(&self, external_id: &str) -> String {
        self.config.external_url(external_id)
    }

    /// Lookup hints for a host item
    pub fn lookup_for(&self, item: &impl HasProviderIds) -> LookupRequest {
        item.lookup_request(self.name())
    }

    /// Store the resolved external id on the host item
    pub fn apply_to_item(&self, item: &mut impl HasProviderIds, metadata: &ResolvedMetadata) -> bool {
        item.remember_external_id(self.name(), metadata)
    }

    pub async fn resolve_series_metadata(
        &self,
        lookup: &LookupRequest,
        cancel: &CancellationToken,
    ) -> Result<ResolvedMetadata, ProviderError> {
        self.resolve_metadata(lookup, MediaKind::Series, cancel).await
    }

    pub async fn resolve_movie_metadata(
        &self,
        lookup: &LookupRequest,
        cancel: &CancellationToken,
    ) -> Result<ResolvedMetadata, ProviderError> {
        self.resolve_metadata(lookup, MediaKind::Movie, cancel).await
    }

    async fn resolve_metadata(
        &self,
        lookup: &LookupRequest,
        kind: MediaKind,
        cancel: &CancellationToken,
    ) -> Result<ResolvedMetadata, ProviderError> {
        let anime = self
            .resolver
            .resolve(lookup.known_id.as_deref(), &lookup.title, cancel)
            .await?;

        Ok(match anime {
            Some(anime) => to_metadata(&anime, kind, &self.config),
            None => ResolvedMetadata::empty(),
        })
    }

    /// Candidates for interactive disambiguation.
    ///
    /// A usable known id yields at most the one record it names; otherwise
    /// every title search hit is returned in source order.
    pub async fn search(
        &self,
        lookup: &LookupRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResultEntry>, ProviderError> {
        if let Some(anime_id) = lookup.known_id.as_deref().and_then(parse_anime_id) {
            let anime = self.resolver.fetch_by_id(anime_id, cancel).await?;
            return Ok(anime
                .map(|anime| vec![to_search_result(&anime, self.name())])
                .unwrap_or_default());
        }

        if lookup.title.trim().is_empty() {
            return Ok(vec![]);
        }

        let animes = self.resolver.search_by_name(&lookup.title, cancel).await?;
        Ok(to_search_results(&animes, self.name()))
    }

    /// Picture gallery of an anime.
    pub async fn list_images(
        &self,
        external_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImage>, ProviderError> {
        let anime_id = parse_anime_id(external_id)
            .ok_or_else(|| ProviderError::InvalidExternalId(external_id.to_string()))?;

        let pictures = self.resolver.fetch_pictures(anime_id, cancel).await?;
        Ok(to_remote_images(&pictures, self.name()))
    }
}
