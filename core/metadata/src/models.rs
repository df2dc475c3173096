//! Data models exchanged with the library host

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity hints for one library item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    /// External id already stored on the item, if any
    pub known_id: Option<String>,
    /// Display title of the item, possibly carrying a `[mal-<id>]` suffix
    pub title: String,
}

impl LookupRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            known_id: None,
            title: title.into(),
        }
    }

    pub fn with_known_id(mut self, id: impl Into<String>) -> Self {
        self.known_id = Some(id.into());
        self
    }
}

/// Kind of library item being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

/// Airing state of a series as understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesStatus {
    Continuing,
    Ended,
}

/// Provider ids keyed by provider name
pub type ProviderIds = HashMap<String, String>;

/// Metadata for one library item, derived from a single anime record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMetadata {
    /// False when no record could be resolved; every other field is then empty
    pub has_data: bool,
    pub kind: Option<MediaKind>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    /// Score rounded to one decimal place
    pub community_rating: Option<f32>,
    pub premiere_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub production_year: Option<i32>,
    /// Genre names followed by demographic names
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub official_rating: Option<String>,
    /// Series only
    pub series_status: Option<SeriesStatus>,
    /// Series only
    pub display_order: Option<String>,
    /// MyAnimeList id in decimal form
    pub external_id: Option<String>,
    pub provider_ids: ProviderIds,
}

impl ResolvedMetadata {
    /// Result for an item nothing could be resolved for
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Candidate shown to the user during interactive disambiguation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub external_id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub overview: Option<String>,
    pub production_year: Option<i32>,
    pub premiere_date: Option<DateTime<Utc>>,
    pub search_provider_name: String,
}

/// Image slot an artwork is offered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageKind {
    #[default]
    Primary,
}

/// Artwork offered to the host for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteImage {
    pub provider_name: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub kind: ImageKind,
}
