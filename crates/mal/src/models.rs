use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anime entry as returned by GET /anime/{id} and GET /anime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimeRecord {
    /// MyAnimeList id
    #[serde(rename = "mal_id")]
    pub id: i64,
    /// Default (romanized) title
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub synopsis: Option<String>,
    /// Community score, 0.0 - 10.0
    pub score: Option<f64>,
    #[serde(default)]
    pub aired: Aired,
    /// Airing status, e.g. "Currently Airing", "Finished Airing", "Not yet aired"
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<NamedResource>,
    #[serde(default)]
    pub demographics: Vec<NamedResource>,
    #[serde(default)]
    pub studios: Vec<NamedResource>,
    /// Age rating, e.g. "PG-13 - Teens 13 or older"
    #[serde(rename = "rating")]
    pub official_rating: Option<String>,
    #[serde(default)]
    pub images: ImageSet,
    /// Extra artwork attached by the source implementation; not part of the
    /// Jikan anime payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_image_urls: Vec<String>,
}

impl AnimeRecord {
    /// Large JPG cover, falling back to the default size.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images.jpg.large()
    }
}

/// Airing period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Aired {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Genre, demographic or studio reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(rename = "mal_id")]
    pub id: i64,
    pub name: String,
}

impl NamedResource {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// JPG/WebP pair of the same picture. Used both for the cover of an anime
/// and for each entry of GET /anime/{id}/pictures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub jpg: ImageUrls,
    pub webp: Option<ImageUrls>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUrls {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

impl ImageUrls {
    pub fn large(&self) -> Option<&str> {
        self.large_image_url
            .as_deref()
            .or(self.image_url.as_deref())
    }

    pub fn small(&self) -> Option<&str> {
        self.small_image_url.as_deref()
    }
}
