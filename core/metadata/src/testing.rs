//! In-memory metadata source for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mal::{AnimeRecord, AnimeSource, ImageSet, ImageUrls, NamedResource, SourceError};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::{ProviderError, RateLimiter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchById(i64),
    Search(String),
    Pictures(i64),
}

#[derive(Default)]
pub struct FakeSource {
    records: HashMap<i64, AnimeRecord>,
    searches: HashMap<String, Vec<AnimeRecord>>,
    pictures: HashMap<i64, Vec<ImageSet>>,
    fail_with_status: Option<u16>,
    hang: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: AnimeRecord) -> Self {
        self.records.insert(record.id, record);
        self
    }

    pub fn with_search(mut self, text: &str, results: Vec<AnimeRecord>) -> Self {
        self.searches.insert(text.to_string(), results);
        self
    }

    pub fn with_pictures(mut self, id: i64, pictures: Vec<ImageSet>) -> Self {
        self.pictures.insert(id, pictures);
        self
    }

    /// Every query fails with an API error of this status
    pub fn failing(mut self, status_code: u16) -> Self {
        self.fail_with_status = Some(status_code);
        self
    }

    /// Every query stays pending forever
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn enter(&self, call: Call) -> mal::Result<()> {
        self.calls.lock().push(call);
        if self.hang {
            std::future::pending::<()>().await;
        }
        match self.fail_with_status {
            Some(status_code) => Err(SourceError::Api {
                status_code,
                message: "unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AnimeSource for FakeSource {
    async fn fetch_by_id(&self, id: i64) -> mal::Result<Option<AnimeRecord>> {
        self.enter(Call::FetchById(id)).await?;
        Ok(self.records.get(&id).cloned())
    }

    async fn search_by_name(&self, text: &str) -> mal::Result<Vec<AnimeRecord>> {
        self.enter(Call::Search(text.to_string())).await?;
        Ok(self.searches.get(text).cloned().unwrap_or_default())
    }

    async fn fetch_pictures(&self, id: i64) -> mal::Result<Vec<ImageSet>> {
        self.enter(Call::Pictures(id)).await?;
        Ok(self.pictures.get(&id).cloned().unwrap_or_default())
    }
}

/// Limiter that only counts calls
#[derive(Default)]
pub struct CountingLimiter {
    count: AtomicUsize,
}

impl CountingLimiter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateLimiter for CountingLimiter {
    async fn throttle(&self, cancel: &CancellationToken) -> Result<(), ProviderError> {
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn record(id: i64, title: &str) -> AnimeRecord {
    AnimeRecord {
        id,
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn fullmetal_brotherhood() -> AnimeRecord {
    AnimeRecord {
        id: 5114,
        title: "Fullmetal Alchemist: Brotherhood".to_string(),
        title_english: Some("Fullmetal Alchemist: Brotherhood".to_string()),
        title_japanese: Some("鋼の錬金術師 FULLMETAL ALCHEMIST".to_string()),
        synopsis: Some("After a horrific alchemy experiment goes wrong...".to_string()),
        score: Some(9.1),
        aired: mal::Aired {
            from: Some(Utc.with_ymd_and_hms(2009, 4, 5, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2010, 7, 4, 0, 0, 0).unwrap()),
        },
        status: Some("Finished Airing".to_string()),
        genres: vec![
            NamedResource::new(1, "Action"),
            NamedResource::new(2, "Adventure"),
        ],
        demographics: vec![NamedResource::new(27, "Shounen")],
        studios: vec![NamedResource::new(4, "Bones")],
        official_rating: Some("R - 17+ (violence & profanity)".to_string()),
        images: picture("https://cdn.myanimelist.net/images/anime/1208/94745"),
        additional_image_urls: vec![],
    }
}

/// Picture set with `{base}.jpg`, `{base}t.jpg` and `{base}l.jpg`
pub fn picture(base: &str) -> ImageSet {
    ImageSet {
        jpg: ImageUrls {
            image_url: Some(format!("{}.jpg", base)),
            small_image_url: Some(format!("{}t.jpg", base)),
            large_image_url: Some(format!("{}l.jpg", base)),
        },
        webp: None,
    }
}
