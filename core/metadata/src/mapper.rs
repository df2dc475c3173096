//! Conversion of anime records into library metadata

use chrono::Datelike;
use mal::{AnimeRecord, NamedResource};

use crate::{MediaKind, ProviderConfig, ResolvedMetadata, SeriesStatus};

/// Build the metadata for a movie or series from its anime record.
///
/// Series additionally carry an airing status and a display order.
pub fn to_metadata(
    anime: &AnimeRecord,
    kind: MediaKind,
    config: &ProviderConfig,
) -> ResolvedMetadata {
    let external_id = anime.id.to_string();
    let (series_status, display_order) = match kind {
        MediaKind::Series => (
            anime.status.as_deref().and_then(parse_status),
            Some(config.series_display_order.clone()),
        ),
        MediaKind::Movie => (None, None),
    };

    ResolvedMetadata {
        has_data: true,
        kind: Some(kind),
        title: Some(anime.title.clone()),
        original_title: Some(anime.title.clone()),
        overview: anime.synopsis.clone(),
        community_rating: parse_community_rating(anime.score),
        premiere_date: anime.aired.from,
        end_date: anime.aired.to,
        production_year: anime.aired.from.map(|date| date.year()),
        genres: parse_genres(&anime.genres, &anime.demographics),
        studios: parse_studios(&anime.studios),
        official_rating: anime.official_rating.clone(),
        series_status,
        display_order,
        provider_ids: [(config.provider_name.clone(), external_id.clone())]
            .into_iter()
            .collect(),
        external_id: Some(external_id),
    }
}

/// Map the airing status reported by MyAnimeList to a series status.
///
/// Matching ignores case. Statuses without an equivalent (e.g.
/// "Not yet aired") map to `None`.
pub fn parse_status(status: &str) -> Option<SeriesStatus> {
    if status.eq_ignore_ascii_case("Currently Airing") {
        Some(SeriesStatus::Continuing)
    } else if status.eq_ignore_ascii_case("Finished Airing")
        || status.eq_ignore_ascii_case("Ended")
    {
        Some(SeriesStatus::Ended)
    } else {
        None
    }
}

/// Round the score to one decimal place.
pub fn parse_community_rating(score: Option<f64>) -> Option<f32> {
    score.map(|score| ((score * 10.0).round() / 10.0) as f32)
}

/// Genre names followed by demographic names, in source order.
pub fn parse_genres(genres: &[NamedResource], demographics: &[NamedResource]) -> Vec<String> {
    genres
        .iter()
        .chain(demographics)
        .map(|genre| genre.name.clone())
        .collect()
}

pub fn parse_studios(studios: &[NamedResource]) -> Vec<String> {
    studios.iter().map(|studio| studio.name.clone()).collect()
}
