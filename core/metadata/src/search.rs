//! Candidates for interactive disambiguation

use chrono::Datelike;
use mal::AnimeRecord;

use crate::SearchResultEntry;

/// Map a record to a search result. No scoring is applied.
pub fn to_search_result(anime: &AnimeRecord, provider_name: &str) -> SearchResultEntry {
    SearchResultEntry {
        external_id: anime.id.to_string(),
        name: anime.title.clone(),
        image_url: anime.primary_image_url().map(String::from),
        overview: anime.synopsis.clone(),
        production_year: anime.aired.from.map(|date| date.year()),
        premiere_date: anime.aired.from,
        search_provider_name: provider_name.to_string(),
    }
}

/// Map records to search results, keeping the source's order.
pub fn to_search_results(animes: &[AnimeRecord], provider_name: &str) -> Vec<SearchResultEntry> {
    animes
        .iter()
        .map(|anime| to_search_result(anime, provider_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fullmetal_brotherhood, record};

    #[test]
    fn test_to_search_result() {
        let entry = to_search_result(&fullmetal_brotherhood(), "MyAnimeList");
        assert_eq!(entry.external_id, "5114");
        assert_eq!(entry.name, "Fullmetal Alchemist: Brotherhood");
        assert_eq!(
            entry.image_url.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/1208/94745l.jpg")
        );
        assert_eq!(entry.production_year, Some(2009));
        assert!(entry.premiere_date.is_some());
        assert!(entry.overview.is_some());
        assert_eq!(entry.search_provider_name, "MyAnimeList");
    }

    #[test]
    fn test_to_search_results_preserves_order() {
        let animes = vec![record(3, "C"), record(1, "A"), record(2, "B")];
        let ids: Vec<String> = to_search_results(&animes, "MyAnimeList")
            .into_iter()
            .map(|entry| entry.external_id)
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sparse_record_has_empty_fields() {
        let entry = to_search_result(&record(9, "Bare"), "MyAnimeList");
        assert_eq!(entry.image_url, None);
        assert_eq!(entry.overview, None);
        assert_eq!(entry.production_year, None);
    }
}
