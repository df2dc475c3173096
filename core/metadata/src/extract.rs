//! MyAnimeList id hints embedded in titles

use std::sync::LazyLock;

use regex::Regex;

// Title suffix naming the id explicitly: "Cowboy Bebop [mal-1]"
static MAL_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[mal-([0-9]+)\]$").unwrap());

/// Extract the MyAnimeList id from a trailing `[mal-<digits>]` tag.
///
/// Returns the digit run verbatim, or `None` when the title does not end
/// with the tag.
pub fn extract_id(title: &str) -> Option<String> {
    MAL_ID_PATTERN
        .captures(title)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse an external id into a MyAnimeList id. Only positive integers are ids.
pub fn parse_anime_id(external_id: &str) -> Option<i64> {
    external_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("Cowboy Bebop [mal-1]"), Some("1".to_string()));
        assert_eq!(
            extract_id("Fullmetal Alchemist: Brotherhood [mal-5114]"),
            Some("5114".to_string())
        );
        // Prefix is optional
        assert_eq!(extract_id("[mal-42]"), Some("42".to_string()));
        // Only the trailing tag counts
        assert_eq!(
            extract_id("Show [mal-1] Remake [mal-2]"),
            Some("2".to_string())
        );
        // Leading zeros are kept as given
        assert_eq!(extract_id("Show [mal-007]"), Some("007".to_string()));
    }

    #[test]
    fn test_extract_id_near_misses() {
        assert_eq!(extract_id("Cowboy Bebop"), None);
        assert_eq!(extract_id(""), None);
        // Wrong brackets
        assert_eq!(extract_id("Cowboy Bebop (mal-1)"), None);
        assert_eq!(extract_id("Cowboy Bebop {mal-1}"), None);
        // Tag not at the end
        assert_eq!(extract_id("Cowboy Bebop [mal-1] (1998)"), None);
        assert_eq!(extract_id("Cowboy Bebop [mal-1] "), None);
        // Non-digit content
        assert_eq!(extract_id("Cowboy Bebop [mal-abc]"), None);
        assert_eq!(extract_id("Cowboy Bebop [mal-12a]"), None);
        assert_eq!(extract_id("Cowboy Bebop [mal-]"), None);
        // Case and spelling are fixed
        assert_eq!(extract_id("Cowboy Bebop [MAL-1]"), None);
        assert_eq!(extract_id("Cowboy Bebop [anidb-1]"), None);
    }

    #[test]
    fn test_parse_anime_id() {
        assert_eq!(parse_anime_id("5114"), Some(5114));
        assert_eq!(parse_anime_id(" 21 "), Some(21));
        assert_eq!(parse_anime_id("007"), Some(7));
        assert_eq!(parse_anime_id("0"), None);
        assert_eq!(parse_anime_id("-3"), None);
        assert_eq!(parse_anime_id("abc"), None);
        assert_eq!(parse_anime_id(""), None);
        assert_eq!(parse_anime_id("99999999999999999999"), None);
    }
}
