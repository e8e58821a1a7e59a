//! Artwork catalog API response types.
//!
//! These types model the responses of the Art Institute of Chicago public
//! API for paginated artwork listings.

use serde::{Deserialize, Serialize};

/// A single artwork record.
///
/// One element of the `data` array in a page response. The API returns null
/// for most descriptive fields on sparsely catalogued works, so everything
/// except `id` is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Unique identifier, stable across repeated fetches of the same page.
    /// Used as the selection dedup key.
    pub id: u64,
    /// The artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Where the work originates from.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist display string; may embed nationality and dates.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the work. Fetched but not displayed.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest creation year. Negative for BCE.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Latest creation year. Negative for BCE.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Get the title, or "Untitled" if the catalog has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the place of origin, or an empty string.
    pub fn place_of_origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("")
    }

    /// Get the artist display string, or an empty string.
    pub fn artist_display(&self) -> &str {
        self.artist_display.as_deref().unwrap_or("")
    }

    /// Format the start year for display.
    pub fn date_start_display(&self) -> String {
        self.date_start.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Format the end year for display.
    pub fn date_end_display(&self) -> String {
        self.date_end.map(|y| y.to_string()).unwrap_or_default()
    }
}

/// Pagination metadata attached to a page response.
///
/// Only `total` is required by the application; the remaining fields are
/// informational and default to zero when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Total record count across all pages. Authoritative for computing
    /// the number of pages the paginator offers.
    pub total: u64,
    /// Records per page as reported by the API.
    #[serde(default)]
    pub limit: u32,
    /// The 1-based page this response covers.
    #[serde(default)]
    pub current_page: u32,
}

/// One page of artwork records.
///
/// Returned by `GET /artworks?page=<n>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworksPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// The records on this page.
    #[serde(default)]
    pub data: Vec<Artwork>,
}

impl ArtworksPage {
    /// Number of pages needed to cover `total` records at `page_size`
    /// records per page.
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.pagination.total.div_ceil(page_size as u64)
    }

    /// Check whether pages beyond the given zero-based index exist.
    pub fn has_more(&self, page_index: usize, page_size: u32) -> bool {
        (page_index as u64 + 1) < self.total_pages(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page_json() -> &'static str {
        r#"{
            "pagination": { "total": 126335, "limit": 10, "current_page": 1 },
            "data": [
                {
                    "id": 4,
                    "title": "Priest and Boy",
                    "place_of_origin": "Chicago",
                    "artist_display": "Lawrence Carmichael Earle\nAmerican, 1845-1921",
                    "inscriptions": null,
                    "date_start": 1880,
                    "date_end": 1881
                },
                {
                    "id": 6,
                    "title": null,
                    "place_of_origin": null,
                    "artist_display": null,
                    "date_start": null,
                    "date_end": null
                }
            ]
        }"#
    }

    #[test]
    fn test_deserialize_page() {
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        assert_eq!(page.pagination.total, 126335);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 4);
        assert_eq!(page.data[0].title(), "Priest and Boy");
    }

    #[test]
    fn test_deserialize_null_fields() {
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        let sparse = &page.data[1];
        assert_eq!(sparse.id, 6);
        assert_eq!(sparse.title(), "Untitled");
        assert_eq!(sparse.place_of_origin(), "");
        assert_eq!(sparse.artist_display(), "");
        assert_eq!(sparse.date_start_display(), "");
    }

    #[test]
    fn test_deserialize_missing_inscriptions() {
        // The second record omits `inscriptions` entirely.
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        assert_eq!(page.data[1].inscriptions, None);
    }

    #[test]
    fn test_bce_dates() {
        let artwork: Artwork = serde_json::from_str(
            r#"{ "id": 9, "title": "Amphora", "date_start": -500, "date_end": -480 }"#,
        )
        .unwrap();
        assert_eq!(artwork.date_start_display(), "-500");
        assert_eq!(artwork.date_end_display(), "-480");
    }

    #[test]
    fn test_total_pages() {
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        // 126335 records at 10 per page round up to 12634 pages.
        assert_eq!(page.total_pages(10), 12634);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn test_has_more() {
        let page: ArtworksPage = serde_json::from_str(sample_page_json()).unwrap();
        assert!(page.has_more(0, 10));
        assert!(page.has_more(12632, 10));
        assert!(!page.has_more(12633, 10));
    }

    #[test]
    fn test_empty_data_default() {
        let page: ArtworksPage =
            serde_json::from_str(r#"{ "pagination": { "total": 0 } }"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages(10), 0);
        assert!(!page.has_more(0, 10));
    }
}
