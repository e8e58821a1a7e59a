//! Application settings configuration.

use serde::{Deserialize, Serialize};

/// Default catalog API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Default web URL prefix for viewing an artwork in a browser.
pub const DEFAULT_WEB_URL: &str = "https://www.artic.edu/artworks";

/// Records per page. The API's default page size; the paginator computes
/// page boundaries from this, it is never sent with requests.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The catalog API base URL.
    pub base_url: String,
    /// The web URL prefix used by open-in-browser.
    pub web_url: String,
    /// Records per page used for paginator arithmetic.
    pub page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// The web page for a given artwork id.
    pub fn artwork_web_url(&self, id: u64) -> String {
        format!("{}/{}", self.web_url.trim_end_matches('/'), id)
    }
}
