//! Artwork catalog API client implementation.
//!
//! This module provides the client for fetching paginated artwork listings
//! from the Art Institute of Chicago public API. The API is unauthenticated;
//! the client handles request construction, status checking, and response
//! deserialization.

use std::time::Duration;

use reqwest::{header, Client, Response};
use tracing::{debug, instrument};

use super::error::{ApiError, Result};
use super::types::ArtworksPage;
use crate::config::Settings;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The artwork catalog API client.
///
/// Provides async methods for fetching one page of artwork records at a
/// time. Cloning is cheap; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct ArticClient {
    /// The HTTP client.
    client: Client,
    /// The base URL of the catalog API, without a trailing slash.
    base_url: String,
}

impl ArticClient {
    /// Create a new catalog client from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// has no scheme.
    pub fn new(settings: &Settings) -> Result<Self> {
        if !settings.base_url.starts_with("http://") && !settings.base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(settings.base_url.clone()));
        }

        let client = Self::build_http_client()?;
        let base_url = normalize_base_url(&settings.base_url);

        Ok(Self { client, base_url })
    }

    /// Build the HTTP client with appropriate settings.
    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Network)
    }

    /// Build the listing URL for a zero-based page index.
    ///
    /// The catalog API numbers pages from 1 while the application state is
    /// zero-based; the `+ 1` here is the permanent translation contract at
    /// this boundary.
    pub fn artworks_url(&self, page_index: usize) -> String {
        format!("{}/artworks?page={}", self.base_url, page_index + 1)
    }

    /// Fetch one page of artwork records.
    ///
    /// # Arguments
    ///
    /// * `page_index` - The zero-based page to fetch
    ///
    /// # Returns
    ///
    /// The page's records together with the API's pagination metadata.
    #[instrument(skip(self), fields(page = page_index))]
    pub async fn fetch_page(&self, page_index: usize) -> Result<ArtworksPage> {
        let url = self.artworks_url(page_index);
        debug!(url = %url, "Fetching artworks page");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let page: ArtworksPage = self.handle_response(response).await?;
        debug!(
            records = page.data.len(),
            total = page.pagination.total,
            "Fetched artworks page"
        );
        Ok(page)
    }

    /// Handle the HTTP response, checking for errors and parsing JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", error_body);

            Err(Self::error_from_response(status, &url, &error_body))
        }
    }

    /// Create an appropriate error from an HTTP response.
    fn error_from_response(status: reqwest::StatusCode, url: &str, body: &str) -> ApiError {
        // The catalog returns {"status": ..., "error": ..., "detail": ...}
        // for failures; fall back to the URL when there is no usable body.
        let context = if body.is_empty() {
            url.to_string()
        } else {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
                if let Some(detail) = json.get("detail").and_then(|d| d.as_str()) {
                    return ApiError::from_status(status, detail);
                }
                if let Some(error) = json.get("error").and_then(|e| e.as_str()) {
                    return ApiError::from_status(status, error);
                }
            }
            url.to_string()
        };

        ApiError::from_status(status, &context)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
