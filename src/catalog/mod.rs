//! HTTP client for the Rebrickable catalog API.
//!
//! [`CatalogClient`] holds the base URL and the server-side API key for one
//! upstream catalog. Lookups resolve a part or set number to catalog
//! entities; set inventories are paginated upstream and concatenated here
//! before returning. There is no caching, retrying, or rate limiting: a
//! single non-success response aborts the whole logical fetch.

use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::{LegoSet, Page, Part, SetPart};

/// Client for a Rebrickable-compatible catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    /// Create a new client targeting `base_url` (no trailing slash).
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Look up set metadata by set number.
    ///
    /// Searches by number and returns the first hit; zero results is
    /// not-found.
    pub async fn get_set(&self, set_num: &str) -> Result<LegoSet, AppError> {
        let page: Page<LegoSet> = self.fetch("/sets/", &[("search", set_num)]).await?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Set {} not found", set_num)))
    }

    /// Fetch the full parts inventory of a set, concatenating every page.
    pub async fn get_set_parts(&self, set_num: &str) -> Result<Vec<SetPart>, AppError> {
        // Resolve to the canonical set_num first
        let set = self.get_set(set_num).await?;

        let mut all_parts = Vec::new();
        let mut page_num = 1;

        loop {
            let page_str = page_num.to_string();
            let page: Page<SetPart> = self
                .fetch(
                    &format!("/sets/{}/parts/", set.set_num),
                    &[("page", page_str.as_str())],
                )
                .await?;

            all_parts.extend(page.results);
            if page.next.is_none() {
                break;
            }
            page_num += 1;
        }

        Ok(all_parts)
    }

    /// Look up a part by the LEGO ID printed on the brick.
    pub async fn get_part(&self, part_num: &str) -> Result<Part, AppError> {
        let page: Page<Part> = self.fetch("/parts/", &[("lego_id", part_num)]).await?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Part {} not found", part_num)))
    }

    /// Free-text part search.
    pub async fn search_parts(&self, query: &str) -> Result<Vec<Part>, AppError> {
        let page: Page<Part> = self.fetch("/parts/", &[("search", query)]).await?;
        Ok(page.results)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("key {}", key));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Catalog API error: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
