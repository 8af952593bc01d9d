// src/integrations/catalog/client.rs
//
// Character Catalog API Integration
//
// ARCHITECTURE:
// - REST client for the public character catalog
// - One request per call, no retry
// - Maps the pagination envelope → FetchResult (NO state mutation)
//
// CRITICAL RULES:
// - Empty search/filter fields are OMITTED from the query string,
//   never sent as empty values
// - Any non-success status or malformed body is a NetworkFailure

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::domain::{validate_character, Character, FetchResult, QueryState};
use crate::error::FetchError;

/// Anything that can produce a catalog page for a query
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, query: &QueryState) -> Result<FetchResult, FetchError>;
}

/// Paginated response envelope
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    info: PageInfo,
    results: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    pages: u32,
    #[serde(default)]
    count: Option<u32>,
}

/// Catalog API Client
pub struct CatalogClient {
    base_url: String,
    http_client: Client,
}

impl CatalogClient {
    /// Create a client for the catalog rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn character_endpoint(&self) -> String {
        format!("{}/character/", self.base_url)
    }

    /// Query parameters for a page request
    ///
    /// `page` is always present; `name`, `status` and `species` only when set.
    pub fn build_query(query: &QueryState) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", query.page().to_string())];

        if !query.search_term().is_empty() {
            params.push(("name", query.search_term().to_string()));
        }
        if let Some(status) = query.status_filter() {
            params.push(("status", status.as_query_value().to_string()));
        }
        if let Some(species) = query.species_filter() {
            params.push(("species", species.to_string()));
        }

        params
    }

    /// Parse a response body into a page
    pub fn parse_page(body: &str) -> Result<FetchResult, FetchError> {
        let envelope: PageEnvelope = serde_json::from_str(body)
            .map_err(|e| FetchError::network(format!("Malformed catalog response: {}", e)))?;

        for character in &envelope.results {
            validate_character(character)
                .map_err(|e| FetchError::network(format!("Malformed catalog response: {}", e)))?;
        }

        Ok(FetchResult {
            characters: envelope.results,
            total_pages: envelope.info.pages,
            total_count: envelope.info.count,
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, query: &QueryState) -> Result<FetchResult, FetchError> {
        let params = Self::build_query(query);
        log::debug!("GET {} {:?}", self.character_endpoint(), params);

        let response = self
            .http_client
            .get(self.character_endpoint())
            .header(header::ACCEPT, "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| FetchError::network(format!("Catalog request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(format!(
                "Catalog returned status: {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read catalog response: {}", e)))?;

        Self::parse_page(&body)
    }
}
