//! HTTP catalog client for the plant storefront API.
//!
//! Two fixed endpoints, both plain GETs with no authentication:
//! - `{base_url}/categories` → `{ "categories": [{ "category_name": ... }] }`
//! - `{base_url}/plants` → `{ "plants": [{ "id": ..., "name": ..., ... }] }`

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{CatalogError, CatalogSource};
use super::types::{decode_plants, CategoriesResponse, Category, Plant, PlantsResponse};

pub const DEFAULT_BASE_URL: &str = "https://openapi.programming-hero.com/api";

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Catalog request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status for {}: {}", endpoint, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse {} response: {}", endpoint, e);
            CatalogError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let response: CategoriesResponse = self.get_json("categories").await?;
        let categories: Vec<Category> = response
            .categories
            .into_iter()
            .map(Category::from)
            .collect();
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn fetch_plants(&self) -> Result<Vec<Plant>, CatalogError> {
        let response: PlantsResponse = self.get_json("plants").await?;
        let (plants, malformed) = decode_plants(response.plants);
        for bad in &malformed {
            warn!("Skipping {}", bad);
        }
        info!(
            "Fetched {} plants ({} malformed records skipped)",
            plants.len(),
            malformed.len()
        );
        Ok(plants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let catalog = HttpCatalog::new(None);
        assert_eq!(catalog.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let catalog = HttpCatalog::new(Some("http://localhost:8080/api/".to_string()));
        assert_eq!(catalog.base_url(), "http://localhost:8080/api");
    }
}
