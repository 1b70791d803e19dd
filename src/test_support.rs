//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogSource, Category, Plant, PlantId};
use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// An in-memory catalog for tests that don't need real API calls.
pub struct StubCatalog {
    pub categories: Result<Vec<Category>, CatalogError>,
    pub plants: Result<Vec<Plant>, CatalogError>,
}

impl StubCatalog {
    pub fn empty() -> Self {
        Self {
            categories: Ok(Vec::new()),
            plants: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.categories.clone()
    }

    async fn fetch_plants(&self) -> Result<Vec<Plant>, CatalogError> {
        self.plants.clone()
    }
}

/// Build a plant with the fields tests usually care about.
pub fn plant(id: PlantId, name: &str, category: Option<&str>, price: u64) -> Plant {
    Plant {
        id,
        name: name.to_string(),
        image: format!("https://example.com/{id}.png"),
        description: Some(format!("{name} is a lovely plant for any garden.")),
        category: category.map(str::to_string),
        category_name: None,
        price,
    }
}

/// `count` uncategorized plants with ids 1..=count.
pub fn numbered_plants(count: usize) -> Vec<Plant> {
    (1..=count as PlantId)
        .map(|id| plant(id, &format!("Plant {id}"), None, 100 + id))
        .collect()
}

/// Creates a test App with an empty StubCatalog.
pub fn test_app() -> App {
    test_app_with(ResolvedConfig::default())
}

pub fn test_app_with(settings: ResolvedConfig) -> App {
    App::new(Arc::new(StubCatalog::empty()), settings)
}

/// A test App with `plants` already loaded and the first batch shown.
pub fn loaded_app(plants: Vec<Plant>) -> App {
    let mut app = test_app();
    update(&mut app, Action::PlantsLoaded(plants));
    app
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_catalog_returns_configured_data() {
        let stub = StubCatalog {
            categories: Ok(vec![Category::new("Herb")]),
            plants: Err(CatalogError::Network("down".to_string())),
        };

        let categories = tokio_test::block_on(stub.fetch_categories()).unwrap();
        assert_eq!(categories, vec![Category::new("Herb")]);

        let plants = tokio_test::block_on(stub.fetch_plants());
        assert_eq!(plants, Err(CatalogError::Network("down".to_string())));
    }
}
