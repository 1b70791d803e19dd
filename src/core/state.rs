//! # Application State
//!
//! Core business state for Greenleaf. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CatalogSource>   // where categories/plants come from
//! ├── settings: ResolvedConfig         // display + pagination settings
//! ├── filters: FilterBar               // category controls, one active
//! ├── store: PlantStore                // every fetched plant
//! ├── view: PlantListView              // displayed list + cursor
//! ├── cart: Cart                       // cart lines
//! ├── detail: Option<Plant>            // open detail modal
//! ├── notice: Option<String>           // user-visible failure notice
//! ├── status_message: String           // status bar text
//! └── is_loading: bool                 // a fetch is in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::catalog::{CatalogSource, Plant};
use crate::core::cart::Cart;
use crate::core::config::ResolvedConfig;
use crate::core::filters::{Filter, FilterBar};
use crate::core::pager::PlantListView;
use crate::core::store::PlantStore;

pub struct App {
    pub source: Arc<dyn CatalogSource>,
    pub settings: ResolvedConfig,
    pub filters: FilterBar,
    pub store: PlantStore,
    pub view: PlantListView,
    pub cart: Cart,
    pub detail: Option<Plant>,
    pub notice: Option<String>,
    pub status_message: String,
    pub is_loading: bool,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>, settings: ResolvedConfig) -> Self {
        let filters = FilterBar::new(&settings.all_label);
        Self {
            source,
            settings,
            filters,
            store: PlantStore::default(),
            view: PlantListView::new(),
            cart: Cart::new(),
            detail: None,
            notice: None,
            status_message: String::from("Welcome to Greenleaf!"),
            is_loading: false,
        }
    }

    /// The plants a filter selects from the store.
    pub fn plants_for(&self, filter: &Filter) -> Vec<Plant> {
        match filter {
            Filter::All => self.store.all().to_vec(),
            Filter::Category(name) => self.store.filter_by_category(name),
        }
    }

    /// Whether a scroll near the bottom should append another batch.
    pub fn can_load_more(&self) -> bool {
        let view_paginates =
            self.filters.active_filter().is_all() || self.settings.paginate_filtered_views;
        view_paginates && self.view.has_more()
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Greenleaf!");
        assert!(!app.is_loading);
        assert!(app.cart.is_empty());
        assert_eq!(app.filters.controls().len(), 1);
        assert!(app.filters.active_filter().is_all());
        assert!(!app.can_load_more());
    }
}
