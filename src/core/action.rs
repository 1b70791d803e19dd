//! # Actions
//!
//! Everything that can happen in Greenleaf becomes an `Action`.
//! User picks a category? That's `Action::SelectFilter(index)`.
//! The plants endpoint answers? That's `Action::PlantsLoaded(plants)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the event loop must
//! perform next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch sequencing lives here too: plants are only requested once the
//! categories have arrived.

use log::{debug, info, warn};

use crate::catalog::{CatalogError, Category, Plant, PlantId};
use crate::core::filters::FilterBar;
use crate::core::state::App;
use crate::core::store::PlantStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Categories,
    Plants,
}

impl FetchStage {
    pub fn label(self) -> &'static str {
        match self {
            FetchStage::Categories => "categories",
            FetchStage::Plants => "plants",
        }
    }
}

#[derive(Debug)]
pub enum Action {
    /// Start loading the catalog.
    LoadCatalog,
    CategoriesLoaded(Vec<Category>),
    PlantsLoaded(Vec<Plant>),
    CatalogFailed { stage: FetchStage, error: CatalogError },
    /// Activate the filter control at this index.
    SelectFilter(usize),
    /// Append the next batch of the displayed list.
    LoadMore,
    AddToCart(PlantId),
    RemoveFromCart(PlantId),
    OpenDetail(PlantId),
    CloseDetail,
    DismissNotice,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchCategories,
    FetchPlants,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadCatalog => {
            app.is_loading = true;
            app.status_message = String::from("Loading categories...");
            Effect::FetchCategories
        }
        Action::CategoriesLoaded(categories) => {
            info!("Showing {} category controls", categories.len());
            app.filters = FilterBar::with_categories(&app.settings.all_label, &categories);
            app.is_loading = true;
            app.status_message = String::from("Loading plants...");
            Effect::FetchPlants
        }
        Action::PlantsLoaded(plants) => {
            app.is_loading = false;
            app.store = PlantStore::new(plants);
            let filter = app.filters.active_filter().clone();
            let list = app.plants_for(&filter);
            app.view.show(list, true);
            app.status_message = format!("{} plants", app.store.len());
            Effect::None
        }
        Action::CatalogFailed { stage, error } => {
            warn!("Catalog unavailable while loading {}: {}", stage.label(), error);
            app.is_loading = false;
            app.notice = Some(format!("Could not load {}: {}", stage.label(), error));
            app.status_message = String::from("Catalog unavailable");
            Effect::None
        }
        Action::SelectFilter(index) => {
            let Some(filter) = app.filters.select(index).cloned() else {
                debug!("Ignoring out-of-range filter index {}", index);
                return Effect::None;
            };
            let list = app.plants_for(&filter);
            let shown = app.view.show(list, true);
            debug!(
                "Filter {:?}: showing {} of {}",
                filter,
                shown.len(),
                app.view.total()
            );
            Effect::None
        }
        Action::LoadMore => {
            if app.can_load_more() {
                let added = app.view.load_more();
                debug!(
                    "Loaded batch {:?} ({}/{})",
                    added,
                    app.view.loaded(),
                    app.view.total()
                );
            }
            Effect::None
        }
        Action::AddToCart(id) => {
            match app.store.get(id) {
                Some(plant) => {
                    app.cart.add(plant.id, &plant.name, plant.price);
                    app.status_message = format!("Added {} to cart", plant.name);
                }
                None => warn!("AddToCart for unknown plant id {}", id),
            }
            Effect::None
        }
        Action::RemoveFromCart(id) => {
            if app.cart.remove(id) {
                app.status_message = String::from("Removed from cart");
            }
            Effect::None
        }
        Action::OpenDetail(id) => {
            match app.store.get(id) {
                Some(plant) => app.detail = Some(plant.clone()),
                None => warn!("OpenDetail for unknown plant id {}", id),
            }
            Effect::None
        }
        Action::CloseDetail => {
            app.detail = None;
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
