//! # Plant Store
//!
//! The authoritative in-memory plant collection for the session, plus an
//! id index so detail and cart lookups don't scan the list.

use std::collections::HashMap;

use crate::catalog::{Plant, PlantId};

/// Case-insensitive, whitespace-trimmed category comparison.
pub fn category_matches(plant_category: &str, query: &str) -> bool {
    plant_category.trim().to_lowercase() == query.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct PlantStore {
    plants: Vec<Plant>,
    by_id: HashMap<PlantId, usize>,
}

impl PlantStore {
    pub fn new(plants: Vec<Plant>) -> Self {
        let mut by_id = HashMap::with_capacity(plants.len());
        for (index, plant) in plants.iter().enumerate() {
            // First record wins on duplicate ids
            by_id.entry(plant.id).or_insert(index);
        }
        Self { plants, by_id }
    }

    pub fn all(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.by_id.get(&id).map(|&index| &self.plants[index])
    }

    /// Plants whose `category` matches `name`. Plants with no category never
    /// match a named filter.
    pub fn filter_by_category(&self, name: &str) -> Vec<Plant> {
        self.plants
            .iter()
            .filter(|plant| {
                plant
                    .category
                    .as_deref()
                    .is_some_and(|category| category_matches(category, name))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::plant;

    #[test]
    fn test_filter_ignores_case_and_whitespace() {
        let store = PlantStore::new(vec![
            plant(1, "Marigold", Some(" Flowering "), 120),
            plant(2, "Mango", Some("Fruit Tree"), 500),
        ]);

        let flowering = store.filter_by_category("flowering");
        assert_eq!(flowering.len(), 1);
        assert_eq!(flowering[0].name, "Marigold");

        assert_eq!(store.filter_by_category("  FRUIT tree ").len(), 1);
    }

    #[test]
    fn test_uncategorized_plants_never_match_named_filter() {
        let store = PlantStore::new(vec![
            plant(1, "Mystery", None, 100),
            plant(2, "Blank", Some(""), 100),
        ]);

        assert!(store.filter_by_category("Flowering").is_empty());
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_get_by_id_first_duplicate_wins() {
        let store = PlantStore::new(vec![
            plant(5, "First", None, 100),
            plant(5, "Second", None, 100),
            plant(6, "Other", None, 100),
        ]);

        assert_eq!(store.get(5).map(|p| p.name.as_str()), Some("First"));
        assert_eq!(store.get(6).map(|p| p.name.as_str()), Some("Other"));
        assert!(store.get(99).is_none());
        assert_eq!(store.len(), 3);
    }
}
