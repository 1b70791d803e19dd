//! # Category Filters
//!
//! The filter bar is one synthetic "all" control followed by one control per
//! category. The active control is stored as an index, so exactly one
//! control is active even if two categories share a name.

use crate::catalog::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// A single selectable control in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub label: String,
    pub filter: Filter,
}

#[derive(Debug, Clone)]
pub struct FilterBar {
    controls: Vec<FilterControl>,
    active: usize,
}

impl FilterBar {
    /// A bar with only the "all" control, active.
    pub fn new(all_label: &str) -> Self {
        Self {
            controls: vec![FilterControl {
                label: all_label.to_string(),
                filter: Filter::All,
            }],
            active: 0,
        }
    }

    /// Rebuild with the given categories. The "all" control becomes active.
    pub fn with_categories(all_label: &str, categories: &[Category]) -> Self {
        let mut bar = Self::new(all_label);
        bar.controls.extend(categories.iter().map(|category| FilterControl {
            label: category.name.clone(),
            filter: Filter::Category(category.name.clone()),
        }));
        bar
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_filter(&self) -> &Filter {
        &self.controls[self.active].filter
    }

    /// Make `index` the active control. Out-of-range indices leave the bar
    /// unchanged and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&Filter> {
        if index >= self.controls.len() {
            return None;
        }
        self.active = index;
        Some(&self.controls[index].filter)
    }

    pub fn next_index(&self) -> usize {
        (self.active + 1) % self.controls.len()
    }

    pub fn prev_index(&self) -> usize {
        (self.active + self.controls.len() - 1) % self.controls.len()
    }
}
