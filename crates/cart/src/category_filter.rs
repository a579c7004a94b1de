//! Exclusive category selection for the menu.

use bevy::prelude::*;

use crate::config::ALL_CATEGORIES;
use crate::menu::Category;

/// The one active menu category. Selecting a category replaces the previous one.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveCategory {
    #[default]
    All,
    Only(Category),
}

impl ActiveCategory {
    /// Reads a category control's key. Empty keys select nothing.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "" => None,
            ALL_CATEGORIES => Some(ActiveCategory::All),
            other => Some(ActiveCategory::Only(Category::new(other))),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ActiveCategory::All => ALL_CATEGORIES,
            ActiveCategory::Only(category) => category.key(),
        }
    }

    pub fn shows(&self, category: &Category) -> bool {
        match self {
            ActiveCategory::All => true,
            ActiveCategory::Only(active) => active == category,
        }
    }
}
