use std::collections::HashSet;

use bevy::prelude::*;

use super::types::{Category, MenuItem};
use crate::category_filter::ActiveCategory;

const DEFAULT_MENU_JSON: &str = include_str!("default_menu.json");

/// All menu entries in display order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Sorts by `order` (stable) and drops entries whose id was already seen.
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        items.sort_by_key(|item| item.order);
        let mut seen = HashSet::new();
        items.retain(|item| {
            let fresh = seen.insert(item.id.clone());
            if !fresh {
                warn!("Duplicate menu item id {:?} ignored", item.id);
            }
            fresh
        });
        Self { items }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<MenuItem> = serde_json::from_str(text)?;
        Ok(Self::new(items))
    }

    /// The menu compiled into the binary.
    pub fn embedded() -> Self {
        match Self::from_json(DEFAULT_MENU_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Embedded menu is malformed: {e}");
                Self::default()
            }
        }
    }

    /// Loads the menu named by `CAFE_MENU_PATH`, falling back to the embedded one.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(crate::config::MENU_PATH_ENV) else {
            return Self::embedded();
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| Self::from_json(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(catalog) => {
                info!("Loaded {} menu items from {path}", catalog.len());
                catalog
            }
            Err(e) => {
                warn!("Could not load menu from {path}: {e}; using the built-in menu");
                Self::embedded()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::embedded()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| &item.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Entries the filter lets through, in display order.
    pub fn visible<'a>(
        &'a self,
        filter: &'a ActiveCategory,
    ) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |item| filter.shows(&item.category))
    }
}
