//! Menu item types.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Category key of a menu entry (`drink`, `base`, ...).
///
/// Any key is accepted; the café's standard keys carry a display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(key: impl Into<String>) -> Self {
        Category(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    /// Display label; unknown keys show as-is.
    pub fn label(&self) -> &str {
        match self.0.as_str() {
            "base" => "Основа для завтрака",
            "ingredient" => "Ингредиенты",
            "drink" => "Напитки",
            "cook_method" => "Способ приготовления",
            "utensil" => "Приборы",
            other => other,
        }
    }
}

/// Unit a menu price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Piece,
    Gram,
    Ml,
    Slice,
    Spoon,
    Portion,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Piece => "шт",
            Unit::Gram => "г",
            Unit::Ml => "мл",
            Unit::Slice => "ломтик",
            Unit::Spoon => "ложка",
            Unit::Portion => "порция",
        }
    }
}

/// One orderable entry of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: Price,
    #[serde(default)]
    pub unit: Unit,
    /// Display position; lower comes first.
    #[serde(default)]
    pub order: i32,
}
