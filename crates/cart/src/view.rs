//! Display model rebuilt from the cart on every redraw.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::cart_state::Cart;
use crate::config::TOTAL_PREFIX;
use crate::price::{format_price, Price};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub subtotal: Price,
    pub subtotal_label: String,
}

/// What the cart panel, the menu quantity indicators and the DOM mirror show.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Price,
    pub total_label: String,
    pub item_count: u64,
    quantities: BTreeMap<String, u32>,
}

impl Default for CartView {
    fn default() -> Self {
        CartView::build(&Cart::default())
    }
}

impl CartView {
    pub fn build(cart: &Cart) -> Self {
        let lines: Vec<CartLineView> = cart
            .iter()
            .map(|(id, line)| CartLineView {
                id: id.to_string(),
                name: line.name.clone(),
                quantity: line.quantity(),
                subtotal: line.subtotal(),
                subtotal_label: format_price(line.subtotal()),
            })
            .collect();
        let total: Price = lines.iter().map(|line| line.subtotal).sum();
        let item_count = lines.iter().map(|line| u64::from(line.quantity)).sum();
        let quantities = lines
            .iter()
            .map(|line| (line.id.clone(), line.quantity))
            .collect();

        Self {
            lines,
            total,
            total_label: format!("{TOTAL_PREFIX}{}", format_price(total)),
            item_count,
            quantities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity indicator for a menu entry; zero for items not in the cart.
    pub fn menu_quantity(&self, id: &str) -> u32 {
        self.quantities.get(id.trim()).copied().unwrap_or(0)
    }
}
