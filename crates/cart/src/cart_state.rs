//! The cart mapping and its per-line state machine.
//!
//! ```text
//! absent --add--> present(1) --add/increase--> present(n+1)
//! present(n > 1) --remove--> present(n-1)
//! present(1)     --remove--> absent
//! ```
//!
//! A line exists only while its quantity is positive. Ids are compared with
//! surrounding whitespace trimmed, in every operation.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cart_error::CartError;
use crate::checkout::{CheckoutOutcome, OrderDraft};
use crate::price::Price;

/// One selected menu item: name, unit price and how many were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: Price,
    quantity: u32,
}

impl LineItem {
    pub(crate) fn new(name: String, price: Price, quantity: u32) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

fn line_key(id: &str) -> &str {
    id.trim()
}

/// The order in progress, keyed by menu item id.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<String, LineItem>,
}

impl Cart {
    /// Adds one unit of an item described by raw menu attributes.
    ///
    /// Returns the new quantity of the line. Invalid input leaves the cart
    /// untouched. When the id is already present the stored name and price
    /// are kept.
    pub fn add(&mut self, id: &str, name: &str, price: &str) -> Result<u32, CartError> {
        let id = line_key(id);
        let name = name.trim();
        if id.is_empty() {
            return Err(CartError::MissingId);
        }
        if name.is_empty() {
            return Err(CartError::MissingName);
        }
        let price = Price::parse(price)?;

        let line = self
            .lines
            .entry(id.to_string())
            .or_insert_with(|| LineItem::new(name.to_string(), price, 0));
        line.quantity = line.quantity.saturating_add(1);
        Ok(line.quantity)
    }

    /// Bumps an existing line by one. Absent ids are ignored.
    pub fn increase(&mut self, id: &str) -> Option<u32> {
        let line = self.lines.get_mut(line_key(id))?;
        line.quantity = line.quantity.saturating_add(1);
        Some(line.quantity)
    }

    /// Takes one unit off a line, dropping the line when it reaches zero.
    ///
    /// Returns the remaining quantity (`Some(0)` when the line was removed)
    /// or `None` when the id was not in the cart.
    pub fn remove(&mut self, id: &str) -> Option<u32> {
        let id = line_key(id);
        let line = self.lines.get_mut(id)?;
        line.quantity = line.quantity.saturating_sub(1);
        let remaining = line.quantity;
        if remaining == 0 {
            self.lines.remove(id);
        }
        Some(remaining)
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.lines.get(line_key(id))
    }

    /// Quantity of `id` in the cart, zero when absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.lines.get(line_key(id)).map_or(0, LineItem::quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineItem)> {
        self.lines.iter().map(|(id, line)| (id.as_str(), line))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Σ(price × quantity) over every line.
    pub fn total(&self) -> Price {
        self.lines.values().map(LineItem::subtotal).sum()
    }

    /// Prepares an order draft, or reports that there is nothing to order.
    ///
    /// The empty case returns before any total is computed.
    pub fn checkout(&self) -> CheckoutOutcome {
        if self.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }
        CheckoutOutcome::Ready(OrderDraft::new(self.lines.clone(), self.total()))
    }

    pub(crate) fn lines(&self) -> &BTreeMap<String, LineItem> {
        &self.lines
    }

    /// Inserts a restored line. Zero quantities are not representable.
    pub(crate) fn restore_line(&mut self, id: String, line: LineItem) {
        let id = line_key(&id);
        if line.quantity > 0 && !id.is_empty() {
            self.lines.insert(id.to_string(), line);
        }
    }
}
