//! Typed dispatch of cart controls.
//!
//! Every control on the page maps to one [`CartAction`]. [`dispatch`] applies
//! an action to the cart and the category filter and reports what happened;
//! it never touches the display or storage itself.

use bevy::prelude::*;

use crate::cart_error::CartError;
use crate::cart_state::Cart;
use crate::category_filter::ActiveCategory;
use crate::checkout::CheckoutOutcome;
use crate::menu::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Menu `+`: raw id/name/price as published by the menu entry.
    Add {
        id: String,
        name: String,
        price: String,
    },
    /// Menu `−`.
    Remove { id: String },
    /// Cart `+`: only existing lines grow.
    Increase { id: String },
    /// Cart `−`.
    Decrease { id: String },
    Checkout,
    SelectCategory(String),
}

impl CartAction {
    pub fn add_menu_item(item: &MenuItem) -> Self {
        CartAction::Add {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.to_string(),
        }
    }

    /// Maps a menu quantity control (`plus` / `minus`) to an action.
    pub fn from_menu_control(control: &str, id: &str, name: &str, price: &str) -> Option<Self> {
        match control {
            "plus" => Some(CartAction::Add {
                id: id.to_string(),
                name: name.to_string(),
                price: price.to_string(),
            }),
            "minus" => Some(CartAction::Remove { id: id.to_string() }),
            _ => None,
        }
    }

    /// Maps a cart line control (`data-action` of `increase` / `decrease`).
    pub fn from_cart_control(action: &str, id: &str) -> Option<Self> {
        match action {
            "increase" => Some(CartAction::Increase { id: id.to_string() }),
            "decrease" => Some(CartAction::Decrease { id: id.to_string() }),
            _ => None,
        }
    }
}

/// Carries a [`CartAction`] from the UI to the cart systems.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CartActionEvent(pub CartAction);

/// What [`dispatch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The cart changed and must be redrawn.
    CartChanged,
    /// Nothing to do (absent id, empty category key).
    Ignored,
    /// Add input was invalid; the cart is unchanged.
    Rejected(CartError),
    Checkout(CheckoutOutcome),
    FilterChanged,
}

pub fn dispatch(
    cart: &mut Cart,
    filter: &mut ActiveCategory,
    action: CartAction,
) -> DispatchOutcome {
    match action {
        CartAction::Add { id, name, price } => match cart.add(&id, &name, &price) {
            Ok(_) => DispatchOutcome::CartChanged,
            Err(e) => DispatchOutcome::Rejected(e),
        },
        CartAction::Remove { id } | CartAction::Decrease { id } => match cart.remove(&id) {
            Some(_) => DispatchOutcome::CartChanged,
            None => DispatchOutcome::Ignored,
        },
        CartAction::Increase { id } => match cart.increase(&id) {
            Some(_) => DispatchOutcome::CartChanged,
            None => DispatchOutcome::Ignored,
        },
        CartAction::Checkout => DispatchOutcome::Checkout(cart.checkout()),
        CartAction::SelectCategory(key) => match ActiveCategory::parse(&key) {
            Some(next) => {
                *filter = next;
                DispatchOutcome::FilterChanged
            }
            None => DispatchOutcome::Ignored,
        },
    }
}
