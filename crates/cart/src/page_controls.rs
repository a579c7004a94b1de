//! Clicks on a host page that embeds the cart.
//!
//! The browser build reads the clicked element into a [`PageClick`] and queues
//! the matching action in [`PageActionQueue`]. [`drain_page_actions`] forwards
//! queued actions as [`CartActionEvent`]s at the start of `CartSet::Apply`, so
//! page clicks and egui clicks go through the same dispatch.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::actions::{CartAction, CartActionEvent};

/// What a click on the host page hit, read from the element's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageClick {
    /// Quantity button inside a menu entry. `control` is its `plus` / `minus`
    /// class; id, name and price come from the entry's `data-item-*`.
    MenuQuantity {
        control: String,
        id: String,
        name: String,
        price: String,
    },
    /// Cart line button carrying `data-action` and `data-id`.
    CartQuantity { action: String, id: String },
    Checkout,
    /// Category tab with its `data-category` key.
    Category(String),
}

impl PageClick {
    pub fn to_action(&self) -> Option<CartAction> {
        match self {
            PageClick::MenuQuantity {
                control,
                id,
                name,
                price,
            } => CartAction::from_menu_control(control, id, name, price),
            PageClick::CartQuantity { action, id } => CartAction::from_cart_control(action, id),
            PageClick::Checkout => Some(CartAction::Checkout),
            PageClick::Category(key) => Some(CartAction::SelectCategory(key.clone())),
        }
    }
}

/// Shared slot bridging DOM event listeners -> ECS world.
#[derive(Resource, Default, Clone)]
pub struct PageActionQueue(pub Arc<Mutex<VecDeque<CartAction>>>);

impl PageActionQueue {
    /// Queues the action `click` maps to. Returns `false` for unknown controls.
    pub fn push_click(&self, click: &PageClick) -> bool {
        let Some(action) = click.to_action() else {
            warn!("Ignoring unknown page control {click:?}");
            return false;
        };
        let Ok(mut queue) = self.0.lock() else {
            return false;
        };
        queue.push_back(action);
        true
    }

    pub fn len(&self) -> usize {
        self.0.lock().map_or(0, |queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Moves queued page actions into the cart's event stream, oldest first.
pub fn drain_page_actions(queue: Res<PageActionQueue>, mut actions: EventWriter<CartActionEvent>) {
    let Ok(mut pending) = queue.0.lock() else {
        return;
    };
    for action in pending.drain(..) {
        actions.send(CartActionEvent(action));
    }
}
