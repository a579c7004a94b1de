//! Checkout: turning the cart into an order draft.
//!
//! Nothing is submitted. The draft is logged and emitted as an
//! [`OrderDraftEvent`] so an order-creation endpoint can be attached later.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::cart_error::SnapshotError;
use crate::cart_state::LineItem;
use crate::price::Price;

/// Lifecycle of an order on the café side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Paid,
    Cancelled,
}

/// The `{items, total}` payload reserved for order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    pub items: BTreeMap<String, LineItem>,
    pub total: Price,
    pub status: OrderStatus,
}

impl OrderDraft {
    pub(crate) fn new(items: BTreeMap<String, LineItem>, total: Price) -> Self {
        Self {
            items,
            total,
            status: OrderStatus::Draft,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to order; the guest gets the empty-cart notice.
    EmptyCart,
    Ready(OrderDraft),
}

/// Emitted for every prepared order draft.
#[derive(Event, Debug, Clone)]
pub struct OrderDraftEvent(pub OrderDraft);
