//! Cart systems: apply queued actions, then redraw at most once per frame.
//!
//! Any number of mutations in a frame only mark the view stale; the single
//! redraw rebuilds [`CartView`] and asks for one snapshot write.

use bevy::prelude::*;

use crate::actions::{dispatch, CartActionEvent, DispatchOutcome};
use crate::cart_state::Cart;
use crate::category_filter::ActiveCategory;
use crate::checkout::{CheckoutOutcome, OrderDraftEvent};
use crate::config::{CHECKOUT_NOTICE, EMPTY_CHECKOUT_NOTICE};
use crate::notices::PendingNotices;
use crate::snapshot::encode_snapshot;
use crate::view::CartView;

/// Tracks whether the view is stale and how many redraws have run.
#[derive(Resource, Debug)]
pub struct CartRedraw {
    pending: bool,
    count: u64,
}

impl Default for CartRedraw {
    /// Starts pending so the first frame draws (and persists) the loaded cart.
    fn default() -> Self {
        Self {
            pending: true,
            count: 0,
        }
    }
}

impl CartRedraw {
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Snapshot produced by a redraw, for whichever storage backend is installed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PersistCartEvent {
    pub snapshot: String,
}

pub fn apply_cart_actions(
    mut events: EventReader<CartActionEvent>,
    mut cart: ResMut<Cart>,
    mut filter: ResMut<ActiveCategory>,
    mut redraw: ResMut<CartRedraw>,
    mut notices: ResMut<PendingNotices>,
    mut orders: EventWriter<OrderDraftEvent>,
) {
    for CartActionEvent(action) in events.read() {
        match dispatch(&mut cart, &mut filter, action.clone()) {
            DispatchOutcome::CartChanged => redraw.request(),
            DispatchOutcome::Ignored | DispatchOutcome::FilterChanged => {}
            DispatchOutcome::Rejected(e) => warn!("Cart action {action:?} rejected: {e}"),
            DispatchOutcome::Checkout(CheckoutOutcome::EmptyCart) => {
                info!("Checkout attempted with an empty cart");
                notices.push(EMPTY_CHECKOUT_NOTICE);
            }
            DispatchOutcome::Checkout(CheckoutOutcome::Ready(draft)) => {
                match draft.to_json() {
                    Ok(json) => info!("Order data: {json}"),
                    Err(e) => warn!("Order draft could not be serialized: {e}"),
                }
                notices.push(CHECKOUT_NOTICE);
                orders.send(OrderDraftEvent(draft));
            }
        }
    }
}

/// Run condition for [`redraw_cart`].
pub fn redraw_pending(redraw: Res<CartRedraw>) -> bool {
    redraw.is_pending()
}

pub fn redraw_cart(
    cart: Res<Cart>,
    mut view: ResMut<CartView>,
    mut redraw: ResMut<CartRedraw>,
    mut persist: EventWriter<PersistCartEvent>,
) {
    *view = CartView::build(&cart);
    redraw.pending = false;
    redraw.count += 1;
    debug!(
        "Cart redraw #{}: {} lines, {}",
        redraw.count,
        view.lines.len(),
        view.total_label
    );

    match encode_snapshot(&cart) {
        Ok(snapshot) => {
            persist.send(PersistCartEvent { snapshot });
        }
        Err(e) => warn!("Cart snapshot not written: {e}"),
    }
}
