//! # TestCafe: headless harness for the cart systems
//!
//! Wraps a `MinimalPlugins` app with [`CartPlugin`] and the embedded menu.
//! Actions are queued with `send`, applied by `tick`, and every snapshot or
//! order draft emitted along the way is collected for assertions.

use bevy::app::App;
use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use crate::actions::{CartAction, CartActionEvent};
use crate::cart_state::Cart;
use crate::category_filter::ActiveCategory;
use crate::checkout::{OrderDraft, OrderDraftEvent};
use crate::menu::MenuCatalog;
use crate::notices::PendingNotices;
use crate::page_controls::PageActionQueue;
use crate::redraw::{CartRedraw, PersistCartEvent};
use crate::view::CartView;
use crate::CartPlugin;

pub struct TestCafe {
    app: App,
    persist_cursor: EventCursor<PersistCartEvent>,
    order_cursor: EventCursor<OrderDraftEvent>,
    snapshots: Vec<String>,
    orders: Vec<OrderDraft>,
}

impl TestCafe {
    /// Empty cart, embedded menu, first frame already run.
    pub fn new() -> Self {
        Self::with_cart(Cart::default())
    }

    /// Starts from `cart` as if it had just been restored from storage.
    pub fn with_cart(cart: Cart) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(MenuCatalog::embedded());
        app.add_plugins(CartPlugin);
        app.insert_resource(cart);

        let mut cafe = Self {
            app,
            persist_cursor: EventCursor::default(),
            order_cursor: EventCursor::default(),
            snapshots: Vec::new(),
            orders: Vec::new(),
        };
        cafe.tick();
        cafe
    }

    pub fn send(&mut self, action: CartAction) -> &mut Self {
        self.app.world_mut().send_event(CartActionEvent(action));
        self
    }

    pub fn add(&mut self, id: &str, name: &str, price: &str) -> &mut Self {
        self.send(CartAction::Add {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
        })
    }

    pub fn remove(&mut self, id: &str) -> &mut Self {
        self.send(CartAction::Remove { id: id.to_string() })
    }

    /// Runs one frame and collects emitted snapshots and order drafts.
    pub fn tick(&mut self) -> &mut Self {
        self.app.update();

        let world = self.app.world();
        let persisted = world.resource::<Events<PersistCartEvent>>();
        self.snapshots.extend(
            self.persist_cursor
                .read(persisted)
                .map(|event| event.snapshot.clone()),
        );
        let drafts = world.resource::<Events<OrderDraftEvent>>();
        self.orders
            .extend(self.order_cursor.read(drafts).map(|event| event.0.clone()));
        self
    }

    pub fn cart(&self) -> &Cart {
        self.app.world().resource::<Cart>()
    }

    pub fn view(&self) -> &CartView {
        self.app.world().resource::<CartView>()
    }

    pub fn filter(&self) -> &ActiveCategory {
        self.app.world().resource::<ActiveCategory>()
    }

    /// Handle to the queue a host page's click listener pushes into.
    pub fn page_queue(&self) -> PageActionQueue {
        self.app.world().resource::<PageActionQueue>().clone()
    }

    pub fn notices(&self) -> &PendingNotices {
        self.app.world().resource::<PendingNotices>()
    }

    pub fn redraws(&self) -> u64 {
        self.app.world().resource::<CartRedraw>().count()
    }

    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    pub fn orders(&self) -> &[OrderDraft] {
        &self.orders
    }
}
