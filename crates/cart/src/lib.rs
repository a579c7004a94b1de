use bevy::prelude::*;

pub mod actions;
pub mod cart_error;
pub mod cart_state;
pub mod category_filter;
pub mod checkout;
pub mod config;
pub mod markup;
pub mod menu;
pub mod notices;
pub mod page_controls;
pub mod price;
pub mod redraw;
pub mod snapshot;
pub mod view;

#[cfg(test)]
mod test_harness;

pub use actions::{dispatch, CartAction, CartActionEvent, DispatchOutcome};
pub use cart_error::{CartError, SnapshotError};
pub use cart_state::{Cart, LineItem};
pub use category_filter::ActiveCategory;
pub use checkout::{CheckoutOutcome, OrderDraft, OrderDraftEvent, OrderStatus};
pub use menu::{Category, MenuCatalog, MenuItem, Unit};
pub use notices::{CartNotice, PendingNotices};
pub use page_controls::{PageActionQueue, PageClick};
pub use price::{format_price, Price};
pub use redraw::{CartRedraw, PersistCartEvent};
pub use view::{CartLineView, CartView};

/// Ordered phases of the cart in the `Update` schedule.
///
/// `Apply` → `Redraw`. UI systems that read [`CartView`] run after `Redraw`;
/// their actions are applied on the next frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartSet {
    /// Forwards queued page clicks, then drains `CartActionEvent`s into the
    /// cart and the category filter.
    Apply,
    /// Rebuilds the view and emits the snapshot, once, if anything changed.
    Redraw,
}

pub struct CartPlugin;

impl Plugin for CartPlugin {
    fn build(&self, app: &mut App) {
        // An embedding app (or a test) may provide its own menu first.
        if !app.world().contains_resource::<MenuCatalog>() {
            app.insert_resource(MenuCatalog::load());
        }

        app.init_resource::<Cart>()
            .init_resource::<CartView>()
            .init_resource::<CartRedraw>()
            .init_resource::<ActiveCategory>()
            .init_resource::<PendingNotices>()
            .init_resource::<PageActionQueue>()
            .add_event::<CartActionEvent>()
            .add_event::<OrderDraftEvent>()
            .add_event::<PersistCartEvent>()
            .configure_sets(Update, (CartSet::Apply, CartSet::Redraw).chain())
            .add_systems(
                Update,
                (
                    (page_controls::drain_page_actions, redraw::apply_cart_actions)
                        .chain()
                        .in_set(CartSet::Apply),
                    redraw::redraw_cart
                        .in_set(CartSet::Redraw)
                        .run_if(redraw::redraw_pending),
                ),
            );
    }
}
