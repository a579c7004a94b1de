use bevy::prelude::*;
use cart::snapshot::decode_snapshot;
use cart::{Cart, CartRedraw, PersistCartEvent};

use crate::cart_store::{CartStorage, CartStore};
use crate::storage_error::StorageError;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Restores the cart at startup and writes a snapshot after every redraw.
///
/// Add after `cart::CartPlugin`.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        // Tests and embedding apps insert their own backend beforehand.
        if !app.world().contains_resource::<CartStore>() {
            app.insert_resource(CartStore::platform_default());
        }

        app.add_systems(Startup, load_saved_cart)
            .add_systems(PostUpdate, write_cart_snapshot);
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Reads and decodes the stored snapshot. Every failure degrades to an empty
/// cart with a warning.
pub fn load_cart(store: &dyn CartStorage) -> Cart {
    match read_cart(store) {
        Ok(Some(cart)) => {
            info!(
                "Restored cart from {}: {} lines, {} items",
                store.describe(),
                cart.len(),
                cart.item_count()
            );
            cart
        }
        Ok(None) => {
            info!("No saved cart in {}", store.describe());
            Cart::default()
        }
        Err(e) => {
            warn!("Error reading cart from {}: {e}", store.describe());
            Cart::default()
        }
    }
}

fn read_cart(store: &dyn CartStorage) -> Result<Option<Cart>, StorageError> {
    let Some(text) = store.read()? else {
        return Ok(None);
    };
    Ok(Some(decode_snapshot(&text)?))
}

fn load_saved_cart(store: Res<CartStore>, mut cart: ResMut<Cart>, mut redraw: ResMut<CartRedraw>) {
    *cart = load_cart(store.backend());
    redraw.request();
}

// ---------------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------------

/// Writes the newest snapshot of the frame; older ones are superseded.
fn write_cart_snapshot(mut events: EventReader<PersistCartEvent>, store: Res<CartStore>) {
    let Some(latest) = events.read().last() else {
        return;
    };
    if let Err(e) = store.backend().write(&latest.snapshot) {
        warn!(
            "Error saving cart to {}: {e}",
            store.backend().describe()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_store::MemoryStore;
    use cart::snapshot::encode_snapshot;
    use cart::{CartAction, CartActionEvent, CartPlugin, MenuCatalog};

    fn cafe_with_store(store: MemoryStore) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(MenuCatalog::embedded());
        app.insert_resource(CartStore::new(store));
        app.add_plugins((CartPlugin, SavePlugin));
        app.update();
        app
    }

    fn send(app: &mut App, action: CartAction) {
        app.world_mut().send_event(CartActionEvent(action));
    }

    fn add_latte(app: &mut App) {
        send(
            app,
            CartAction::Add {
                id: "latte".to_string(),
                name: "Латте".to_string(),
                price: "180".to_string(),
            },
        );
    }

    #[test]
    fn test_load_cart_missing_is_empty() {
        assert!(load_cart(&MemoryStore::default()).is_empty());
    }

    #[test]
    fn test_load_cart_corrupt_is_empty() {
        let store = MemoryStore::with_snapshot("{\"latte\": oops");
        assert!(load_cart(&store).is_empty());
    }

    #[test]
    fn test_read_cart_reports_corrupt_snapshot() {
        let store = MemoryStore::with_snapshot("[1, 2]");
        assert!(matches!(
            read_cart(&store),
            Err(StorageError::Snapshot(cart::SnapshotError::Corrupt(_)))
        ));
        assert!(matches!(read_cart(&MemoryStore::default()), Ok(None)));
    }

    #[test]
    fn test_startup_restores_saved_cart() {
        let mut saved = Cart::default();
        saved.add("latte", "Латте", "180").unwrap();
        saved.add("latte", "Латте", "180").unwrap();
        let store = MemoryStore::with_snapshot(encode_snapshot(&saved).unwrap());

        let app = cafe_with_store(store);
        assert_eq!(app.world().resource::<Cart>(), &saved);
        let view = app.world().resource::<cart::CartView>();
        assert_eq!(view.menu_quantity("latte"), 2);
    }

    #[test]
    fn test_startup_with_corrupt_snapshot_starts_empty_and_overwrites() {
        let store = MemoryStore::with_snapshot("not json at all");
        let app = cafe_with_store(store.clone());
        assert!(app.world().resource::<Cart>().is_empty());
        assert_eq!(store.contents().as_deref(), Some("{}"));
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = MemoryStore::default();
        let mut app = cafe_with_store(store.clone());

        add_latte(&mut app);
        app.update();
        let saved = decode_snapshot(&store.contents().unwrap()).unwrap();
        assert_eq!(saved.quantity_of("latte"), 1);

        send(
            &mut app,
            CartAction::Decrease {
                id: "latte".to_string(),
            },
        );
        app.update();
        let saved = decode_snapshot(&store.contents().unwrap()).unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_reload_round_trip() {
        let store = MemoryStore::default();
        let mut first = cafe_with_store(store.clone());
        add_latte(&mut first);
        add_latte(&mut first);
        send(
            &mut first,
            CartAction::Add {
                id: "egg".to_string(),
                name: "Яйцо".to_string(),
                price: "25".to_string(),
            },
        );
        first.update();
        let before = first.world().resource::<Cart>().clone();

        let second = cafe_with_store(store);
        assert_eq!(second.world().resource::<Cart>(), &before);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut app = cafe_with_store(MemoryStore::full());
        add_latte(&mut app);
        app.update();
        assert_eq!(app.world().resource::<Cart>().quantity_of("latte"), 1);
    }
}
