//! Mirrors the cart into the host page when it provides the cart elements.
//!
//! Pages embedding the canvas can keep their own `#cart-items` / `#cart-total`
//! markup and `.quantity[data-item-id]` indicators; each redraw rewrites them.
//! One delegated click listener turns the page's menu, cart, category and
//! checkout controls into queued cart actions.

#![cfg(target_arch = "wasm32")]

use bevy::prelude::*;
use cart::config::{
    CART_ITEMS_ELEMENT_ID, CART_TOTAL_ELEMENT_ID, CATEGORY_ITEM_SELECTOR, CHECKOUT_BUTTON_ID,
    MENU_CONTROLS, MENU_ITEM_SELECTOR, MENU_QUANTITY_SELECTOR, QUANTITY_BUTTON_CLASS,
};
use cart::markup::{render_cart_items, render_total};
use cart::{ActiveCategory, CartSet, CartView, Category, PageActionQueue, PageClick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

pub struct DomMirrorPlugin;

impl Plugin for DomMirrorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, install_click_listener).add_systems(
            Update,
            (
                mirror_cart_into_dom.run_if(resource_changed::<CartView>),
                mirror_category_filter.run_if(resource_changed::<ActiveCategory>),
            )
                .after(CartSet::Redraw),
        );
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

// ---------------------------------------------------------------------------
// Clicks
// ---------------------------------------------------------------------------

/// Startup system: one `click` listener on the document for every control.
fn install_click_listener(queue: Res<PageActionQueue>) {
    let Some(document) = document() else {
        return;
    };
    let queue = queue.clone();

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        for click in read_clicks(&target) {
            queue.push_click(&click);
        }
    });

    if let Err(e) =
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        warn!("Could not listen for cart controls: {e:?}");
        return;
    }
    // Registered for the lifetime of the page.
    on_click.forget();
}

/// Every control a click on `target` hits, in page order.
fn read_clicks(target: &Element) -> Vec<PageClick> {
    let mut clicks = Vec::new();

    let classes = target.class_list();
    if classes.contains(QUANTITY_BUTTON_CLASS) {
        if let Some(menu_item) = target.closest(MENU_ITEM_SELECTOR).ok().flatten() {
            match read_menu_item(&menu_item) {
                Some((id, name, price)) => {
                    if let Some(control) = MENU_CONTROLS
                        .into_iter()
                        .find(|control| classes.contains(control))
                    {
                        clicks.push(PageClick::MenuQuantity {
                            control: control.to_string(),
                            id,
                            name,
                            price,
                        });
                    }
                }
                None => error!("Missing data attributes on menu item"),
            }
            return clicks;
        }
        if let (Some(action), Some(id)) = (
            target.get_attribute("data-action"),
            target.get_attribute("data-id"),
        ) {
            clicks.push(PageClick::CartQuantity { action, id });
            return clicks;
        }
    }

    let on_checkout = target.id() == CHECKOUT_BUTTON_ID
        || target
            .closest(&format!("#{CHECKOUT_BUTTON_ID}"))
            .ok()
            .flatten()
            .is_some();
    if on_checkout {
        clicks.push(PageClick::Checkout);
    }

    if let Some(tab) = target.closest(CATEGORY_ITEM_SELECTOR).ok().flatten() {
        if let Some(key) = tab.get_attribute("data-category") {
            clicks.push(PageClick::Category(key));
        }
    }
    clicks
}

fn read_menu_item(menu_item: &Element) -> Option<(String, String, String)> {
    let attribute = |name: &str| menu_item.get_attribute(name).filter(|value| !value.is_empty());
    Some((
        attribute("data-item-id")?,
        attribute("data-item-name")?,
        attribute("data-item-price")?,
    ))
}

// ---------------------------------------------------------------------------
// Mirroring
// ---------------------------------------------------------------------------

fn mirror_cart_into_dom(view: Res<CartView>) {
    let Some(document) = document() else {
        return;
    };

    if let Some(items) = document.get_element_by_id(CART_ITEMS_ELEMENT_ID) {
        items.set_inner_html(&render_cart_items(&view));
    }
    if let Some(total) = document.get_element_by_id(CART_TOTAL_ELEMENT_ID) {
        total.set_text_content(Some(&render_total(&view)));
    }

    let Ok(indicators) = document.query_selector_all(MENU_QUANTITY_SELECTOR) else {
        return;
    };
    for element in elements(&indicators) {
        let Some(id) = element.get_attribute("data-item-id") else {
            continue;
        };
        element.set_text_content(Some(&view.menu_quantity(&id).to_string()));
    }
}

/// Marks the active category tab and hides menu entries outside it.
fn mirror_category_filter(filter: Res<ActiveCategory>) {
    let Some(document) = document() else {
        return;
    };

    if let Ok(tabs) = document.query_selector_all(CATEGORY_ITEM_SELECTOR) {
        for tab in elements(&tabs) {
            let active = tab
                .get_attribute("data-category")
                .is_some_and(|key| key == filter.key());
            let classes = tab.class_list();
            let toggled = if active {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
            if let Err(e) = toggled {
                debug!("Could not update category tab: {e:?}");
            }
        }
    }

    if let Ok(entries) = document.query_selector_all(MENU_ITEM_SELECTOR) {
        for entry in elements(&entries) {
            let shown = match entry.get_attribute("data-category") {
                Some(key) => filter.shows(&Category::new(key)),
                None => *filter == ActiveCategory::All,
            };
            if let Err(e) = entry.toggle_attribute_with_force("hidden", !shown) {
                debug!("Could not update menu entry visibility: {e:?}");
            }
        }
    }
}
