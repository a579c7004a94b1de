//! Fixed keys, labels and file names shared by every crate in the workspace.

/// Key of the cart snapshot in browser `localStorage`.
pub const STORAGE_KEY: &str = "cafeCart";

/// Appended to every formatted price.
pub const CURRENCY_SUFFIX: &str = "₽";

/// Category key that disables menu filtering.
pub const ALL_CATEGORIES: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "Все";

pub const WINDOW_TITLE: &str = "Кафе";
pub const MENU_TITLE: &str = "Меню";
pub const CART_TITLE: &str = "Корзина";
pub const CHECKOUT_LABEL: &str = "Оформить заказ";
pub const EMPTY_CART_TEXT: &str = "Корзина пуста";
pub const TOTAL_PREFIX: &str = "Итого: ";
pub const DECREASE_LABEL: &str = "Уменьшить";
pub const INCREASE_LABEL: &str = "Увеличить";

/// Blocking notice shown when checkout is attempted with nothing in the cart.
pub const EMPTY_CHECKOUT_NOTICE: &str = "Ваша корзина пуста!";
/// Placeholder notice shown after an order draft has been prepared.
pub const CHECKOUT_NOTICE: &str = "Переход к оформлению заказа...";

/// Native builds persist the snapshot to this file unless `CART_PATH_ENV` is set.
pub const DEFAULT_CART_FILE: &str = "cafe_cart.json";
pub const CART_PATH_ENV: &str = "CAFE_CART_PATH";
/// Optional JSON file replacing the embedded menu (native builds only).
pub const MENU_PATH_ENV: &str = "CAFE_MENU_PATH";

/// Host page elements the browser build mirrors the cart into.
pub const CART_ITEMS_ELEMENT_ID: &str = "cart-items";
pub const CART_TOTAL_ELEMENT_ID: &str = "cart-total";
pub const MENU_QUANTITY_SELECTOR: &str = ".quantity[data-item-id]";

/// Host page controls the browser build listens to.
pub const MENU_ITEM_SELECTOR: &str = ".menu-item";
pub const QUANTITY_BUTTON_CLASS: &str = "quantity-btn";
pub const CATEGORY_ITEM_SELECTOR: &str = ".category-item";
pub const CHECKOUT_BUTTON_ID: &str = "checkout-btn";
/// Menu control classes that map to add / remove.
pub const MENU_CONTROLS: [&str; 2] = ["plus", "minus"];
