//! The café menu: entries, categories and display order.
//!
//! A default menu ships with the binary. Native builds can swap it for a JSON
//! file of the same shape named by `CAFE_MENU_PATH`.

mod catalog;
mod types;


pub use catalog::MenuCatalog;
pub use types::{Category, MenuItem, Unit};
