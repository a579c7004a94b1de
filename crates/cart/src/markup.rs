//! HTML for host pages that embed the cart (`#cart-items`, `#cart-total`).

use std::fmt::Write;

use crate::config::{DECREASE_LABEL, EMPTY_CART_TEXT, INCREASE_LABEL};
use crate::view::CartView;

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Cart line markup, or the empty-cart placeholder.
pub fn render_cart_items(view: &CartView) -> String {
    if view.is_empty() {
        return format!("<p class=\"empty-cart\">{EMPTY_CART_TEXT}</p>");
    }
    let mut html = String::new();
    for line in &view.lines {
        let id = escape_html(&line.id);
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<div class=\"cart-item\">\
             <span class=\"cart-item-name\">{name}</span>\
             <div class=\"cart-item-controls\">\
             <button class=\"quantity-btn\" data-action=\"decrease\" data-id=\"{id}\" type=\"button\" aria-label=\"{DECREASE_LABEL}\">-</button>\
             <span class=\"cart-item-quantity\">{quantity}</span>\
             <button class=\"quantity-btn\" data-action=\"increase\" data-id=\"{id}\" type=\"button\" aria-label=\"{INCREASE_LABEL}\">+</button>\
             </div>\
             <span class=\"cart-item-price\">{subtotal}</span>\
             </div>",
            name = escape_html(&line.name),
            quantity = line.quantity,
            subtotal = line.subtotal_label,
        );
    }
    html
}

/// Text for the total element.
pub fn render_total(view: &CartView) -> String {
    view.total_label.clone()
}
