//! Cart Rendering
//!
//! Pure formatting and markup helpers for the cart view. Nothing here
//! touches the DOM; the cart modal injects `cart_rows_html` output via
//! `inner_html` and wires remove clicks by delegation on the container.

use crate::models::CartItem;

/// Escape text for insertion into markup.
///
/// Covers `&`, `<`, `>` and `"`. The single quote is deliberately left
/// alone: generated attributes are always double-quoted, and the
/// pass-through is long-standing observable behavior.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Two-decimal dollar string: `8.5` -> `"$8.50"`.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Coerce displayed price text to a number: keeps digits and dots,
/// anything unparseable reads as zero. `"$12.99"` -> `12.99`.
pub fn parse_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

pub fn line_total(item: &CartItem) -> f64 {
    item.price * f64::from(item.qty)
}

pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(line_total).sum()
}

/// Markup for the cart item container: one `.cart-item` row per line item,
/// or a placeholder row when the cart is empty. Item names are escaped;
/// the remove button carries the item id in `data-id` for the delegated
/// click handler.
pub fn cart_rows_html(items: &[CartItem]) -> String {
    if items.is_empty() {
        return r#"<div class="empty-cart">Your cart is empty.</div>"#.to_string();
    }

    let mut html = String::new();
    for item in items {
        html.push_str(&format!(
            concat!(
                r#"<div class="cart-item">"#,
                r#"<div class="ci-name">{name}</div>"#,
                r#"<div class="ci-qty">x{qty}</div>"#,
                r#"<div class="ci-price">{total}</div>"#,
                r#"<button class="btn-muted btn-remove" data-id="{id}">Remove</button>"#,
                "</div>"
            ),
            name = escape_html(&item.name),
            qty = item.qty,
            total = format_currency(line_total(item)),
            id = item.id,
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64, qty: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            qty,
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(8.5), "$8.50");
        assert_eq!(format_currency(12.999), "$13.00");
    }

    #[test]
    fn test_subtotal_formatting() {
        let items = vec![item("1", "a", 10.0, 2), item("2", "b", 5.5, 1)];
        assert_eq!(format_currency(subtotal(&items)), "$25.50");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$12.99"), 12.99);
        assert_eq!(parse_price("8.50"), 8.5);
        assert_eq!(parse_price("USD 4.25 "), 4.25);
        assert_eq!(parse_price("free"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Mac & Cheese"), "Mac &amp; Cheese");
    }

    #[test]
    fn test_escape_html_leaves_single_quote() {
        // pinned: single quotes pass through unchanged
        assert_eq!(escape_html("Po' Boy"), "Po' Boy");
    }

    #[test]
    fn test_rows_escape_names() {
        let items = vec![item("1", "<script>burger</script>", 5.0, 1)];
        let html = cart_rows_html(&items);
        assert!(html.contains("&lt;script&gt;burger&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_rows_carry_id_qty_and_line_total() {
        let items = vec![item("42", "Fries", 3.0, 3)];
        let html = cart_rows_html(&items);
        assert!(html.contains(r#"data-id="42""#));
        assert!(html.contains("x3"));
        assert!(html.contains("$9.00"));
    }

    #[test]
    fn test_empty_cart_placeholder() {
        let html = cart_rows_html(&[]);
        assert!(html.contains("Your cart is empty."));
        assert!(!html.contains("cart-item"));
    }
}
