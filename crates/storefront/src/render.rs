//! Plain-text rendering of the read models

use std::fmt::Write;

use storefront_state::domain_models::PriceSummary;
use storefront_state::{CartState, CheckoutStep, OrderDraft, WishlistState};

pub fn cart(cart: &CartState) -> String {
    let mut out = String::new();
    if cart.is_empty() {
        out.push_str("Cart is empty\n");
    } else {
        let _ = writeln!(out, "Cart ({} items):", cart.item_count());
        for item in &cart.items {
            let _ = writeln!(
                out,
                "  {:<10} {:<24} {:>3} x {:>8} = {:>9}",
                item.product_id,
                item.name,
                item.quantity,
                item.price,
                item.line_price()
            );
        }
        let _ = writeln!(out, "  Subtotal: {}", cart.items_price());
    }
    if let Some(address) = &cart.shipping_address {
        let _ = writeln!(out, "Ship to: {}", address.one_line());
    }
    if let Some(method) = cart.payment_method {
        let _ = writeln!(out, "Payment: {}", method);
    }
    out
}

pub fn wishlist(wishlist: &WishlistState) -> String {
    let mut out = String::new();
    if wishlist.is_empty() {
        out.push_str("Wishlist is empty\n");
        return out;
    }
    let _ = writeln!(out, "Wishlist ({}):", wishlist.count());
    for item in &wishlist.items {
        let _ = writeln!(
            out,
            "  {:<10} {:<24} {:>8}  liked {}",
            item.product.id,
            item.product.name,
            item.product.price,
            item.added_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}

pub fn summary(summary: &PriceSummary) -> String {
    format!(
        "Items:    {:>9}\nShipping: {:>9}\nTax:      {:>9}\nTotal:    {:>9}\n",
        summary.items_price, summary.shipping_price, summary.tax_price, summary.total_price
    )
}

pub fn checkout(step: CheckoutStep, price_summary: &PriceSummary) -> String {
    format!("Next step: {}\n{}", step, summary(price_summary))
}

pub fn order(draft: &OrderDraft) -> String {
    format!(
        "Order ready for {} ({} lines, {})\nShip to: {}\n{}",
        draft.user_id,
        draft.items.len(),
        draft.payment_method,
        draft.shipping_address.one_line(),
        summary(&draft.summary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_config::PricingConfig;
    use storefront_state::domain_models::{CartItem, PaymentMethod, Product};

    #[test]
    fn test_empty_cart() {
        assert_eq!(cart(&CartState::default()), "Cart is empty\n");
        assert_eq!(wishlist(&WishlistState::default()), "Wishlist is empty\n");
    }

    #[test]
    fn test_cart_lists_lines_and_payment() {
        let mut state = CartState::default();
        state.items.push(CartItem::from_product(
            &Product::new("p1", "Mouse", Decimal::new(1999, 2)).with_stock(5),
            2,
        ));
        state.payment_method = Some(PaymentMethod::Stripe);

        let out = cart(&state);
        assert!(out.starts_with("Cart (2 items):"));
        assert!(out.contains("Mouse"));
        assert!(out.contains("39.98"));
        assert!(out.contains("Subtotal: 39.98"));
        assert!(out.contains("Payment: Stripe"));
    }

    #[test]
    fn test_checkout_shows_step_and_total() {
        let out = checkout(
            CheckoutStep::Payment,
            &PriceSummary::compute(&[], &PricingConfig::default()),
        );
        assert!(out.starts_with("Next step: Payment"));
        assert!(out.contains("Total:"));
    }
}
