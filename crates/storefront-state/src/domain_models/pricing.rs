//! Checkout price summary
//!
//! Prices are derived from the cart lines and the configured pricing rules:
//!
//! - items: sum of unit price times quantity
//! - shipping: free when the items price is strictly above the threshold (or
//!   the cart is empty), otherwise the flat fee
//! - tax: items price times the tax rate
//!
//! Every component is rounded to cents, half away from zero. Amounts beyond
//! the decimal range saturate instead of overflowing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use storefront_config::PricingConfig;

use super::CartItem;

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
}

impl PriceSummary {
    pub fn compute(items: &[CartItem], pricing: &PricingConfig) -> Self {
        let items_price = to_cents(CartItem::sum_line_prices(items));

        let free_shipping = items.is_empty() || items_price > pricing.free_shipping_threshold;
        let shipping_price = if free_shipping {
            Decimal::ZERO
        } else {
            to_cents(pricing.shipping_fee)
        };

        let tax_price = to_cents(items_price.saturating_mul(pricing.tax_rate));
        let total_price = items_price
            .saturating_add(shipping_price)
            .saturating_add(tax_price);

        Self {
            items_price,
            shipping_price,
            tax_price,
            total_price,
        }
    }
}
