//! Cart line model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};
use crate::error::CartError;

/// One line of the cart
///
/// A cart holds at most one line per product. `count_in_stock` is the
/// stock level seen when the product was added; it is never re-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: Decimal,
    #[serde(default)]
    pub brand: String,
    pub quantity: u32,
    #[serde(default)]
    pub count_in_stock: u32,
}

impl CartItem {
    /// Build a cart line for `product` with the fully resolved target quantity
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            brand: product.brand.clone(),
            quantity,
            count_in_stock: product.count_in_stock,
        }
    }

    /// Price of the line (unit price times quantity)
    ///
    /// Saturates at the decimal bounds instead of overflowing.
    pub fn line_price(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Saturating sum of the line prices of `items`
    pub fn sum_line_prices(items: &[CartItem]) -> Decimal {
        items
            .iter()
            .map(CartItem::line_price)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Check a target quantity before handing it to the cart
///
/// The cart itself accepts any quantity; callers are expected to run this
/// first.
pub fn validate_quantity(product: &Product, quantity: u32) -> Result<(), CartError> {
    if quantity == 0 {
        return Err(CartError::ZeroQuantity {
            product_id: product.id.clone(),
        });
    }
    if quantity > product.count_in_stock {
        return Err(CartError::ExceedsStock {
            product_id: product.id.clone(),
            requested: quantity,
            available: product.count_in_stock,
        });
    }
    Ok(())
}
