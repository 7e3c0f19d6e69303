//! Payment method selection

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Payment method chosen during checkout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentMethod {
    PayPal,
    Stripe,
    CashOnDelivery,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(PaymentMethod::from_str("paypal").unwrap(), PaymentMethod::PayPal);
        assert_eq!(
            PaymentMethod::from_str("CASHONDELIVERY").unwrap(),
            PaymentMethod::CashOnDelivery
        );
        assert!(PaymentMethod::from_str("bitcoin").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::from_str(&method.to_string()).unwrap(), method);
        }
        assert_eq!(PaymentMethod::Stripe.to_string(), "Stripe");
    }
}
