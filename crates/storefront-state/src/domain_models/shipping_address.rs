//! Shipping address model

use serde::{Deserialize, Serialize};

/// Where an order ships to
///
/// All fields are free-form; the only check applied anywhere is that none
/// of them is blank (see [`ShippingAddress::is_complete`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn new(
        full_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            address: address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    /// True when every field has non-whitespace content
    pub fn is_complete(&self) -> bool {
        [
            &self.full_name,
            &self.address,
            &self.city,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Single-line form, e.g. "Jane Doe, 1 Main St, Springfield 12345, US"
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.full_name, self.address, self.city, self.postal_code, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        let address = ShippingAddress::new("Jane Doe", "1 Main St", "Springfield", "12345", "US");
        assert!(address.is_complete());
        assert_eq!(address.one_line(), "Jane Doe, 1 Main St, Springfield 12345, US");

        let blank_city = ShippingAddress {
            city: "   ".to_string(),
            ..address
        };
        assert!(!blank_city.is_complete());
        assert!(!ShippingAddress::default().is_complete());
    }
}
