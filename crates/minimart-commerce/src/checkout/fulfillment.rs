//! Fulfillment types.

use serde::{Deserialize, Serialize};

/// A delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeliveryAddress {
    /// Street name.
    pub street: String,
    /// House number, kept as text ("12a" is a valid number).
    pub house_number: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
}

impl DeliveryAddress {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        house_number: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            house_number: house_number.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    /// Format as a single line: `street houseNumber, postalCode city`.
    pub fn one_line(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.street, self.house_number, self.postal_code, self.city
        )
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.street.is_empty()
            && !self.house_number.is_empty()
            && !self.postal_code.is_empty()
            && !self.city.is_empty()
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Fulfillment {
    /// Customer picks the order up at the store.
    Pickup,
    /// Order is delivered to the given address.
    Delivery(DeliveryAddress),
}

impl Fulfillment {
    /// Check if this is a delivery.
    pub fn is_delivery(&self) -> bool {
        matches!(self, Fulfillment::Delivery(_))
    }
}
