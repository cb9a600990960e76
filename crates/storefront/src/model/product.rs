//! Represents a purchasable product in the catalog.
//!
//! # Actor Framework
//! Products are never actors themselves. They live inside the
//! [`Catalog`](crate::model::Catalog) state, which implements
//! [`ActorState`](storefront_actor::ActorState) and is served by the catalog actor.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Opaque and case-sensitive; serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Flat unit price, never negative.
    pub price: Decimal,
    /// Three-letter ISO 4217 code, e.g. `EUR`.
    pub currency: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `currency` - ISO 4217 code
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_serializes_price_as_number() {
        let product = Product::new("p1", "T-shirt", dec!(25), "EUR");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "p1");
        assert_eq!(json["name"], "T-shirt");
        assert_eq!(json["price"], 25.0);
        assert_eq!(json["currency"], "EUR");
    }

    #[test]
    fn test_product_id_is_case_sensitive() {
        assert_ne!(ProductId::from("p1"), ProductId::from("P1"));
        assert_eq!(ProductId::from("p1").to_string(), "p1");
    }
}
