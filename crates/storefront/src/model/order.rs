use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::{Product, ProductId};

/// Type-safe identifier for Orders, e.g. `order_1760875200000_1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as it was priced when the order was composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
    pub quantity: u32,
}

impl OrderLineItem {
    /// Copies the product's fields by value, so later catalog changes cannot alter the order.
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            currency: product.currency.clone(),
            quantity,
        }
    }

    /// `price * quantity`, or `None` when the product does not fit in a [`Decimal`].
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A composed order. Immutable once built; only the composer can create one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    items: Vec<OrderLineItem>,
    total: Decimal,
    currency: String,
    created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        order_id: OrderId,
        items: Vec<OrderLineItem>,
        total: Decimal,
        currency: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            items,
            total,
            currency,
            created_at,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_snapshot() {
        let product = Product::new("p1", "T-shirt", dec!(25), "EUR");
        let line = OrderLineItem::snapshot(&product, 3);

        assert_eq!(line.product_id, product.id);
        assert_eq!(line.name, "T-shirt");
        assert_eq!(line.line_total(), Some(dec!(75)));
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let product = Product::new("big", "Yacht", Decimal::MAX, "EUR");
        let line = OrderLineItem::snapshot(&product, 2);

        assert_eq!(line.line_total(), None);
    }

    #[test]
    fn test_order_json_shape() {
        let product = Product::new("p1", "T-shirt", dec!(25), "EUR");
        let order = Order::new(
            OrderId::from("order_1_1".to_string()),
            vec![OrderLineItem::snapshot(&product, 2)],
            dec!(50),
            "EUR".to_string(),
            DateTime::from_timestamp(0, 0).unwrap(),
        );
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["orderId"], "order_1_1");
        assert_eq!(json["total"], 50.0);
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["items"][0]["productId"], "p1");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
