use serde::{Deserialize, Serialize};

use super::ProductId;

/// One line in the cart. The product is not checked against the catalog until checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The session cart: product ids with quantities, in the order they were first added.
///
/// At most one [`CartItem`] exists per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product_id` and returns the updated items.
    ///
    /// A repeated add bumps the existing line in place, keeping its position.
    pub fn add(&mut self, product_id: ProductId) -> &[CartItem] {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product_id,
                quantity: 1,
            }),
        }
        &self.items
    }

    pub fn clear(&mut self) -> &[CartItem] {
        self.items.clear();
        &self.items
    }

    /// Sum of all quantities (the badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
