//! # Order Composer
//!
//! Turns cart lines into a priced [`Order`].
//!
//! The composer is not an actor. It is the cart actor's injected context, so it runs
//! inside the cart's `Checkout` action: between reading the items and clearing them,
//! no other cart request can be processed.
//!
//! ```rust,ignore
//! let composer = OrderComposer::new(Arc::new(catalog_client))
//!     .with_id_prefix("web")
//!     .with_currency_policy(CurrencyPolicy::RejectMixed);
//!
//! tokio::spawn(cart_actor.run(composer));
//! ```

mod error;
mod ids;
mod lookup;

pub use error::*;
pub use ids::*;
pub use lookup::*;

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog_actor::CatalogError;
use crate::model::{CartItem, Order, OrderLineItem};

/// What to do when cart lines are priced in different currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurrencyPolicy {
    /// Sum the prices as-is and label the order with the first line's currency.
    #[default]
    FirstItem,
    /// Refuse the order with [`OrderError::MixedCurrency`].
    RejectMixed,
}

impl std::str::FromStr for CurrencyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-item" => Ok(CurrencyPolicy::FirstItem),
            "reject-mixed" => Ok(CurrencyPolicy::RejectMixed),
            other => Err(format!(
                "unknown currency policy {other:?}, expected \"first-item\" or \"reject-mixed\""
            )),
        }
    }
}

/// Prices cart lines against the catalog and stamps the result with a fresh id.
pub struct OrderComposer {
    catalog: Arc<dyn ProductLookup>,
    ids: OrderIdGenerator,
    currency_policy: CurrencyPolicy,
}

impl OrderComposer {
    pub fn new(catalog: Arc<dyn ProductLookup>) -> Self {
        Self {
            catalog,
            ids: OrderIdGenerator::default(),
            currency_policy: CurrencyPolicy::default(),
        }
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ids = OrderIdGenerator::new(prefix);
        self
    }

    pub fn with_currency_policy(mut self, policy: CurrencyPolicy) -> Self {
        self.currency_policy = policy;
        self
    }

    /// Builds an order from `items`, in their order.
    ///
    /// Touches nothing but the id sequence: clearing the cart is the caller's job,
    /// and only after this returns `Ok`.
    ///
    /// # Errors
    /// - [`OrderError::EmptyCart`] when `items` is empty
    /// - [`OrderError::UnknownProduct`] when a line's product is not in the catalog
    /// - [`OrderError::MixedCurrency`] under [`CurrencyPolicy::RejectMixed`]
    /// - [`OrderError::TotalOverflow`] when a line or the running total exceeds [`Decimal::MAX`]
    /// - [`OrderError::CatalogUnavailable`] when the catalog cannot be reached
    pub async fn compose(&self, items: &[CartItem]) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut lines = Vec::with_capacity(items.len());
        let mut total = Decimal::ZERO;

        for item in items {
            let product = self
                .catalog
                .lookup(&item.product_id)
                .await
                .map_err(|e| match e {
                    CatalogError::NotFound(id) => OrderError::UnknownProduct(id),
                    other => OrderError::CatalogUnavailable(other.to_string()),
                })?;

            let line = OrderLineItem::snapshot(&product, item.quantity);
            total = line
                .line_total()
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or_else(|| OrderError::TotalOverflow(line.product_id.clone()))?;
            lines.push(line);
        }

        let currency = lines[0].currency.clone();
        if let Some(odd) = lines.iter().find(|l| l.currency != currency) {
            match self.currency_policy {
                CurrencyPolicy::FirstItem => {
                    warn!(expected = %currency, found = %odd.currency, "Mixed currencies summed without conversion");
                }
                CurrencyPolicy::RejectMixed => {
                    warn!(expected = %currency, found = %odd.currency, "Mixed currencies rejected");
                    return Err(OrderError::MixedCurrency {
                        expected: currency,
                        found: odd.currency.clone(),
                        product_id: odd.product_id.clone(),
                    });
                }
            }
        }

        let order = Order::new(self.ids.next_id(), lines, total, currency, Utc::now());
        info!(
            order_id = %order.order_id(),
            lines = order.items().len(),
            total = %order.total(),
            currency = order.currency(),
            "Order composed"
        );
        Ok(order)
    }
}
