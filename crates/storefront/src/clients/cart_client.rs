//! # Cart Client
//!
//! High-level API for the Cart actor's item operations. Checkout lives on
//! [`OrderClient`](super::OrderClient).
use crate::cart_actor::{CartAction, CartActionResult, CartError, CartQuery, CartQueryResult};
use crate::model::{Cart, CartItem, ProductId};
use storefront_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.query(CartQuery::Items).await {
            Ok(CartQueryResult::Items(items)) => Ok(items),
            Ok(_) => unreachable!("Items query must return Items result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Badge count: the sum of all quantities.
    #[instrument(skip(self))]
    pub async fn total_quantity(&self) -> Result<u64, CartError> {
        debug!("Sending request");
        match self.inner.query(CartQuery::TotalQuantity).await {
            Ok(CartQueryResult::TotalQuantity(n)) => Ok(n),
            Ok(_) => unreachable!("TotalQuantity query must return TotalQuantity result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Adds one unit of `product_id` and returns the updated items.
    #[instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Add(product_id)).await {
            Ok(CartActionResult::Add(items)) => Ok(items),
            Ok(_) => unreachable!("Add action must return Add result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Clear).await {
            Ok(CartActionResult::Clear(items)) => Ok(items),
            Ok(_) => unreachable!("Clear action must return Clear result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_state::<CartError>()
            .unwrap_or_else(|other| CartError::ActorCommunicationError(other.to_string()))
    }
}
