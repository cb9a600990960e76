use tracing::{info, instrument};

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::composer::OrderError;
use crate::model::{Cart, Order};
use storefront_actor::{ActorClient, FrameworkError, StateClient};

/// Client for creating orders.
///
/// Orders are not an actor of their own: creating one is the cart actor's
/// `Checkout` action, so this client talks to the cart.
#[derive(Clone)]
pub struct OrderClient {
    inner: StateClient<Cart>,
}

impl OrderClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }

    /// Composes an order from the current cart and empties the cart.
    ///
    /// On error the cart is left exactly as it was.
    #[instrument(skip(self))]
    pub async fn create_order(&self) -> Result<Order, OrderError> {
        info!("Sending checkout to cart actor");
        match self.inner.perform_action(CartAction::Checkout).await {
            Ok(CartActionResult::Checkout(order)) => Ok(order),
            Ok(_) => unreachable!("Checkout action must return Checkout result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

impl ActorClient<Cart> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_state::<CartError>() {
            Ok(CartError::Checkout(order_error)) => order_error,
            Ok(other) => OrderError::ActorCommunicationError(other.to_string()),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
