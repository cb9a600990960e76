//! [`ActorState`] implementation for [`Cart`].
//!
//! `Checkout` runs entirely inside one action, so reading the lines, pricing them
//! and clearing the cart happen without any other cart request in between.

use async_trait::async_trait;
use storefront_actor::ActorState;

use super::actions::{CartAction, CartActionResult, CartQuery, CartQueryResult};
use super::error::CartError;
use crate::composer::OrderComposer;
use crate::model::Cart;

#[async_trait]
impl ActorState for Cart {
    type Query = CartQuery;
    type QueryResult = CartQueryResult;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = OrderComposer;
    type Error = CartError;

    fn handle_query(&self, query: CartQuery) -> Result<CartQueryResult, CartError> {
        match query {
            CartQuery::Items => Ok(CartQueryResult::Items(self.items().to_vec())),
            CartQuery::TotalQuantity => Ok(CartQueryResult::TotalQuantity(self.total_quantity())),
        }
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        composer: &OrderComposer,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add(product_id) => Ok(CartActionResult::Add(self.add(product_id).to_vec())),
            CartAction::Clear => Ok(CartActionResult::Clear(self.clear().to_vec())),
            CartAction::Checkout => {
                let order = composer.compose(self.items()).await?;
                // Only a composed order empties the cart
                self.clear();
                Ok(CartActionResult::Checkout(order))
            }
        }
    }
}
