//! Queries and actions for the Cart actor.
//!
//! Queries are answered by [`ActorState::handle_query`](storefront_actor::ActorState::handle_query),
//! actions by [`ActorState::handle_action`](storefront_actor::ActorState::handle_action).

use crate::model::{CartItem, Order, ProductId};

/// Read-only cart requests.
#[derive(Debug, Clone)]
pub enum CartQuery {
    /// Current lines, in insertion order.
    Items,
    /// Sum of all quantities.
    TotalQuantity,
}

/// Results from CartQuery - variants match 1:1 with CartQuery
#[derive(Debug, Clone)]
pub enum CartQueryResult {
    Items(Vec<CartItem>),
    TotalQuantity(u64),
}

/// Mutating cart requests.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of a product. The id is not checked against the catalog.
    Add(ProductId),
    /// Empties the cart.
    Clear,
    /// Composes an order from the current lines and empties the cart.
    ///
    /// # Errors
    /// Fails with [`CartError::Checkout`](super::CartError::Checkout) and leaves the
    /// cart unchanged when composition fails.
    Checkout,
}

/// Results from CartAction - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    Add(Vec<CartItem>),
    Clear(Vec<CartItem>),
    Checkout(Order),
}
