//! # Cart Actor
//!
//! Owns the session [`Cart`] and performs checkout.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](storefront_actor::ActorState) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartQuery`], [`CartAction`] and their results
//! - [`new()`] - Factory function that creates the actor and its clients
//!
//! ## Dependencies
//!
//! The actor's context is an [`OrderComposer`](crate::composer::OrderComposer), which in
//! turn holds the catalog lookup. Start it with `actor.run(composer)`.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::cart_actor;
//! use storefront::composer::OrderComposer;
//! use storefront::model::{default_products, Catalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A bare catalog is enough to price orders
//!     let composer = OrderComposer::new(Arc::new(Catalog::new(default_products())?));
//!
//!     let (actor, cart_client, order_client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(composer));
//!
//!     cart_client.add("p1".into()).await?;
//!     let order = order_client.create_order().await?;
//!     assert_eq!(order.items().len(), 1);
//!     assert!(cart_client.items().await?.is_empty());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CartClient, OrderClient};
use crate::model::Cart;
use storefront_actor::StateActor;

/// Creates a new, empty Cart actor plus the cart and order clients that talk to it.
pub fn new(buffer_size: usize) -> (StateActor<Cart>, CartClient, OrderClient) {
    let (actor, client) = StateActor::new(Cart::new(), buffer_size);
    (actor, CartClient::new(client.clone()), OrderClient::new(client))
}
