//! # Storefront Actor
//!
//! Building blocks for actor-owned state on top of Tokio. Each actor owns exactly one
//! value (a catalog, a cart) and serves it from a mailbox, one request at a time.
//!
//! ## Why one actor per piece of state?
//!
//! - Isolated state: no shared memory, no locks
//! - Message-passing concurrency between actors
//! - Sequential processing inside an actor turns every action into a critical section
//!
//! The last point matters most for a storefront: "read the cart, price it, then empty
//! it" is a single action, so two concurrent checkouts can never both consume the same
//! items and an `add` can never slip in between pricing and clearing.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - Your business logic and domain model
//! 2. **Runtime Layer** ([`StateActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Core Abstractions
//!
//! ### [`ActorState`] - The Business Logic
//!
//! ```rust
//! use storefront_actor::{ActorState, StateActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Wishlist { items: Vec<String> }
//!
//! #[derive(Debug)] enum WishlistQuery { Len }
//! #[derive(Debug)] enum WishlistAction { Add(String) }
//! #[derive(Debug, thiserror::Error)]
//! enum WishlistError {
//!     #[error("already listed: {0}")]
//!     Duplicate(String),
//! }
//!
//! #[async_trait]
//! impl ActorState for Wishlist {
//!     type Query = WishlistQuery;
//!     type QueryResult = usize;
//!     type Action = WishlistAction;
//!     type ActionResult = usize;
//!     type Context = ();
//!     type Error = WishlistError;
//!
//!     fn handle_query(&self, _: WishlistQuery) -> Result<usize, WishlistError> {
//!         Ok(self.items.len())
//!     }
//!
//!     async fn handle_action(&mut self, action: WishlistAction, _: &()) -> Result<usize, WishlistError> {
//!         let WishlistAction::Add(item) = action;
//!         if self.items.contains(&item) {
//!             return Err(WishlistError::Duplicate(item));
//!         }
//!         self.items.push(item);
//!         Ok(self.items.len())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StateActor::new(Wishlist::default(), 10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.perform_action(WishlistAction::Add("lamp".into())).await.unwrap();
//!     let err = client.perform_action(WishlistAction::Add("lamp".into())).await.unwrap_err();
//!
//!     // Domain errors come back typed
//!     assert!(matches!(err.downcast_state::<WishlistError>(), Ok(WishlistError::Duplicate(_))));
//!     assert_eq!(client.query(WishlistQuery::Len).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! Create every actor first, then start each one with the clients it needs:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = StateActor::new(catalog, 32);
//! let (cart_actor, cart_client) = StateActor::new(Cart::new(), 32);
//!
//! tokio::spawn(catalog_actor.run(()));
//! // The cart checks out through a composer that looks products up in the catalog
//! tokio::spawn(cart_actor.run(OrderComposer::new(Arc::new(catalog_client))));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - An actor stops when the last client is dropped
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`StateClient`] answered from canned
//! expectations, so an actor's dependencies can be replaced without spawning them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod telemetry;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
pub use telemetry::setup_tracing;
