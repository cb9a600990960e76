//! # Catalog Actor
//!
//! Serves the read-only product [`Catalog`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](storefront_actor::ActorState) implementation for [`Catalog`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`actions`] - [`CatalogQuery`], [`CatalogQueryResult`] and the empty [`CatalogAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::catalog_actor;
//! use storefront::clients::CatalogClient;
//! use storefront::model::{default_products, Catalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::new(default_products())?;
//!     let (actor, client) = catalog_actor::new(catalog, 32);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let hoodie = client.get_by_id(&"p2".into()).await?;
//!     assert_eq!(hoodie.name, "Hoodie");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Catalog;
use storefront_actor::StateActor;

/// Creates a new Catalog actor and its client.
pub fn new(catalog: Catalog, buffer_size: usize) -> (StateActor<Catalog>, CatalogClient) {
    let (actor, client) = StateActor::new(catalog, buffer_size);
    (actor, CatalogClient::new(client))
}
