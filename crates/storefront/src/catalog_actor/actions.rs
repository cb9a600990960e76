//! Read-only requests for the Catalog actor.
//!
//! The catalog never changes after start-up, so it only answers queries.
//! They are handled by [`ActorState::handle_query`](storefront_actor::ActorState::handle_query).
//! [`CatalogAction`] has no variants, so no mutation can ever be sent.

use crate::model::{Product, ProductId};

/// Queries answered by the catalog.
#[derive(Debug, Clone)]
pub enum CatalogQuery {
    /// Every product, in catalog order.
    ListAll,
    /// One product by exact id.
    ///
    /// # Errors
    /// Fails with [`CatalogError::NotFound`](super::CatalogError::NotFound) for unknown ids.
    GetById(ProductId),
}

/// Results from CatalogQuery - variants match 1:1 with CatalogQuery
#[derive(Debug, Clone)]
pub enum CatalogQueryResult {
    ListAll(Vec<Product>),
    GetById(Product),
}

/// Mutations accepted by the catalog: none.
#[derive(Debug, Clone)]
pub enum CatalogAction {}
