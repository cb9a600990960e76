use async_trait::async_trait;

use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::model::{Catalog, Product, ProductId};

/// Resolves product ids to products for the composer.
///
/// Implemented by the actor-backed [`CatalogClient`] in production and by a bare
/// [`Catalog`] where no actor is needed.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup(&self, id: &ProductId) -> Result<Product, CatalogError>;
}

#[async_trait]
impl ProductLookup for CatalogClient {
    async fn lookup(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl ProductLookup for Catalog {
    async fn lookup(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.get_by_id(id).cloned()
    }
}
