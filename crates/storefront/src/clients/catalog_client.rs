//! # Catalog Client
//!
//! Provides a high-level API for the Catalog actor.
//! It wraps a `StateClient<Catalog>` and exposes domain-specific methods.
use crate::catalog_actor::{CatalogError, CatalogQuery, CatalogQueryResult};
use crate::model::{Catalog, Product, ProductId};
use storefront_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StateClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: StateClient<Catalog>) -> Self {
        Self { inner }
    }

    /// Every product, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        match self.inner.query(CatalogQuery::ListAll).await {
            Ok(CatalogQueryResult::ListAll(products)) => Ok(products),
            Ok(_) => unreachable!("ListAll query must return ListAll result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// One product by exact id, or [`CatalogError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        debug!("Sending request");
        match self.inner.query(CatalogQuery::GetById(id.clone())).await {
            Ok(CatalogQueryResult::GetById(product)) => Ok(product),
            Ok(_) => unreachable!("GetById query must return GetById result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

impl ActorClient<Catalog> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StateClient<Catalog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_state::<CatalogError>()
            .unwrap_or_else(|other| CatalogError::ActorCommunicationError(other.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_actor::mock::{create_mock_client, expect_query, MockClient};

    #[tokio::test]
    async fn test_get_by_id_sends_query() {
        let (client, mut receiver) = create_mock_client::<Catalog>(10);
        let catalog_client = CatalogClient::new(client);

        // Spawn task to call get_by_id
        let get_task = tokio::spawn(async move { catalog_client.get_by_id(&"p1".into()).await });

        // Expect the query request
        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert!(matches!(query, CatalogQuery::GetById(ref id) if id.as_str() == "p1"));

        responder
            .send(Ok(CatalogQueryResult::GetById(Product::new(
                "p1",
                "T-shirt",
                dec!(25),
                "EUR",
            ))))
            .unwrap();

        let product = get_task.await.unwrap().unwrap();
        assert_eq!(product.name, "T-shirt");
    }

    #[tokio::test]
    async fn test_not_found_comes_back_typed() {
        let mut mock = MockClient::<Catalog>::new();
        mock.expect_query()
            .return_err(FrameworkError::StateError(Box::new(CatalogError::NotFound(
                "p9".into(),
            ))));

        let err = CatalogClient::new(mock.client())
            .get_by_id(&"p9".into())
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::NotFound("p9".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let mut mock = MockClient::<Catalog>::new();
        mock.expect_query().return_err(FrameworkError::ActorClosed);

        let err = CatalogClient::new(mock.client()).list_all().await.unwrap_err();

        assert!(matches!(err, CatalogError::ActorCommunicationError(_)));
    }
}
