//! [`ActorState`] implementation for [`Catalog`].

use async_trait::async_trait;
use storefront_actor::ActorState;

use super::actions::{CatalogAction, CatalogQuery, CatalogQueryResult};
use super::error::CatalogError;
use crate::model::Catalog;

#[async_trait]
impl ActorState for Catalog {
    type Query = CatalogQuery;
    type QueryResult = CatalogQueryResult;
    type Action = CatalogAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn handle_query(&self, query: CatalogQuery) -> Result<CatalogQueryResult, CatalogError> {
        match query {
            CatalogQuery::ListAll => Ok(CatalogQueryResult::ListAll(self.list_all().to_vec())),
            CatalogQuery::GetById(id) => self.get_by_id(&id).cloned().map(CatalogQueryResult::GetById),
        }
    }

    async fn handle_action(&mut self, action: CatalogAction, _ctx: &()) -> Result<(), CatalogError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_products;

    #[test]
    fn test_queries_answer_from_the_catalog() {
        let catalog = Catalog::new(default_products()).unwrap();

        match catalog.handle_query(CatalogQuery::ListAll).unwrap() {
            CatalogQueryResult::ListAll(products) => assert_eq!(products.len(), 3),
            other => panic!("Unexpected result: {other:?}"),
        }
        match catalog.handle_query(CatalogQuery::GetById("p3".into())).unwrap() {
            CatalogQueryResult::GetById(product) => assert_eq!(product.name, "Cap"),
            other => panic!("Unexpected result: {other:?}"),
        }
        assert_eq!(
            catalog.handle_query(CatalogQuery::GetById("P3".into())).unwrap_err(),
            CatalogError::NotFound("P3".into())
        );
    }

    #[test]
    fn test_catalog_accepts_no_actions() {
        // Uninhabited: there is no value to send
        assert_eq!(std::mem::size_of::<CatalogAction>(), 0);
    }
}
