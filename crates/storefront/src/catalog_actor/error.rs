//! Error types for the Catalog actor.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product is not in the catalog.
    #[error("Product with ID \"{0}\" not found")]
    NotFound(ProductId),

    /// Two products share an id.
    #[error("Duplicate product ID \"{0}\"")]
    DuplicateId(ProductId),

    /// A product has a negative price.
    #[error("Product \"{id}\" has a negative price: {price}")]
    InvalidPrice { id: ProductId, price: Decimal },

    /// A product's currency is not a three-letter uppercase code.
    #[error("Product \"{id}\" has an invalid currency code: {currency:?}")]
    InvalidCurrency { id: ProductId, currency: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
