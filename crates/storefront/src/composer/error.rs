//! Error types for order composition.

use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur while turning a cart into an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line references a product the catalog does not know.
    #[error("Product with ID \"{0}\" not found")]
    UnknownProduct(ProductId),

    /// Lines are priced in different currencies and the policy forbids summing them.
    #[error("Mixed currencies in cart: expected {expected}, found {found} for product \"{product_id}\"")]
    MixedCurrency {
        expected: String,
        found: String,
        product_id: ProductId,
    },

    /// A line total or the order total does not fit in a decimal.
    #[error("Order total overflows for product \"{0}\"")]
    TotalOverflow(ProductId),

    /// The catalog could not be reached.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// True for the precondition failures a caller can fix (empty cart, bad product,
    /// mixed currencies, an unpayable total), false for infrastructure failures.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            OrderError::EmptyCart
                | OrderError::UnknownProduct(_)
                | OrderError::MixedCurrency { .. }
                | OrderError::TotalOverflow(_)
        )
    }
}
