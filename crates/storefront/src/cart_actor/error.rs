//! Error types for the Cart actor.

use thiserror::Error;

use crate::composer::OrderError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Checkout failed; the cart was left untouched.
    #[error(transparent)]
    Checkout(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
