//! # ActorClient Trait
//!
//! Common interface for domain-specific client wrappers around a [`StateClient`],
//! with a default `snapshot` built on top of it.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients that wrap a generic [`StateClient`].
///
/// Implementors pick their own error type and say how framework errors turn into it,
/// usually by recovering the state's error with [`FrameworkError::downcast_state`].
///
/// # Example
///
/// ```rust
/// use storefront_actor::{ActorClient, ActorState, FrameworkError, StateClient};
/// use async_trait::async_trait;
///
/// // 1. Define State
/// #[derive(Clone, Debug, Default)]
/// struct Shelf { items: Vec<String> }
/// #[derive(Debug)] enum ShelfQuery { Count }
/// #[derive(Debug)] enum ShelfAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum ShelfError {
///     #[error("actor unreachable: {0}")]
///     Unreachable(String),
/// }
///
/// #[async_trait]
/// impl ActorState for Shelf {
///     type Query = ShelfQuery;
///     type QueryResult = usize;
///     type Action = ShelfAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ShelfError;
///
///     fn handle_query(&self, _: ShelfQuery) -> Result<usize, ShelfError> { Ok(self.items.len()) }
///     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), ShelfError> { Ok(()) }
/// }
///
/// // 2. Define Client Wrapper
/// struct ShelfClient {
///     inner: StateClient<Shelf>,
/// }
///
/// // 3. Implement ActorClient
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///
///     fn inner(&self) -> &StateClient<Shelf> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.downcast_state::<ShelfError>()
///             .unwrap_or_else(|other| ShelfError::Unreachable(other.to_string()))
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: ShelfClient) {
///     // snapshot() is provided automatically!
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the whole state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
