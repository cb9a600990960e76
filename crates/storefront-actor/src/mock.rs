//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`StateClient<S>`] whose requests are answered from a
//! queue of expectations instead of by a running actor. Anything that consumes a
//! `StateClient` (a domain client wrapper, or another actor's context) can be tested
//! against it without spawning the real dependency.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Client Logic Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use storefront_actor::mock::MockClient;
//! use storefront_actor::ActorState;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Shelf { items: Vec<String> }
//! #[derive(Debug)] enum ShelfQuery { Count }
//! #[derive(Debug)] enum ShelfAction { Stock(String) }
//! #[derive(Debug, thiserror::Error)] #[error("Shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorState for Shelf {
//!     type Query = ShelfQuery; type QueryResult = usize;
//!     type Action = ShelfAction; type ActionResult = usize;
//!     type Context = (); type Error = ShelfError;
//!     fn handle_query(&self, _: ShelfQuery) -> Result<usize, ShelfError> { Ok(self.items.len()) }
//!     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<usize, ShelfError> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     mock.expect_query().return_ok(3);
//!
//!     let count = mock.client().query(ShelfQuery::Count).await.unwrap();
//!     assert_eq!(count, 3);
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Actor with Mocked Dependencies (Sweet Spot)</b></summary>
//!
//! Run the real actor under test and inject a `MockClient` as (part of) its context.
//! See `tests/cart_actor_test.rs` in the storefront crate for the cart actor checked
//! out against a mocked catalog.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full System Integration Test</b></summary>
//!
//! Start every actor for real and drive the system through its clients. See
//! `tests/integration_test.rs` in the storefront crate.
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! Failures that are hard to provoke with real actors are one expectation away:
//!
//! ```rust
//! use storefront_actor::mock::MockClient;
//! use storefront_actor::{ActorState, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Shelf;
//! #[derive(Debug)] enum ShelfQuery { Count }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorState for Shelf {
//!     type Query = ShelfQuery; type QueryResult = usize;
//!     type Action = (); type ActionResult = ();
//!     type Context = (); type Error = ShelfError;
//!     fn handle_query(&self, _: ShelfQuery) -> Result<usize, ShelfError> { Ok(0) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_query().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.query(ShelfQuery::Count).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or the fluent
//! [`MockClient`] API.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::{Response, StateRequest};
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer to give it.
enum Expectation<S: ActorState> {
    Snapshot {
        response: Result<S, FrameworkError>,
    },
    Query {
        response: Result<S::QueryResult, FrameworkError>,
    },
    Action {
        response: Result<S::ActionResult, FrameworkError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request whose kind does not match the next
/// expectation (or that arrives when none is left) panics the mock task, so the
/// caller sees [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Catalog>::new();
/// mock.expect_query().return_ok(CatalogQueryResult::GetById(product));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Query { respond_to, .. }, Some(Expectation::Query { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Action { respond_to, .. }, Some(Expectation::Action { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S, S> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Snapshot { response }
        })
    }

    /// Expects a `query` request.
    pub fn expect_query(&mut self) -> ExpectationBuilder<S, S::QueryResult> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Query { response }
        })
    }

    /// Expects a `perform_action` request.
    pub fn expect_action(&mut self) -> ExpectationBuilder<S, S::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Action { response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that records the answer for one expected request.
pub struct ExpectationBuilder<S: ActorState, T> {
    expectations: Expectations<S>,
    wrap: fn(Result<T, FrameworkError>) -> Expectation<S>,
}

impl<S: ActorState, T> ExpectationBuilder<S, T> {
    fn new(
        expectations: Expectations<S>,
        wrap: fn(Result<T, FrameworkError>) -> Expectation<S>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(response));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its mailbox.
///
/// # Testing Strategy
/// Instead of queueing answers up front, the test plays the actor itself: it pulls
/// each request off `receiver`, asserts on it, and answers through `respond_to`.
/// Useful when the answer depends on the request payload.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Query, Response<S::QueryResult>)> {
    match receiver.recv().await {
        Some(StateRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Action, Response<S::ActionResult>)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        items: Vec<String>,
    }

    #[derive(Debug)]
    enum ShelfQuery {
        Count,
    }

    #[derive(Debug)]
    enum ShelfAction {
        Stock(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorState for Shelf {
        type Query = ShelfQuery;
        type QueryResult = usize;
        type Action = ShelfAction;
        type ActionResult = usize;
        type Context = ();
        type Error = ShelfError;

        fn handle_query(&self, _query: ShelfQuery) -> Result<usize, ShelfError> {
            Ok(self.items.len())
        }

        async fn handle_action(
            &mut self,
            action: ShelfAction,
            _ctx: &Self::Context,
        ) -> Result<usize, ShelfError> {
            let ShelfAction::Stock(item) = action;
            self.items.push(item);
            Ok(self.items.len())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let action_task =
            tokio::spawn(async move { client.perform_action(ShelfAction::Stock("mug".into())).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, ShelfAction::Stock(ref item) if item == "mug"));
        responder.send(Ok(1)).unwrap();

        let result = action_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();

        mock.expect_snapshot().return_ok(Shelf {
            items: vec!["mug".into()],
        });
        mock.expect_query().return_ok(1);
        mock.expect_action().return_err(FrameworkError::StateError(Box::new(ShelfError)));

        let client = mock.client();

        let shelf = client.snapshot().await.unwrap();
        assert_eq!(shelf.items, vec!["mug".to_string()]);

        assert_eq!(client.query(ShelfQuery::Count).await.unwrap(), 1);

        let err = client
            .perform_action(ShelfAction::Stock("cup".into()))
            .await
            .unwrap_err();
        assert!(err.downcast_state::<ShelfError>().is_ok());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_response() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_query().return_ok(0);

        let result = mock.client().snapshot().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
