//! # Generic Actor Server
//!
//! This module defines the `StateActor`, which owns one [`ActorState`] value and
//! serves snapshots, queries and actions against it from a bounded mailbox.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single piece of state.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state and the receiving
/// end of the mailbox. Requests are handled strictly one after another, so the state
/// needs no `Mutex` or `RwLock`: exclusive ownership inside the task is the lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(state, buffer)` returns the actor and a client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use storefront_actor::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { count: u32 }
/// #[derive(Debug)] enum TallyQuery { Count }
/// #[derive(Debug)] enum TallyAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl ActorState for Tally {
///     type Query = TallyQuery;
///     type QueryResult = u32;
///     type Action = TallyAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = TallyError;
///
///     fn handle_query(&self, _: TallyQuery) -> Result<u32, TallyError> { Ok(self.count) }
///     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<u32, TallyError> {
///         self.count += 1;
///         Ok(self.count)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Tally::default(), 8);
///     tokio::spawn(actor.run(()));
///
///     client.perform_action(TallyAction::Bump).await.unwrap();
///     assert_eq!(client.query(TallyQuery::Count).await.unwrap(), 1);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state`, plus the client that talks to it.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait for room.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is lent to every [`ActorState::handle_action`] call and dropped
    /// when the loop ends, which in turn releases any clients it holds.
    pub async fn run(mut self, context: S::Context) {
        // Just the type name ("Cart" rather than "storefront::model::cart::Cart")
        let actor = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(actor, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(actor, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Query { query, respond_to } => {
                    debug!(actor, ?query, "Query");
                    let result = self
                        .state
                        .handle_query(query)
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    if let Err(e) = &result {
                        debug!(actor, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(actor, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(actor, "Action ok"),
                        Err(e) => warn!(actor, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(actor, "Shutdown");
    }
}
