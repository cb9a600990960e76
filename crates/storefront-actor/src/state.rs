//! # ActorState Trait
//!
//! The contract a piece of state must satisfy to be owned by a [`StateActor`](crate::StateActor).
//!
//! An actor owns exactly one value (a cart, a catalog, ...) and is the only task that
//! ever touches it. Callers interact with it through three kinds of requests:
//!
//! - **Snapshot**: a clone of the whole state.
//! - **Query**: a read-only question answered from `&self`.
//! - **Action**: a mutation, which may await other actors through the injected `Context`.
//!
//! Because the actor handles one request at a time, every action is a critical section:
//! nothing else can observe or change the state between the first and the last line
//! of [`ActorState::handle_action`], even across `.await` points.

use async_trait::async_trait;
use std::fmt::Debug;

/// State that can be owned and served by a [`StateActor`](crate::StateActor).
///
/// # Async & Context
/// `handle_action` is async so an action can call other actors. Those dependencies
/// arrive through `Context`, which is handed to [`StateActor::run`](crate::StateActor::run)
/// rather than to the constructor. Use `()` when the state needs nothing.
#[async_trait]
pub trait ActorState: Clone + Send + Sync + 'static {
    /// Read-only requests (e.g. `GetById`).
    type Query: Send + Sync + Debug;

    /// Answers to [`ActorState::Query`].
    type QueryResult: Send + Sync + Debug;

    /// Mutating requests (e.g. `Add`, `Checkout`).
    type Action: Send + Sync + Debug;

    /// Answers to [`ActorState::Action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected when the actor starts running.
    type Context: Send + Sync;

    /// One error enum for the whole state, shared by queries and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Answer a query without modifying the state.
    fn handle_query(&self, query: Self::Query) -> Result<Self::QueryResult, Self::Error>;

    /// Apply an action. A failed action must leave the state as it found it.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
