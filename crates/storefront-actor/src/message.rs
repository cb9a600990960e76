//! # Generic Messages
//!
//! Message types exchanged between a [`StateClient`](crate::StateClient) and its
//! [`StateActor`](crate::StateActor).

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor's mailbox.
///
/// The variants follow the three access modes of [`ActorState`]:
///
/// - **Snapshot**: clone of the full state.
/// - **Query**: read-only [`ActorState::Query`].
/// - **Action**: mutating [`ActorState::Action`].
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Snapshot {
        respond_to: Response<S>,
    },
    Query {
        query: S::Query,
        respond_to: Response<S::QueryResult>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}
