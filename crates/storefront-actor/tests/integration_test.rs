use async_trait::async_trait;
use storefront_actor::{ActorState, FrameworkError, StateActor, StateClient};

// --- Test State ---

#[derive(Clone, Debug, PartialEq, Default)]
struct Counter {
    value: u64,
}

#[derive(Debug)]
enum CounterQuery {
    Value,
}

#[derive(Debug)]
enum CounterAction {
    Increment,
    Decrement,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum CounterError {
    #[error("counter is already zero")]
    Underflow,
}

#[async_trait]
impl ActorState for Counter {
    type Query = CounterQuery;
    type QueryResult = u64;
    type Action = CounterAction;
    type ActionResult = u64;
    type Context = ();
    type Error = CounterError;

    fn handle_query(&self, query: CounterQuery) -> Result<u64, CounterError> {
        match query {
            CounterQuery::Value => Ok(self.value),
        }
    }

    async fn handle_action(
        &mut self,
        action: CounterAction,
        _ctx: &Self::Context,
    ) -> Result<u64, CounterError> {
        match action {
            CounterAction::Increment => self.value += 1,
            CounterAction::Decrement => {
                self.value = self.value.checked_sub(1).ok_or(CounterError::Underflow)?;
            }
        }
        Ok(self.value)
    }
}

// --- State with an injected dependency ---

/// Drains the counter it was started with.
#[derive(Clone, Debug, Default)]
struct Drain {
    drained: u64,
}

#[derive(Debug)]
enum DrainAction {
    DrainAll,
}

#[async_trait]
impl ActorState for Drain {
    type Query = ();
    type QueryResult = u64;
    type Action = DrainAction;
    type ActionResult = u64;
    type Context = StateClient<Counter>;
    type Error = CounterError;

    fn handle_query(&self, _query: ()) -> Result<u64, CounterError> {
        Ok(self.drained)
    }

    async fn handle_action(
        &mut self,
        action: DrainAction,
        counter: &StateClient<Counter>,
    ) -> Result<u64, CounterError> {
        let DrainAction::DrainAll = action;
        // Runs until the counter refuses to go below zero
        while counter.perform_action(CounterAction::Decrement).await.is_ok() {
            self.drained += 1;
        }
        Ok(self.drained)
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = StateActor::new(Counter::default(), 10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Action
    assert_eq!(client.perform_action(CounterAction::Increment).await.unwrap(), 1);

    // 2. Query
    assert_eq!(client.query(CounterQuery::Value).await.unwrap(), 1);

    // 3. Snapshot
    assert_eq!(client.snapshot().await.unwrap(), Counter { value: 1 });

    // 4. Failing action comes back as a typed error and leaves the state alone
    client.perform_action(CounterAction::Decrement).await.unwrap();
    let err = client
        .perform_action(CounterAction::Decrement)
        .await
        .unwrap_err();
    assert_eq!(err.downcast_state::<CounterError>().unwrap(), CounterError::Underflow);
    assert_eq!(client.query(CounterQuery::Value).await.unwrap(), 0);

    // 5. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = StateActor::new(Counter::default(), 4);
    tokio::spawn(actor.run(()));

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.perform_action(CounterAction::Increment).await })
        })
        .collect();

    let mut seen = Vec::new();
    for task in tasks {
        seen.push(task.await.unwrap().unwrap());
    }
    seen.sort_unstable();

    // Every increment observed a distinct value: no lost updates
    assert_eq!(seen, (1..=50).collect::<Vec<u64>>());
    assert_eq!(client.query(CounterQuery::Value).await.unwrap(), 50);
}

#[tokio::test]
async fn test_context_injection() {
    let (counter_actor, counter_client) = StateActor::new(Counter { value: 3 }, 10);
    let (drain_actor, drain_client) = StateActor::new(Drain::default(), 10);

    tokio::spawn(counter_actor.run(()));
    tokio::spawn(drain_actor.run(counter_client.clone()));

    let drained = drain_client.perform_action(DrainAction::DrainAll).await.unwrap();
    assert_eq!(drained, 3);
    assert_eq!(counter_client.query(CounterQuery::Value).await.unwrap(), 0);
    assert_eq!(drain_client.query(()).await.unwrap(), 3);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = StateActor::new(Counter::default(), 1);
    // Never run: dropping the actor drops the mailbox receiver
    drop(actor);

    let result = client.query(CounterQuery::Value).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
