//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Errors produced by an
//! [`ActorState`](crate::ActorState) travel boxed inside
//! [`FrameworkError::StateError`] and can be recovered with
//! [`FrameworkError::downcast_state`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed error returned by the actor's state.
    ///
    /// Returns the original `FrameworkError` unchanged when it does not wrap an `E`.
    pub fn downcast_state<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::StateError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::StateError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("shelf empty")]
    struct ShelfEmpty;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_downcast_recovers_state_error() {
        let err = FrameworkError::StateError(Box::new(ShelfEmpty));
        assert_eq!(err.downcast_state::<ShelfEmpty>().unwrap(), ShelfEmpty);
    }

    #[test]
    fn test_downcast_keeps_foreign_errors() {
        let err = FrameworkError::StateError(Box::new(Other));
        let back = err.downcast_state::<ShelfEmpty>().unwrap_err();
        assert_eq!(back.to_string(), "other");

        let closed = FrameworkError::ActorClosed.downcast_state::<ShelfEmpty>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
