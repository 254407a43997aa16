//! Errors raised by the actor plumbing itself, as opposed to errors raised
//! by entity logic. Entity errors travel through [`FrameworkError::Entity`]
//! as a boxed `dyn Error` and are downcast back to their concrete type by
//! the resource clients.

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's channel is closed; it has shut down or was never started.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,

    /// No entity with the given id exists in the actor's store.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An entity hook failed. Holds the entity's own typed error.
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the concrete entity error carried by [`FrameworkError::Entity`].
    ///
    /// Returns the framework error unchanged when it is not an entity error
    /// or the boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::Entity(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(FrameworkError::Entity),
            other => Err(other),
        }
    }
}
