//! Generic actor framework for resource management.
//!
//! The engine of the system: a [`ResourceActor`] owns the state for one
//! resource type and processes [`ResourceRequest`]s sequentially in its own
//! task, while [`ResourceClient`] is the cloneable, type-safe handle the
//! rest of the application talks to. Business logic lives in the
//! [`ActorEntity`] implementations, not here.
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
