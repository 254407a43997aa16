//! The [`ActorEntity`] trait: the contract a resource type (Customer,
//! Product, Order, ...) implements to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin down the DTOs, actions and errors for each resource,
//! so a `Customer` actor can never be handed a `ProductCreate` payload. The
//! lifecycle hooks are async so an entity can call other actors while it is
//! being created or mutated; the dependencies it needs arrive through the
//! `Context` injected into `run()` ("late binding", which is also what keeps
//! the wiring free of global state).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for a resource type managed by a `ResourceActor`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `From<u32>` lets the actor mint ids from its
    /// internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operation on a single entity (e.g. `CheckStock`).
    type Action: Send + Sync + Debug;

    /// Result type returned by [`Self::Action`]s.
    type ActionResult: Send + Sync + Debug;

    /// Resource-specific operation over the whole store, processed in one
    /// actor turn (e.g. a bulk stock update). Use `()` if the resource has
    /// none.
    type StoreAction: Send + Sync + Debug;

    /// Result type returned by [`Self::StoreAction`]s.
    type StoreActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor rather than one
    /// per message: clients then match on a single error type, at the cost
    /// of each hook's signature admitting variants it never produces.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from a freshly minted id and the create payload.
    /// Called synchronously before [`ActorEntity::on_create`].
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is inserted into the
    /// store. Validation and cross-actor side effects belong here: if this
    /// fails, nothing is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom single-entity action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Handle a store-wide action. The actor passes its whole store in, so
    /// the implementation can touch several entities without any interleaved
    /// request observing a half-applied state.
    async fn handle_store_action(
        _store: &mut HashMap<Self::Id, Self>,
        action: Self::StoreAction,
        _ctx: &Self::Context,
    ) -> Result<Self::StoreActionResult, Self::Error>;
}
