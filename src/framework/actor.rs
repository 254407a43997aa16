//! The generic actor server.
//!
//! `ResourceActor<T>` owns the in-memory store for one entity type and
//! processes requests strictly sequentially in its own Tokio task. That
//! sequencing is the whole concurrency story: no locks around the store,
//! and anything handled within one request (such as a
//! [`StoreAction`](crate::framework::ActorEntity::StoreAction)) is atomic
//! with respect to every other request.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Created together with its [`ResourceClient`] via [`ResourceActor::new`];
/// dependencies are injected later through [`ResourceActor::run`], which
/// lets actors be created first and wired afterwards.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new actor and its client.
    ///
    /// `buffer_size` is the request channel capacity; senders wait when it
    /// is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client is dropped and the channel
    /// closes. `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Short type name for log lines ("Product", not the full path).
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .cloned()
                        .collect();
                    debug!(
                        entity_type,
                        requested = ids.len(),
                        found = items.len(),
                        "GetMany"
                    );
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::Entity(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::StoreAction { action, respond_to } => {
                    debug!(entity_type, ?action, "StoreAction");
                    let result = T::handle_store_action(&mut self.store, action, &context)
                        .await
                        .map_err(|e| FrameworkError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "StoreAction ok"),
                        Err(e) => warn!(entity_type, error = %e, "StoreAction failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: i64,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        value: i64,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
    }

    /// Resets every counter in the store to zero.
    #[derive(Debug)]
    struct ResetAll;

    #[derive(Debug, thiserror::Error)]
    #[error("counter error: {0}")]
    struct CounterError(String);

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Action = CounterAction;
        type ActionResult = i64;
        type StoreAction = ResetAll;
        type StoreActionResult = usize;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, CounterError> {
            Ok(Self {
                id,
                value: params.start,
            })
        }

        async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), CounterError> {
            self.value = update.value;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _: &(),
        ) -> Result<i64, CounterError> {
            match action {
                CounterAction::Add(n) => {
                    self.value += n;
                    Ok(self.value)
                }
            }
        }

        async fn handle_store_action(
            store: &mut HashMap<u32, Self>,
            _action: ResetAll,
            _: &(),
        ) -> Result<usize, CounterError> {
            for counter in store.values_mut() {
                counter.value = 0;
            }
            Ok(store.len())
        }
    }

    #[tokio::test]
    async fn crud_actions_and_store_actions() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        let a = client.create(CounterCreate { start: 5 }).await.unwrap();
        let b = client.create(CounterCreate { start: 7 }).await.unwrap();
        assert_ne!(a, b);

        let value = client.perform_action(a, CounterAction::Add(3)).await.unwrap();
        assert_eq!(value, 8);

        let updated = client.update(b, CounterUpdate { value: 100 }).await.unwrap();
        assert_eq!(updated.value, 100);

        let touched = client.perform_store_action(ResetAll).await.unwrap();
        assert_eq!(touched, 2);
        assert_eq!(client.get(a).await.unwrap().unwrap().value, 0);

        client.delete(a).await.unwrap();
        assert!(client.get(a).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_many_skips_missing_ids() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));

        let a = client.create(CounterCreate { start: 1 }).await.unwrap();
        let b = client.create(CounterCreate { start: 2 }).await.unwrap();

        let found = client.get_many(vec![b, 999, a]).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, b);
        assert_eq!(found[1].id, a);
    }
}
