//! Generic message types exchanged between a [`ResourceClient`] and its
//! [`ResourceActor`].
//!
//! Instead of ad-hoc messages per operation, every resource speaks the same
//! CRUD vocabulary plus two extensibility points: `Action` for operations on
//! a single entity and `StoreAction` for operations spanning the whole
//! store. The associated types on [`ActorEntity`] keep each variant's
//! payload specific to the resource, so a wrong-typed request is a compile
//! error, not a runtime surprise.
//!
//! [`ResourceClient`]: crate::framework::ResourceClient
//! [`ResourceActor`]: crate::framework::ResourceActor

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Bulk lookup. Returns only the entities present, in request order;
    /// missing ids are not an error.
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Store-wide operation, applied in a single actor turn.
    StoreAction {
        action: T::StoreAction,
        respond_to: Response<T::StoreActionResult>,
    },
}
