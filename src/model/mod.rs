//! Pure data structures for the store's resources, each implementing the
//! [`ActorEntity`](crate::framework::ActorEntity) trait in its
//! `<resource>_actor` module.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
