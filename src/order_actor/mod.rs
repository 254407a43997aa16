//! Order-specific resource logic: the order-creation workflow lives in the
//! [`Order`](crate::model::Order) entity's `on_create` hook.

pub mod entity;
pub mod error;

pub use entity::OrderContext;
pub use error::*;
