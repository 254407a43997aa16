//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The rest of the application never touches raw message passing; each
//! resource gets a small domain client with named methods.

pub mod actor_client;
pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use actor_client::*;
pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
