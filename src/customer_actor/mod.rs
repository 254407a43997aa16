//! Customer-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;
