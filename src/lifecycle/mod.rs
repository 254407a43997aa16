//! Orchestration layer: spins up the actors, wires their dependencies and
//! handles graceful shutdown, plus the tracing setup for the whole system.

pub mod order_system;
pub mod tracing;

pub use order_system::OrderSystem;
pub use tracing::setup_tracing;
