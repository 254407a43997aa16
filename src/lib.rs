//! # Storefront
//!
//! A small e-commerce backend built as a set of resource-oriented actors:
//! customer registration and order placement against a product catalog with
//! stock tracking.
//!
//! ## Architecture
//!
//! Each resource (Customer, Product, Order) is managed by its own
//! [`ResourceActor`](framework::ResourceActor) running in a dedicated Tokio
//! task. Actors process messages sequentially, so no locks guard their
//! state, and anything handled within a single request is atomic with
//! respect to every other request.
//!
//! The interesting logic is the order-creation workflow in
//! [`order_actor`]: it validates the customer, bulk-resolves the requested
//! products, checks stock, snapshots unit prices into the order's line
//! items, decrements stock in one bulk update and persists the order — all
//! inside the Order actor's `on_create` hook, with its dependencies (the
//! customer and product clients) injected explicitly as actor context.
//!
//! ## Module tour
//!
//! - [`framework`] — the generic engine: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor),
//!   [`ResourceClient`](framework::ResourceClient), and mock utilities for
//!   testing clients in isolation.
//! - [`model`] — pure data: entities, ids, DTOs.
//! - [`customer_actor`], [`product_actor`], [`order_actor`] — the
//!   `ActorEntity` implementations and their error enums.
//! - [`clients`] — typed wrappers ([`CustomerClient`](clients::CustomerClient),
//!   [`ProductClient`](clients::ProductClient),
//!   [`OrderClient`](clients::OrderClient)) hiding raw message passing.
//! - [`lifecycle`] — [`OrderSystem`](lifecycle::OrderSystem) wiring and
//!   shutdown, plus tracing setup.
//!
//! ## Error handling
//!
//! Every resource defines a tagged error enum; order-workflow failures
//! (`CustomerNotFound`, `NoProductsFound`, `ProductNotFound`,
//! `InsufficientStock`) stay typed all the way to the caller, and
//! [`OrderError::code`](order_actor::OrderError::code) maps each kind to a
//! stable code a transport boundary can translate deterministically.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run   # end-to-end demo
//! cargo test
//! ```

pub mod clients;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
