//! Observability setup.
//!
//! Structured logging via the `tracing` crate: actors log lifecycle events
//! and every operation with structured fields (`entity_type`, ids, store
//! size), clients open spans around each request, and the order workflow's
//! steps show up as a hierarchy under `create_order`.
//!
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact operation log
//! RUST_LOG=debug cargo run     # full request payloads
//! RUST_LOG=storefront::framework=debug cargo run
//! ```

/// Initializes the global tracing subscriber. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields carry the context instead
        .compact()
        .init();
}
