//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the storefront's actors.
//!
//! ## Wiring
//!
//! ```text
//! CatalogClient ──► Catalog actor
//!        ▲
//!        │ (ProductLookup)
//! OrderComposer ◄── context of ── Cart actor ◄── CartClient, OrderClient
//! ```
//!
//! Actors are created first and given their dependencies when they start running
//! (`actor.run(context)`). The catalog needs nothing; the cart receives an
//! [`OrderComposer`](crate::composer::OrderComposer) holding a catalog client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the cart's mailbox
//! 2. **Cart stops** - Its context (and with it the composer's catalog client) is dropped
//! 3. **Catalog stops** - The last catalog sender is gone
//! 4. **Await completion** - Every actor task is joined; a panic is reported as an error
//!
//! The dependency graph is acyclic, so channel closure alone is enough.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](storefront_actor::setup_tracing) once before [`Storefront::start`].
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod storefront;

pub use storefront::*;
