//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every actor.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); the
//! `actor` field on each event already says where it came from. `RUST_LOG` wins
//! over the filter passed in by the application.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, tagged with the state type
//! - **Requests**: every snapshot, query and action at `debug`, with the payload
//! - **Actions**: `Action ok` at `info`, `Action failed` at `warn` with the error
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Only the actor plumbing
//! RUST_LOG=storefront_actor=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**, adding two products and checking out:
//!
//! ```text
//! INFO Actor started actor="Catalog"
//! INFO Actor started actor="Cart"
//! DEBUG Action actor="Cart" action=Add(ProductId("p1"))
//! INFO Action ok actor="Cart"
//! DEBUG Action actor="Cart" action=Checkout
//! DEBUG Query actor="Catalog" query=GetById(ProductId("p1"))
//! INFO Order composed order_id=order_1760875200000_1 lines=1 total=25 currency=EUR
//! INFO Action ok actor="Cart"
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `default_filter` (e.g. `"info"` or `"storefront=debug"`) applies only when
/// `RUST_LOG` is unset or unparsable. Calling this twice is a no-op for the
/// second call, so tests may invoke it freely.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // The `actor` field already names the source
        .compact()
        .try_init();
}
