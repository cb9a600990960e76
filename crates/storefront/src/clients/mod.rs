//! Type-safe wrappers around [`StateClient`](storefront_actor::StateClient).

pub mod cart_client;
pub mod catalog_client;
pub mod order_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
