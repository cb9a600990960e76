//! # Storefront
//!
//! A minimal storefront backend: a product catalog, a session cart, and checkout that
//! turns the cart into a priced order.
//!
//! ## 🗺️ Module Tour
//!
//! - **[model]**: Plain data ([`Product`](model::Product), [`Catalog`](model::Catalog),
//!   [`Cart`](model::Cart), [`Order`](model::Order)).
//! - **[catalog_actor]**, **[cart_actor]**: The actors that own the catalog and the cart.
//! - **[composer]**: Prices cart lines against the catalog; runs inside the cart's checkout.
//! - **[clients]**: Type-safe wrappers (e.g. [`CartClient`](clients::CartClient)) that hide
//!   the message passing.
//! - **[lifecycle]**: [`Storefront`](lifecycle::Storefront) starts, wires and stops the actors.
//! - **[api]**: Method + path + JSON in, status + JSON out.
//! - **[config]**: File and environment configuration.
//!
//! ## 📚 Quick Start
//!
//! ```rust
//! use storefront::config::StorefrontConfig;
//! use storefront::lifecycle::Storefront;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storefront = Storefront::start(&StorefrontConfig::default())?;
//!
//!     storefront.cart_client.add("p1".into()).await?;
//!     storefront.cart_client.add("p1".into()).await?;
//!     storefront.cart_client.add("p2".into()).await?;
//!
//!     let order = storefront.order_client.create_order().await?;
//!     assert_eq!(order.total().to_string(), "110");
//!     assert!(storefront.cart_client.items().await?.is_empty());
//!
//!     storefront.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`storefront_actor::mock`] for utilities to test clients and actors without
//! spawning their dependencies.

pub mod api;
pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod composer;
pub mod config;
pub mod lifecycle;
pub mod model;
