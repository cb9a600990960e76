use std::sync::Arc;

use tracing::{error, info, warn};

use crate::catalog_actor::{self, CatalogError};
use crate::cart_actor;
use crate::clients::{CartClient, CatalogClient, OrderClient};
use crate::composer::OrderComposer;
use crate::config::StorefrontConfig;
use crate::model::Catalog;

/// The running storefront: the catalog and cart actors plus their clients.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping every actor
/// - **Dependency Wiring**: The cart checks out through a composer that reads the catalog
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::start(&StorefrontConfig::default())?;
///
/// storefront.cart_client.add("p1".into()).await?;
/// let order = storefront.order_client.create_order().await?;
///
/// // Gracefully shut down when done
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the Catalog actor
    pub catalog_client: CatalogClient,

    /// Client for the Cart actor's item operations
    pub cart_client: CartClient,

    /// Client for checkout (also served by the Cart actor)
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Validates the configured catalog, then spawns and wires every actor.
    ///
    /// Must be called from inside a Tokio runtime.
    ///
    /// # Errors
    /// Returns the [`CatalogError`] raised by [`Catalog::new`] for an invalid product list.
    pub fn start(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::new(config.products.clone())?;
        if catalog.is_empty() {
            warn!("Catalog is empty; every checkout will fail");
        } else {
            info!(products = catalog.len(), currencies = ?catalog.currencies(), "Catalog loaded");
        }

        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog_client) = catalog_actor::new(catalog, config.channel_buffer);
        let (cart_actor, cart_client, order_client) = cart_actor::new(config.channel_buffer);

        // 2. Start actors with injected context
        let composer = OrderComposer::new(Arc::new(catalog_client.clone()))
            .with_id_prefix(config.order_id_prefix.clone())
            .with_currency_policy(config.currency_policy);

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(composer));

        Ok(Self {
            catalog_client,
            cart_client,
            order_client,
            handles: vec![cart_handle, catalog_handle],
        })
    }

    /// Gracefully shuts down the storefront.
    ///
    /// Dropping the clients closes the cart mailbox. The cart actor then drops its
    /// composer, which holds the last catalog client, so the catalog follows.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
