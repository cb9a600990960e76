//! # Storefront binary
//!
//! Starts the storefront and feeds it requests.
//!
//! - Default: reads `METHOD /path [json-body]` lines from stdin and prints
//!   `<status> <json>` for each.
//! - `--demo`: runs a scripted shopping session with tracing spans, then exits.
//!
//! ```bash
//! printf 'POST /cart {"productId":"p1"}\nPOST /orders\n' | RUST_LOG=warn cargo run
//! RUST_LOG=debug cargo run -- --demo
//! ```

use std::path::PathBuf;

use clap::Parser;
use http::Method;
use storefront::api::{self, ApiError};
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront_actor::setup_tracing;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Catalog, cart and checkout over a line protocol")]
struct Cli {
    /// TOML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log: Option<String>,

    /// Run a scripted session and exit
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = StorefrontConfig::load(cli.config.as_deref())?;
    if let Some(filter) = cli.log {
        config.log_filter = filter;
    }

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(
        products = config.products.len(),
        currency_policy = ?config.currency_policy,
        "Starting storefront"
    );
    let storefront = Storefront::start(&config)?;

    if cli.demo {
        run_demo(&storefront).await;
    } else {
        serve_stdin(&storefront).await?;
    }

    // Shutdown gracefully
    storefront.shutdown().await?;
    Ok(())
}

/// One request per line until EOF.
async fn serve_stdin(storefront: &Storefront) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = match parse_line(line) {
            Ok((method, path, body)) => {
                api::serve(storefront, &method, path, body.map(str::as_bytes)).await
            }
            Err(e) => e.into_response(),
        };

        stdout.write_all(response.to_line().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Splits `METHOD /path [body]`; the body is everything after the path.
fn parse_line(line: &str) -> Result<(Method, &str, Option<&str>), ApiError> {
    let (method, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| ApiError::BadRequest(format!("Expected `METHOD /path [body]`, got {line:?}")))?;

    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| ApiError::BadRequest(format!("Invalid method {method:?}")))?;

    let rest = rest.trim_start();
    let (path, body) = match rest.split_once(char::is_whitespace) {
        Some((path, body)) => (path, Some(body.trim())),
        None => (rest, None),
    };

    Ok((method, path, body))
}

async fn run_demo(storefront: &Storefront) {
    let span = tracing::info_span!("browsing");
    async {
        match storefront.catalog_client.list_all().await {
            Ok(products) => {
                for product in &products {
                    info!(id = %product.id, name = %product.name, price = %product.price, currency = %product.currency, "Product");
                }
            }
            Err(e) => error!(error = %e, "Listing products failed"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("shopping");
    async {
        for id in ["p1", "p2", "p1"] {
            match storefront.cart_client.add(id.into()).await {
                Ok(items) => info!(product_id = id, lines = items.len(), "Added to cart"),
                Err(e) => error!(error = %e, "Add to cart failed"),
            }
        }
        if let Ok(count) = storefront.cart_client.total_quantity().await {
            info!(count, "Cart badge");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("checkout");
    async {
        match storefront.order_client.create_order().await {
            Ok(order) => info!(order_id = %order.order_id(), total = %order.total(), currency = order.currency(), "Order placed"),
            Err(e) => error!(error = %e, "Order failed"),
        }

        // The cart is empty now, so a second checkout is refused
        if let Err(e) = storefront.order_client.create_order().await {
            info!(error = %e, "Second checkout refused as expected");
        }
    }
    .instrument(span)
    .await;
}
