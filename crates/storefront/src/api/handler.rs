use http::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use super::{ApiError, ApiRequest, ApiResponse};
use crate::lifecycle::Storefront;

/// Runs one request against the storefront. Failures become NestJS-style error bodies.
#[instrument(skip(storefront))]
pub async fn handle(storefront: &Storefront, request: ApiRequest) -> ApiResponse {
    let status = if request.is_create() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    match dispatch(storefront, request, status).await {
        Ok(response) => {
            debug!(status = response.status.as_u16(), "Request ok");
            response
        }
        Err(e) => {
            warn!(status = e.status().as_u16(), error = %e, "Request failed");
            e.into_response()
        }
    }
}

/// Parses and handles a raw request in one step.
pub async fn serve(
    storefront: &Storefront,
    method: &Method,
    path: &str,
    body: Option<&[u8]>,
) -> ApiResponse {
    match ApiRequest::parse(method, path, body) {
        Ok(request) => handle(storefront, request).await,
        Err(e) => {
            debug!(%method, path, error = %e, "Request rejected");
            e.into_response()
        }
    }
}

async fn dispatch(
    storefront: &Storefront,
    request: ApiRequest,
    status: StatusCode,
) -> Result<ApiResponse, ApiError> {
    match request {
        ApiRequest::ListProducts => {
            let products = storefront.catalog_client.list_all().await?;
            ApiResponse::json(status, &products)
        }
        ApiRequest::GetProduct(id) => {
            let product = storefront.catalog_client.get_by_id(&id).await?;
            ApiResponse::json(status, &product)
        }
        ApiRequest::GetCart => {
            let items = storefront.cart_client.items().await?;
            ApiResponse::json(status, &items)
        }
        ApiRequest::AddToCart(product_id) => {
            let items = storefront.cart_client.add(product_id).await?;
            ApiResponse::json(status, &items)
        }
        ApiRequest::ClearCart => {
            let items = storefront.cart_client.clear().await?;
            ApiResponse::json(status, &items)
        }
        ApiRequest::CreateOrder => {
            let order = storefront.order_client.create_order().await?;
            ApiResponse::json(status, &order)
        }
    }
}
