//! Error types for the request boundary.

use http::{Method, StatusCode};
use serde_json::json;
use thiserror::Error;

use super::ApiResponse;
use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::composer::OrderError;

/// Everything a request can fail with, each mapped to one HTTP status.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Cannot {method} {path}")]
    RouteNotFound { method: Method, path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },

    /// Malformed request body.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// A precondition of the operation does not hold (e.g. empty cart).
    #[error("{0}")]
    InvalidOperation(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound { .. } | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) | ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"statusCode": 400, "message": "Cart is empty", "error": "Bad Request"}`
    pub fn into_response(self) -> ApiResponse {
        let status = self.status();
        ApiResponse::new(
            status,
            json!({
                "statusCode": status.as_u16(),
                "message": self.to_string(),
                "error": status.canonical_reason().unwrap_or("Error"),
            }),
        )
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        if e.is_invalid_operation() {
            ApiError::InvalidOperation(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::Checkout(order_error) => order_error.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let response = ApiError::from(OrderError::EmptyCart).into_response();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            json!({"statusCode": 400, "message": "Cart is empty", "error": "Bad Request"})
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(CatalogError::NotFound("p9".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(OrderError::UnknownProduct("p9".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(OrderError::TotalOverflow("p9".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CartError::ActorCommunicationError("closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(OrderError::CatalogUnavailable("closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_route_not_found_message() {
        let err = ApiError::RouteNotFound {
            method: Method::GET,
            path: "/wishlist".into(),
        };

        assert_eq!(err.to_string(), "Cannot GET /wishlist");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
