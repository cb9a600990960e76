use http::Method;
use serde::Deserialize;

use super::ApiError;
use crate::model::ProductId;

/// A recognised storefront request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// `GET /products`
    ListProducts,
    /// `GET /products/{id}`
    GetProduct(ProductId),
    /// `GET /cart`
    GetCart,
    /// `POST /cart` with `{"productId": "..."}`
    AddToCart(ProductId),
    /// `DELETE /cart`
    ClearCart,
    /// `POST /orders`
    CreateOrder,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody {
    product_id: String,
}

impl ApiRequest {
    /// Routes a method and path to a request, decoding the body where one is expected.
    ///
    /// The query string and any trailing slash are ignored. A product id in the path is
    /// percent-decoded (`p%201` is the id `p 1`); a bad escape is a 400.
    pub fn parse(method: &Method, path: &str, body: Option<&[u8]>) -> Result<Self, ApiError> {
        let route = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();

        let not_allowed = || ApiError::MethodNotAllowed {
            method: method.clone(),
            path: route.to_string(),
        };

        match segments.as_slice() {
            ["products"] => match *method {
                Method::GET => Ok(ApiRequest::ListProducts),
                _ => Err(not_allowed()),
            },
            ["products", id] => match *method {
                Method::GET => percent_decode(id).map(|id| ApiRequest::GetProduct(ProductId::from(id))),
                _ => Err(not_allowed()),
            },
            ["cart"] => match *method {
                Method::GET => Ok(ApiRequest::GetCart),
                Method::POST => Self::parse_add_to_cart(body).map(ApiRequest::AddToCart),
                Method::DELETE => Ok(ApiRequest::ClearCart),
                _ => Err(not_allowed()),
            },
            ["orders"] => match *method {
                Method::POST => Ok(ApiRequest::CreateOrder),
                _ => Err(not_allowed()),
            },
            _ => Err(ApiError::RouteNotFound {
                method: method.clone(),
                path: route.to_string(),
            }),
        }
    }

    fn parse_add_to_cart(body: Option<&[u8]>) -> Result<ProductId, ApiError> {
        let body = body
            .filter(|b| !b.iter().all(u8::is_ascii_whitespace))
            .ok_or_else(|| ApiError::BadRequest("productId is required".to_string()))?;

        let parsed: AddToCartBody = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;

        if parsed.product_id.is_empty() {
            return Err(ApiError::BadRequest("productId must not be empty".to_string()));
        }
        Ok(ProductId::from(parsed.product_id))
    }

    /// True for requests that create something (answered with 201).
    pub fn is_create(&self) -> bool {
        matches!(self, ApiRequest::AddToCart(_) | ApiRequest::CreateOrder)
    }
}

/// Decodes `%XX` escapes in a path segment. `+` stays literal.
fn percent_decode(segment: &str) -> Result<String, ApiError> {
    let invalid = || ApiError::BadRequest(format!("Invalid percent-encoding in {segment:?}"));
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .ok_or_else(invalid)?;
            decoded.push(u8::from_str_radix(hex, 16).map_err(|_| invalid())?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| invalid())
}
