//! # Request Boundary
//!
//! Transport-free request handling: a method, a path and an optional JSON body go
//! in, a status code and a JSON body come out.
//!
//! | Request | Operation | Success |
//! |---------|-----------|---------|
//! | `GET /products` | list the catalog | 200 |
//! | `GET /products/{id}` | one product | 200, or 404 |
//! | `GET /cart` | cart items | 200 |
//! | `POST /cart` `{"productId": "p1"}` | add one unit | 201 |
//! | `DELETE /cart` | clear the cart | 200 |
//! | `POST /orders` | check out | 201, or 400 for an empty cart / unknown product |
//!
//! Path ids are percent-decoded before lookup, so `GET /products/p%201` asks for `p 1`.
//!
//! Unknown routes get 404, a wrong method on a known route 405, a malformed body 400
//! and an unreachable actor 500. Error bodies follow NestJS:
//!
//! ```json
//! {"statusCode": 400, "message": "Cart is empty", "error": "Bad Request"}
//! ```

mod error;
mod handler;
mod request;
mod response;

pub use error::*;
pub use handler::*;
pub use request::*;
pub use response::*;
