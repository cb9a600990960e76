use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;

/// A status code plus JSON body, independent of any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, ApiError> {
        Ok(Self::new(status, serde_json::to_value(value)?))
    }

    /// `<status> <json>`, the line format of the stdin driver.
    pub fn to_line(&self) -> String {
        format!("{} {}", self.status.as_u16(), self.body)
    }
}
