//! Response envelope for error bodies and status endpoints

use serde::Serialize;
use chrono::Utc;

/// Machine-readable error codes, serialized as `BAD_REQUEST` / `STORE_ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    StoreError,
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorDetail>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::build(Some(data), None)
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(None, Some(ErrorDetail { code, message: message.into() }))
    }

    fn build(data: Option<T>, error: Option<ErrorDetail>) -> Self {
        Self {
            success: error.is_none(),
            data,
            error,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
