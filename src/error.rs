// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::blockchain::ChainClientError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a chain-client failure to an API error.
    ///
    /// Bad recipient input is the caller's fault; everything else is an
    /// upstream failure surfaced with a generic message (details are
    /// logged, not echoed to the client).
    pub fn from_chain_error(err: ChainClientError, generic_message: &str) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            tracing::error!(error = %err, "transfer submission failed");
            Self::internal(generic_message)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");

        let capped = ApiError::too_many_requests("slow down");
        assert_eq!(capped.status, StatusCode::TOO_MANY_REQUESTS);

        let internal = ApiError::internal("boom");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn chain_errors_split_client_and_server() {
        let bad_addr = ApiError::from_chain_error(
            ChainClientError::InvalidAddress("missing 0x prefix".into()),
            "Failed to process claim",
        );
        assert_eq!(bad_addr.status, StatusCode::BAD_REQUEST);

        let rpc_down = ApiError::from_chain_error(
            ChainClientError::TransactionFailed("connection refused".into()),
            "Failed to process claim",
        );
        assert_eq!(rpc_down.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rpc_down.message, "Failed to process claim");
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }
}
