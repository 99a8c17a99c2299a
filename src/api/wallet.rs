// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Address-only reward endpoint.
//!
//! Used by the alternate registration flow: sends the fixed reward to a
//! wallet address with no claim accounting.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{RewardRequest, TransferResponse},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/wallet",
    request_body = RewardRequest,
    tag = "Wallet",
    responses(
        (status = 200, description = "Reward transferred", body = TransferResponse),
        (status = 400, description = "Missing or malformed address"),
        (status = 500, description = "Transfer submission failed")
    )
)]
pub async fn send_reward(
    State(state): State<AppState>,
    Json(request): Json<RewardRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Some(address) = request.address else {
        return Err(ApiError::bad_request("Address is required"));
    };
    if !address.is_well_formed() {
        return Err(ApiError::bad_request("Invalid wallet address"));
    }

    let result = state
        .sender
        .send_reward(&address.0)
        .await
        .map_err(|e| ApiError::from_chain_error(e, "Failed to send reward"))?;

    Ok(Json(TransferResponse {
        success: true,
        hash: result.tx_hash,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{failing_state, test_state, STUB_HASH};
    use crate::models::WalletAddress;
    use axum::http::StatusCode;

    const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12";

    #[tokio::test]
    async fn send_reward_requires_address() {
        let state = test_state();
        let err = send_reward(State(state), Json(RewardRequest { address: None }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Address is required");
    }

    #[tokio::test]
    async fn send_reward_rejects_malformed_address_before_transfer() {
        let state = failing_state();
        let err = send_reward(
            State(state),
            Json(RewardRequest {
                address: Some(WalletAddress::from("nope")),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn send_reward_returns_hash() {
        let state = test_state();
        let Json(response) = send_reward(
            State(state.clone()),
            Json(RewardRequest {
                address: Some(WalletAddress::from(WALLET)),
            }),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.hash, STUB_HASH);

        // No ledger interaction on this route.
        assert_eq!(state.ledger.read().await.get("42").claim_count, 0);
    }

    #[tokio::test]
    async fn send_reward_surfaces_upstream_failure_as_500() {
        let state = failing_state();
        let err = send_reward(
            State(state),
            Json(RewardRequest {
                address: Some(WalletAddress::from(WALLET)),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to send reward");
    }
}
