// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Claim accounting endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::ApiError,
    ledger::today_string,
    models::{ClaimEntry, ClaimRequest, ClaimsQuery, TransferResponse},
    state::AppState,
};

/// Read a user's claim ledger entry.
#[utoipa::path(
    get,
    path = "/api/claims",
    params(ClaimsQuery),
    tag = "Claims",
    responses(
        (status = 200, description = "Claim entry (zero entry for unknown users)", body = ClaimEntry),
        (status = 400, description = "Missing FID")
    )
)]
pub async fn get_claims(
    State(state): State<AppState>,
    Query(query): Query<ClaimsQuery>,
) -> Result<Json<ClaimEntry>, ApiError> {
    let fid = query
        .fid
        .filter(|fid| !fid.is_empty())
        .ok_or_else(|| ApiError::bad_request("FID is required"))?;

    let ledger = state.ledger.read().await;
    Ok(Json(ledger.get(&fid)))
}

/// Claim the daily reward: transfer the fixed amount to the user's wallet
/// and record the claim.
///
/// The claim count and date are derived from the ledger, never from the
/// request; the cap is enforced before the transfer path is touched. The
/// ledger is written only after the transfer succeeds.
#[utoipa::path(
    post,
    path = "/api/claim",
    request_body = ClaimRequest,
    tag = "Claims",
    responses(
        (status = 200, description = "Reward transferred", body = TransferResponse),
        (status = 400, description = "Missing FID or wallet address"),
        (status = 429, description = "Daily claim limit reached"),
        (status = 500, description = "Transfer submission failed")
    )
)]
pub async fn post_claim(
    State(state): State<AppState>,
    Json(request): Json<ClaimRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    let (Some(fid), Some(wallet_address)) = (request.fid, request.wallet_address) else {
        return Err(ApiError::bad_request("FID and wallet address are required"));
    };
    if fid.is_empty() {
        return Err(ApiError::bad_request("FID and wallet address are required"));
    }
    if !wallet_address.is_well_formed() {
        return Err(ApiError::bad_request("Invalid wallet address"));
    }

    let today = today_string();
    let next = state
        .ledger
        .read()
        .await
        .next_claim(&fid, &today)
        .map_err(|e| ApiError::too_many_requests(e.to_string()))?;

    // Read-check-send-write is not atomic; concurrent claims for one FID
    // can race past the cap (single-process soft limit, see ledger docs).
    let result = state
        .sender
        .send_reward(&wallet_address.0)
        .await
        .map_err(|e| ApiError::from_chain_error(e, "Failed to process claim"))?;

    tracing::info!(%fid, claim_count = next.claim_count, "claim recorded");
    state.ledger.write().await.set(&fid, next);

    Ok(Json(TransferResponse {
        success: true,
        hash: result.tx_hash,
    }))
}
