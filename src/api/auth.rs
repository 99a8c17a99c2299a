// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Quick Auth verification endpoint.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::{AuthError, AuthUser, QuickAuthVerifier},
    state::AppState,
};

/// Successful verification body, as consumed by the page's `useQuickAuth`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub user: AuthUser,
}

/// Verify the Quick Auth bearer token and return the user's FID.
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "Auth",
    responses(
        (status = 200, description = "Token verified", body = AuthResponse),
        (status = 401, description = "Missing, malformed, or expired token"),
        (status = 500, description = "Auth server unreachable")
    )
)]
pub async fn verify_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::InvalidAuthHeader))
        .transpose()?;

    let token = QuickAuthVerifier::bearer_token(header)?;
    let user = state.verifier.verify(token).await?;

    tracing::debug!(fid = user.fid, "quick auth token verified");

    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::test_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn verify_auth_requires_header() {
        let state = test_state();
        let err = verify_auth(State(state), HeaderMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn verify_auth_rejects_non_bearer_scheme() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        let err = verify_auth(State(state), headers).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn verify_auth_rejects_garbage_token() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer not-a-jwt".parse().unwrap());

        // Rejected at header decode, before any JWKS fetch.
        let err = verify_auth(State(state), headers).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
