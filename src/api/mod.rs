// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::AuthUser,
    models::{ClaimEntry, ClaimRequest, RewardRequest, TransferResponse, WalletAddress},
    state::AppState,
};

pub mod auth;
pub mod claims;
pub mod health;
pub mod manifest;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/claim", post(claims::post_claim))
        .route("/api/claims", get(claims::get_claims))
        .route("/api/wallet", post(wallet::send_reward))
        .route("/api/auth", get(auth::verify_auth))
        .route("/.well-known/farcaster.json", get(manifest::manifest))
        .route("/health", get(health::health))
        .route("/health/live", get(health::health))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        claims::get_claims,
        claims::post_claim,
        wallet::send_reward,
        auth::verify_auth,
        manifest::manifest,
        health::health
    ),
    components(
        schemas(
            WalletAddress,
            ClaimEntry,
            ClaimRequest,
            RewardRequest,
            TransferResponse,
            AuthUser,
            auth::AuthResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Claims", description = "Daily reward claims and claim accounting"),
        (name = "Wallet", description = "Address-only reward transfers"),
        (name = "Auth", description = "Quick Auth token verification"),
        (name = "Manifest", description = "Farcaster mini-app manifest"),
        (name = "Health", description = "Liveness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::auth::QuickAuthVerifier;
    use crate::blockchain::erc20::parse_recipient;
    use crate::blockchain::{ChainClientError, RewardSender, SendResult};
    use crate::config::test_config;
    use crate::ledger::ClaimLedger;
    use crate::state::AppState;

    pub(crate) const STUB_HASH: &str =
        "0x0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8";

    /// Stub signer: validates the recipient like the live sender, then
    /// returns a fixed hash (or a submission failure).
    pub(crate) struct StubSender {
        fail: bool,
    }

    #[async_trait]
    impl RewardSender for StubSender {
        async fn send_reward(&self, recipient: &str) -> Result<SendResult, ChainClientError> {
            parse_recipient(recipient)?;
            if self.fail {
                return Err(ChainClientError::TransactionFailed(
                    "stub: rpc unavailable".to_string(),
                ));
            }
            Ok(SendResult {
                tx_hash: STUB_HASH.to_string(),
                explorer_url: format!("https://basescan.org/tx/{STUB_HASH}"),
            })
        }
    }

    pub(crate) fn test_state() -> AppState {
        state_with(StubSender { fail: false })
    }

    pub(crate) fn failing_state() -> AppState {
        state_with(StubSender { fail: true })
    }

    fn state_with(sender: StubSender) -> AppState {
        let config = test_config();
        let verifier = QuickAuthVerifier::new(
            config.quick_auth_jwks_url.clone(),
            config.quick_auth_issuer.clone(),
        )
        .expect("test verifier");
        AppState::new(config, ClaimLedger::new(), Arc::new(sender), verifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(testing::test_state());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
