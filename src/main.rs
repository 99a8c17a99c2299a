// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

use std::{net::SocketAddr, process, sync::Arc};

use waitlist_server::{
    api::router,
    auth::QuickAuthVerifier,
    blockchain::{create_signer, create_wallet, TokenTransfer, BASE_MAINNET},
    config::Config,
    ledger::ClaimLedger,
    state::AppState,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            process::exit(1);
        }
    };

    // Treasury signing key and transfer component, built once and injected.
    let signer = match create_signer(&config.private_key) {
        Ok(signer) => signer,
        Err(e) => {
            tracing::error!("Invalid PRIVATE_KEY: {e}");
            process::exit(1);
        }
    };
    let wallet = create_wallet(signer);

    let network = BASE_MAINNET;
    let rpc_url = config
        .rpc_url
        .clone()
        .unwrap_or_else(|| network.rpc_url.to_string());

    let sender = match TokenTransfer::new(network.clone(), &rpc_url, &config.contract_address, wallet)
    {
        Ok(sender) => sender,
        Err(e) => {
            tracing::error!("Failed to initialize transfer component: {e}");
            process::exit(1);
        }
    };

    let verifier = match QuickAuthVerifier::new(
        config.quick_auth_jwks_url.clone(),
        config.quick_auth_issuer.clone(),
    ) {
        Ok(verifier) => verifier,
        Err(e) => {
            tracing::error!("Failed to initialize Quick Auth verifier: {e}");
            process::exit(1);
        }
    };

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid bind address: {e}");
            process::exit(1);
        }
    };

    let state = AppState::new(config, ClaimLedger::new(), Arc::new(sender), verifier);
    let app = router(state);

    tracing::info!(
        network = network.name,
        "Waitlist server listening on http://{addr} (docs at /docs)"
    );

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("HTTP server failed");
}

/// Initialize tracing with `RUST_LOG` filtering and `LOG_FORMAT` output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
