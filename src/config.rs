// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup into a
//! [`Config`] value and injected into the components that need it. Request
//! handlers never read ambient environment variables.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PRIVATE_KEY` | Treasury signing key (hex, `0x` prefix ok) | Required |
//! | `CONTRACT_ADDRESS` | Reward token ERC-20 contract address | Required |
//! | `RPC_URL` | Chain RPC endpoint override | Base mainnet public RPC |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `PUBLIC_URL` | Public root URL for manifest links | `http://localhost:8080` |
//! | `QUICK_AUTH_JWKS_URL` | Quick Auth server JWKS endpoint | Farcaster auth server |
//! | `QUICK_AUTH_ISSUER` | Expected JWT issuer claim | Farcaster auth server |
//! | `ACCOUNT_ASSOCIATION_HEADER` | Manifest domain proof header | Optional |
//! | `ACCOUNT_ASSOCIATION_PAYLOAD` | Manifest domain proof payload | Optional |
//! | `ACCOUNT_ASSOCIATION_SIGNATURE` | Manifest domain proof signature | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use serde::{Deserialize, Serialize};

/// Default Quick Auth server JWKS endpoint.
pub const DEFAULT_QUICK_AUTH_JWKS_URL: &str = "https://auth.farcaster.xyz/.well-known/jwks.json";

/// Default Quick Auth issuer claim.
pub const DEFAULT_QUICK_AUTH_ISSUER: &str = "https://auth.farcaster.xyz";

/// Immutable service configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Treasury private key used to sign reward transfers.
    pub private_key: String,
    /// Reward token contract address. The original deployment referred to
    /// this token as both "Talent" and "JO"; it is one configured contract.
    pub contract_address: String,
    /// RPC endpoint override; `None` uses the network default.
    pub rpc_url: Option<String>,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Public root URL used for manifest asset links.
    pub public_url: String,
    /// Quick Auth server JWKS endpoint.
    pub quick_auth_jwks_url: String,
    /// Expected issuer of Quick Auth tokens.
    pub quick_auth_issuer: String,
    /// Domain-ownership proof for the mini-app manifest, if configured.
    pub account_association: Option<AccountAssociation>,
}

/// Signed domain-ownership proof served in the Farcaster manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Secrets are required but not validated beyond presence; a bad key
    /// surfaces when the signer is constructed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let private_key =
            env::var("PRIVATE_KEY").map_err(|_| ConfigError::MissingVar("PRIVATE_KEY"))?;
        let contract_address =
            env::var("CONTRACT_ADDRESS").map_err(|_| ConfigError::MissingVar("CONTRACT_ADDRESS"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidVar("PORT", e.to_string()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            private_key,
            contract_address,
            rpc_url: env::var("RPC_URL").ok(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            quick_auth_jwks_url: env::var("QUICK_AUTH_JWKS_URL")
                .unwrap_or_else(|_| DEFAULT_QUICK_AUTH_JWKS_URL.to_string()),
            quick_auth_issuer: env::var("QUICK_AUTH_ISSUER")
                .unwrap_or_else(|_| DEFAULT_QUICK_AUTH_ISSUER.to_string()),
            account_association: account_association_from_env(),
        })
    }
}

/// The association proof is only served when all three parts are present.
fn account_association_from_env() -> Option<AccountAssociation> {
    let header = env::var("ACCOUNT_ASSOCIATION_HEADER").ok()?;
    let payload = env::var("ACCOUNT_ASSOCIATION_PAYLOAD").ok()?;
    let signature = env::var("ACCOUNT_ASSOCIATION_SIGNATURE").ok()?;
    Some(AccountAssociation {
        header,
        payload,
        signature,
    })
}

/// Test configuration with a dev key and placeholder contract.
#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        private_key: "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".into(),
        contract_address: "0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12".into(),
        rpc_url: None,
        host: "127.0.0.1".into(),
        port: 8080,
        public_url: "http://localhost:8080".into(),
        quick_auth_jwks_url: DEFAULT_QUICK_AUTH_JWKS_URL.into(),
        quick_auth_issuer: DEFAULT_QUICK_AUTH_ISSUER.into(),
        account_association: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builds() {
        let config = test_config();
        assert_eq!(config.port, 8080);
        assert!(config.rpc_url.is_none());
    }
}
