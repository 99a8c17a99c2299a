// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Signer construction and chain-client errors.

use alloy::{network::EthereumWallet, signers::local::PrivateKeySigner};

/// Create a signer from a private key hex string.
///
/// Accepts the key with or without a `0x` prefix (the deployment sets
/// `PRIVATE_KEY` with the prefix, viem-style).
pub fn create_signer(private_key_hex: &str) -> Result<PrivateKeySigner, ChainClientError> {
    let stripped = private_key_hex
        .strip_prefix("0x")
        .unwrap_or(private_key_hex);

    let key_bytes = alloy::hex::decode(stripped)
        .map_err(|e| ChainClientError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| ChainClientError::InvalidPrivateKey(e.to_string()))
}

/// Create an Ethereum wallet from a signer.
pub fn create_wallet(signer: PrivateKeySigner) -> EthereumWallet {
    EthereumWallet::from(signer)
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl ChainClientError {
    /// Whether the error is the caller's fault (bad input) rather than an
    /// upstream signing/submission failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChainClientError::InvalidAddress(_))
    }
}
