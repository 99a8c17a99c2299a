// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Reward transfer submission.
//!
//! Builds the fixed-amount ERC-20 `transfer` call, signs it with the
//! server's treasury key, and submits it to the reward chain. Single shot:
//! no retry, no confirmation wait. Invoking twice sends two transfers.

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
            WalletFiller,
        },
        Identity, Provider, ProviderBuilder, RootProvider,
    },
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::client::ChainClientError;
use super::erc20::{parse_recipient, reward_amount, transfer_calldata};
use super::types::NetworkConfig;

/// Wallet-filled HTTP provider type (gas, nonce, chain id, signing).
type WalletProvider = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Ethereum>,
>;

/// Transaction send result.
#[derive(Debug, Clone)]
pub struct SendResult {
    /// Transaction hash
    pub tx_hash: String,
    /// Explorer URL for the transaction
    pub explorer_url: String,
}

/// Sends the fixed reward amount to a recipient address.
///
/// Trait seam so handlers can be tested against a stub instead of a live
/// RPC endpoint.
#[async_trait]
pub trait RewardSender: Send + Sync {
    async fn send_reward(&self, recipient: &str) -> Result<SendResult, ChainClientError>;
}

/// Live reward sender backed by an alloy provider.
pub struct TokenTransfer {
    network: NetworkConfig,
    token_address: Address,
    provider: WalletProvider,
}

impl TokenTransfer {
    /// Create a transfer component for the configured token contract.
    ///
    /// `rpc_url` overrides the network default (e.g. a paid endpoint);
    /// the treasury wallet signs every submission.
    pub fn new(
        network: NetworkConfig,
        rpc_url: &str,
        token_address: &str,
        wallet: EthereumWallet,
    ) -> Result<Self, ChainClientError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainClientError::InvalidRpcUrl(e.to_string()))?;

        let token_address = parse_recipient(token_address)?;

        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

        Ok(Self {
            network,
            token_address,
            provider,
        })
    }

    /// The network this component submits to.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

#[async_trait]
impl RewardSender for TokenTransfer {
    async fn send_reward(&self, recipient: &str) -> Result<SendResult, ChainClientError> {
        let to = parse_recipient(recipient)?;
        let data = transfer_calldata(to, reward_amount());

        let tx = TransactionRequest::default()
            .to(self.token_address)
            .input(data.into());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ChainClientError::TransactionFailed(format!("Failed to send: {e}")))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        let explorer_url = format!("{}/tx/{}", self.network.explorer_url, tx_hash);

        tracing::info!(%tx_hash, recipient, "reward transfer submitted");

        Ok(SendResult {
            tx_hash,
            explorer_url,
        })
    }
}
