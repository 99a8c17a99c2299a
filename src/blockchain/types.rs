// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Network configuration for the reward chain.

/// EVM network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// Default RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Base Mainnet configuration.
///
/// The reward token contract lives here; all transfers are submitted to
/// this chain unless `RPC_URL` overrides the endpoint.
pub const BASE_MAINNET: NetworkConfig = NetworkConfig {
    name: "Base",
    chain_id: 8453,
    rpc_url: "https://mainnet.base.org",
    explorer_url: "https://basescan.org",
};

/// Base Sepolia Testnet configuration.
pub const BASE_SEPOLIA: NetworkConfig = NetworkConfig {
    name: "Base Sepolia Testnet",
    chain_id: 84532,
    rpc_url: "https://sepolia.base.org",
    explorer_url: "https://sepolia.basescan.org",
};
