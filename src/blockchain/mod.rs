// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Blockchain integration for the reward chain (Base).
//!
//! This module provides:
//! - ERC-20 `transfer` call encoding for the fixed reward amount
//! - Treasury key signing and single-shot transaction submission

pub mod client;
pub mod erc20;
pub mod transfer;
pub mod types;

pub use client::{create_signer, create_wallet, ChainClientError};
pub use transfer::{RewardSender, SendResult, TokenTransfer};
pub use types::{NetworkConfig, BASE_MAINNET, BASE_SEPOLIA};
