// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! ERC-20 reward token call encoding.

use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    sol,
    sol_types::SolCall,
};

use super::client::ChainClientError;

// Define the ERC-20 interface using alloy's sol! macro
sol! {
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}

/// Fixed reward per claim: 0.001 token at 18 decimals.
pub const REWARD_AMOUNT_BASE_UNITS: u64 = 1_000_000_000_000_000;

/// Fixed reward amount as a `U256`.
pub fn reward_amount() -> U256 {
    U256::from(REWARD_AMOUNT_BASE_UNITS)
}

/// Parse and validate a recipient address.
///
/// Must be `0x`-prefixed followed by exactly 40 hex characters. Rejected
/// before any call construction so a malformed address never reaches the
/// signing path.
pub fn parse_recipient(address: &str) -> Result<Address, ChainClientError> {
    let hex_part = address
        .strip_prefix("0x")
        .ok_or_else(|| ChainClientError::InvalidAddress("missing 0x prefix".to_string()))?;

    if hex_part.len() != 40 {
        return Err(ChainClientError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    Address::from_str(address).map_err(|e| ChainClientError::InvalidAddress(e.to_string()))
}

/// Encode a `transfer(address,uint256)` call.
///
/// Layout: 4-byte selector `0xa9059cbb`, the recipient left-padded to
/// 32 bytes, the amount left-padded to 32 bytes. 68 bytes total.
pub fn transfer_calldata(to: Address, amount: U256) -> Vec<u8> {
    IERC20::transferCall { to, amount }.abi_encode()
}
