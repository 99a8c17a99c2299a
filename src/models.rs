// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! # API Data Models
//!
//! Request and response structures for the waitlist API. All types derive
//! `Serialize`/`Deserialize` plus `ToSchema` for OpenAPI documentation.
//!
//! The wire format is camelCase because the mini-app page consumes these
//! bodies directly (`walletAddress`, `claimCount`, `lastClaimDate`).

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

// =============================================================================
// Wallet Address Type
// =============================================================================

/// Ethereum-compatible wallet address wrapper.
///
/// Format: `0x` followed by 40 hexadecimal characters (20 bytes). The host
/// runtime supplies connected-wallet addresses; this service never
/// generates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    /// Surface-level format check: `0x` prefix plus exactly 40 hex chars.
    ///
    /// Full parsing (including checksum handling) happens in the blockchain
    /// layer; this gate keeps obviously malformed input out of the transfer
    /// path.
    pub fn is_well_formed(&self) -> bool {
        match self.0.strip_prefix("0x") {
            Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => false,
        }
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(value: &str) -> Self {
        WalletAddress(value.to_string())
    }
}

// =============================================================================
// Claim Ledger Models
// =============================================================================

/// A user's claim ledger entry.
///
/// Dates are strings in JS `Date.toDateString()` form (`"Mon Jan 01 2024"`)
/// and are compared by exact string match, not calendar arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEntry {
    /// Number of successful claims recorded for `last_claim_date`.
    pub claim_count: u32,
    /// Calendar date of the most recent claim; empty if never claimed.
    pub last_claim_date: String,
}

impl ClaimEntry {
    /// The zero entry returned for users who have never claimed.
    pub fn zero() -> Self {
        Self {
            claim_count: 0,
            last_claim_date: String::new(),
        }
    }
}

impl Default for ClaimEntry {
    fn default() -> Self {
        Self::zero()
    }
}

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// `POST /api/claim` request body.
///
/// Required fields are `Option` so their absence surfaces as this API's
/// own 400 `{error}` body rather than a deserialization rejection.
/// `claim_count`/`last_claim_date` are accepted for compatibility with the
/// original page payload but ignored: the ledger derives both server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Farcaster user identifier (the page sends it as a number).
    #[serde(default, deserialize_with = "fid_from_string_or_number")]
    pub fid: Option<String>,
    /// Recipient wallet address.
    #[serde(default)]
    pub wallet_address: Option<WalletAddress>,
    /// Ignored; kept so older page builds keep working.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_count: Option<u32>,
    /// Ignored; kept so older page builds keep working.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_claim_date: Option<String>,
}

/// `POST /api/wallet` request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RewardRequest {
    /// Recipient wallet address.
    #[serde(default)]
    pub address: Option<WalletAddress>,
}

/// Successful transfer response for both claim and reward routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    pub success: bool,
    /// Transaction hash of the submitted transfer.
    pub hash: String,
}

/// `GET /api/claims` query parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ClaimsQuery {
    pub fid: Option<String>,
}

/// Accept a FID as either a JSON string or number.
fn fid_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|fid| match fid {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_address_well_formed() {
        assert!(WalletAddress::from("0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12").is_well_formed());
    }

    #[test]
    fn wallet_address_rejects_bad_formats() {
        for bad in [
            "",
            "0x",
            "742d35Cc6634C0532925a3b844Bc9e7595f4aB12",   // no prefix
            "0x742d35Cc6634C0532925a3b844Bc9e7595f4aB1",  // 39 chars
            "0x742d35Cc6634C0532925a3b844Bc9e7595f4aB123", // 41 chars
            "0xZZZd35Cc6634C0532925a3b844Bc9e7595f4aB12", // non-hex
        ] {
            assert!(!WalletAddress::from(bad).is_well_formed(), "accepted {bad:?}");
        }
    }

    #[test]
    fn claim_request_accepts_numeric_fid() {
        let body = r#"{"fid":42,"walletAddress":"0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12"}"#;
        let req: ClaimRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.fid.as_deref(), Some("42"));
        assert!(req.claim_count.is_none());
    }

    #[test]
    fn claim_request_tolerates_missing_fields() {
        let req: ClaimRequest = serde_json::from_str("{}").unwrap();
        assert!(req.fid.is_none());
        assert!(req.wallet_address.is_none());
    }

    #[test]
    fn claim_request_accepts_legacy_page_payload() {
        let body = r#"{"fid":"42","walletAddress":"0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12","claimCount":2,"lastClaimDate":"Mon Jan 01 2024"}"#;
        let req: ClaimRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.claim_count, Some(2));
        assert_eq!(req.last_claim_date.as_deref(), Some("Mon Jan 01 2024"));
    }

    #[test]
    fn claim_entry_serializes_camel_case() {
        let entry = ClaimEntry {
            claim_count: 1,
            last_claim_date: "Mon Jan 01 2024".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"claimCount":1,"lastClaimDate":"Mon Jan 01 2024"}"#);
    }
}
