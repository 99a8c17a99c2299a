// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Quick Auth JWT claims and the authenticated user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AuthError;

/// Claims carried by a Farcaster Quick Auth token.
///
/// The `sub` claim is the user's FID. Quick Auth tokens are short-lived;
/// `exp` is validated by the verifier, `iat`/`exp` are echoed back to the
/// page for display.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickAuthClaims {
    /// Subject: the FID, as a decimal string
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration timestamp
    #[serde(default)]
    pub exp: Option<i64>,

    /// Issuer (the Quick Auth server)
    #[serde(default)]
    #[allow(dead_code)]
    pub iss: Option<String>,

    /// Audience (validated by jsonwebtoken, not read directly)
    #[serde(default)]
    #[allow(dead_code)]
    pub aud: Option<serde_json::Value>,
}

/// Verified user identity, in the shape the page's `AuthResponse` expects.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Farcaster user identifier.
    pub fid: u64,
    /// Token issue time (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    /// Token expiry time (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl AuthUser {
    /// Build from verified claims. A non-numeric `sub` is a malformed token.
    pub fn from_claims(claims: QuickAuthClaims) -> Result<Self, AuthError> {
        let fid = claims
            .sub
            .parse::<u64>()
            .map_err(|_| AuthError::MalformedToken)?;

        Ok(Self {
            fid,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> QuickAuthClaims {
        QuickAuthClaims {
            sub: "236815".to_string(),
            iat: Some(1700000000),
            exp: Some(1700003600),
            iss: Some("https://auth.farcaster.xyz".to_string()),
            aud: None,
        }
    }

    #[test]
    fn from_claims_parses_fid() {
        let user = AuthUser::from_claims(sample_claims()).unwrap();
        assert_eq!(user.fid, 236815);
        assert_eq!(user.issued_at, Some(1700000000));
        assert_eq!(user.expires_at, Some(1700003600));
    }

    #[test]
    fn from_claims_rejects_non_numeric_sub() {
        let mut claims = sample_claims();
        claims.sub = "not-a-fid".into();
        assert!(AuthUser::from_claims(claims).is_err());
    }

    #[test]
    fn auth_user_serializes_camel_case() {
        let user = AuthUser {
            fid: 42,
            issued_at: Some(1),
            expires_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"fid":42,"issuedAt":1}"#);
    }
}
