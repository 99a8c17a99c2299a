// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Quick Auth token verification.

use jsonwebtoken::{decode, decode_header, Validation};

use super::claims::{AuthUser, QuickAuthClaims};
use super::error::AuthError;
use super::jwks::JwksManager;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Verifies Quick Auth bearer tokens against the auth server's JWKS.
#[derive(Clone)]
pub struct QuickAuthVerifier {
    jwks: JwksManager,
    issuer: String,
}

impl QuickAuthVerifier {
    pub fn new(jwks_url: impl Into<String>, issuer: impl Into<String>) -> Result<Self, AuthError> {
        Ok(Self {
            jwks: JwksManager::new(jwks_url)?,
            issuer: issuer.into(),
        })
    }

    /// Extract the bearer token from an `Authorization` header value.
    pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
        let value = header.ok_or(AuthError::MissingAuthHeader)?;
        value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)
    }

    /// Verify a token's signature, expiry, and issuer; return the user.
    pub async fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;

        let (decoding_key, algorithm) = if let Some(kid) = &header.kid {
            self.jwks.get_decoding_key(kid).await?
        } else {
            self.jwks.get_any_decoding_key().await?
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.set_issuer(&[&self.issuer]);
        validation.validate_aud = false;

        let token_data =
            decode::<QuickAuthClaims>(token, &decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
                    _ => AuthError::MalformedToken,
                }
            })?;

        AuthUser::from_claims(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_requires_header() {
        let err = QuickAuthVerifier::bearer_token(None).unwrap_err();
        assert!(matches!(err, AuthError::MissingAuthHeader));
    }

    #[test]
    fn bearer_token_requires_bearer_scheme() {
        let err = QuickAuthVerifier::bearer_token(Some("Basic abc")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthHeader));
    }

    #[test]
    fn bearer_token_strips_prefix() {
        let token = QuickAuthVerifier::bearer_token(Some("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[tokio::test]
    async fn verify_rejects_garbage_token() {
        let verifier = QuickAuthVerifier::new(
            "https://example.com/.well-known/jwks.json",
            "https://example.com",
        )
        .unwrap();

        // Fails at header decode, before any network fetch.
        let err = verifier.verify("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }
}
