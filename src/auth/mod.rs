// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Farcaster Quick Auth verification.
//!
//! The mini-app page authenticates via `useQuickAuth`, which sends the
//! Quick Auth JWT as a bearer token to `/api/auth`. This module verifies
//! the token against the auth server's JWKS and extracts the user's FID.

pub mod claims;
pub mod error;
pub mod jwks;
pub mod verifier;

pub use claims::AuthUser;
pub use error::AuthError;
pub use verifier::QuickAuthVerifier;
