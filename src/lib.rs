// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Beta Fun Waitlist - Farcaster Mini-App Reward Service
//!
//! Backend for the waitlist mini-app: Quick Auth verification, the
//! waitlist page state model, and fixed-amount ERC-20 reward claims on
//! Base with a soft per-user daily cap.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Farcaster Quick Auth verification
//! - `blockchain` - Reward token transfers on Base
//! - `ledger` - Process-local claim accounting
//! - `page` - Waitlist page state machine

pub mod api;
pub mod auth;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod page;
pub mod state;
