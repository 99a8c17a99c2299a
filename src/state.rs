// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::QuickAuthVerifier;
use crate::blockchain::RewardSender;
use crate::config::Config;
use crate::ledger::ClaimLedger;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ledger: Arc<RwLock<ClaimLedger>>,
    pub sender: Arc<dyn RewardSender>,
    pub verifier: QuickAuthVerifier,
}

impl AppState {
    pub fn new(
        config: Config,
        ledger: ClaimLedger,
        sender: Arc<dyn RewardSender>,
        verifier: QuickAuthVerifier,
    ) -> Self {
        Self {
            config: Arc::new(config),
            ledger: Arc::new(RwLock::new(ledger)),
            sender,
            verifier,
        }
    }
}
