// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Waitlist page state machine.
//!
//! Pure model of the mini-app page: auth handshake state, wallet-context
//! inspection, email validation, and claim gating. Rendering and network
//! I/O live in the host; this module decides what happens next and keeps
//! the single user-visible status string. One state machine serves both
//! page variants: `claim_flow_enabled` selects whether the inline claim
//! sub-flow is shown.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::ledger::DAILY_CLAIM_LIMIT;
use crate::models::{ClaimEntry, WalletAddress};

/// Status shown when the daily cap has been reached.
pub const CLAIM_LIMIT_MESSAGE: &str = "You've already claimed your daily rewards (max 2 per day)";

/// User/wallet context supplied by the mini-app host runtime.
///
/// The connected wallet may arrive as `address` or `custodyAddress`
/// depending on the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub custody_address: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl HostContext {
    /// The connected wallet address, if any.
    pub fn wallet_address(&self) -> Option<&str> {
        self.address.as_deref().or(self.custody_address.as_deref())
    }
}

/// Authentication handshake state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated(AuthUser),
    Failed(String),
}

/// Composite page phase, for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unauthenticated,
    Authenticating,
    AuthFailed,
    WalletDisconnected,
    ClaimAvailable,
    ClaimExhausted,
    Claiming,
}

/// Outcome of a form submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to the confirmation view.
    Navigate,
    /// Rejected; the status string explains why.
    Rejected,
}

/// Payload for a claim request the host should POST to `/api/claim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimAttempt {
    pub fid: u64,
    pub wallet_address: WalletAddress,
}

pub struct WaitlistPage {
    auth: AuthState,
    frame_ready: bool,
    wallet: Option<WalletAddress>,
    email: String,
    status: String,
    claim_count: u32,
    last_claim_date: String,
    claiming: bool,
    claim_flow_enabled: bool,
}

impl WaitlistPage {
    pub fn new(claim_flow_enabled: bool) -> Self {
        Self {
            auth: AuthState::Unauthenticated,
            frame_ready: false,
            wallet: None,
            email: String::new(),
            status: String::new(),
            claim_count: 0,
            last_claim_date: String::new(),
            claiming: false,
            claim_flow_enabled,
        }
    }

    /// Signal frame-ready to the host. Emitted once on mount; returns
    /// whether this call produced the signal.
    pub fn mount(&mut self) -> bool {
        if self.frame_ready {
            return false;
        }
        self.frame_ready = true;
        true
    }

    pub fn begin_auth(&mut self) {
        self.auth = AuthState::Authenticating;
    }

    pub fn auth_succeeded(&mut self, user: AuthUser) {
        self.auth = AuthState::Authenticated(user);
    }

    pub fn auth_failed(&mut self, message: impl Into<String>) {
        self.auth = AuthState::Failed(message.into());
    }

    /// Inspect the host context for a connected wallet. Only meaningful
    /// once authenticated; the page ignores context before that.
    pub fn apply_host_context(&mut self, context: &HostContext) {
        if !matches!(self.auth, AuthState::Authenticated(_)) {
            return;
        }
        self.wallet = context.wallet_address().map(WalletAddress::from);
    }

    /// The connect-wallet button: the host either already exposes an
    /// address or the user must connect through their Farcaster client.
    pub fn connect_wallet(&mut self, context: &HostContext) {
        match context.wallet_address() {
            Some(address) => {
                self.wallet = Some(WalletAddress::from(address));
                self.status.clear();
            }
            None => {
                self.status = "Please connect your wallet through the Farcaster client".to_string();
            }
        }
    }

    /// Seed claim counters from `/api/claims`.
    pub fn load_claims(&mut self, entry: ClaimEntry) {
        self.claim_count = entry.claim_count;
        self.last_claim_date = entry.last_claim_date;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn claim_count(&self) -> u32 {
        self.claim_count
    }

    /// Whether the claim sub-flow is visible at all.
    pub fn claim_flow_shown(&self) -> bool {
        self.claim_flow_enabled && matches!(self.auth, AuthState::Authenticated(_))
    }

    /// Composite phase for rendering.
    pub fn phase(&self, today: &str) -> Phase {
        match &self.auth {
            AuthState::Unauthenticated => Phase::Unauthenticated,
            AuthState::Authenticating => Phase::Authenticating,
            AuthState::Failed(_) => Phase::AuthFailed,
            AuthState::Authenticated(_) => {
                if self.wallet.is_none() {
                    Phase::WalletDisconnected
                } else if self.claiming {
                    Phase::Claiming
                } else if self.cap_reached(today) {
                    Phase::ClaimExhausted
                } else {
                    Phase::ClaimAvailable
                }
            }
        }
    }

    /// Validate and submit the waitlist form.
    ///
    /// Auth must have resolved, then the email must be present and
    /// well-formed. Every rejection overwrites the status string.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.status.clear();

        match &self.auth {
            AuthState::Authenticating => {
                self.status = "Please wait while we verify your identity...".to_string();
                return SubmitOutcome::Rejected;
            }
            AuthState::Unauthenticated | AuthState::Failed(_) => {
                self.status = "Please authenticate to join the waitlist".to_string();
                return SubmitOutcome::Rejected;
            }
            AuthState::Authenticated(_) => {}
        }

        if self.email.is_empty() {
            self.status = "Please enter your email address".to_string();
            return SubmitOutcome::Rejected;
        }

        if !validate_email(&self.email) {
            self.status = "Please enter a valid email address".to_string();
            return SubmitOutcome::Rejected;
        }

        SubmitOutcome::Navigate
    }

    /// Whether the claim button is disabled.
    pub fn claim_disabled(&self, today: &str) -> bool {
        self.claiming || self.cap_reached(today)
    }

    /// Attempt a claim. Returns the request payload the host should POST,
    /// or `None` when the attempt is rejected (status explains why when
    /// the cap is the reason).
    pub fn begin_claim(&mut self, today: &str) -> Option<ClaimAttempt> {
        let AuthState::Authenticated(user) = &self.auth else {
            return None;
        };
        let fid = user.fid;
        let Some(wallet) = self.wallet.clone() else {
            self.status = "Wallet not connected".to_string();
            return None;
        };
        if self.claiming {
            return None;
        }

        if self.cap_reached(today) {
            self.status = CLAIM_LIMIT_MESSAGE.to_string();
            return None;
        }

        self.claiming = true;
        self.status.clear();

        Some(ClaimAttempt {
            fid,
            wallet_address: wallet,
        })
    }

    /// Record a successful claim and surface the transaction hash.
    pub fn finish_claim_success(&mut self, hash: &str, today: &str) {
        self.claim_count += 1;
        self.last_claim_date = today.to_string();
        self.claiming = false;
        self.status = format!("Successfully claimed 0.001 reward tokens! Tx: {hash}");
    }

    pub fn finish_claim_failure(&mut self) {
        self.claiming = false;
        self.status = "Failed to claim reward".to_string();
    }

    /// Exact string match against today's date, not calendar arithmetic:
    /// a different date string always re-enables the claim.
    fn cap_reached(&self, today: &str) -> bool {
        self.last_claim_date == today && self.claim_count >= DAILY_CLAIM_LIMIT
    }
}

/// Email format check: non-whitespace/non-@ run, `@`, run, `.`, run.
pub fn validate_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}
