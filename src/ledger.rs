// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! In-memory claim ledger.
//!
//! Process-local map from FID to claim entry. Entries are created on first
//! claim and never deleted; counts do not survive a restart. A real
//! deployment would swap this for an external key-value store with a
//! compare-and-set so the cap check and increment become atomic; the
//! `get`/`set` surface is kept narrow for exactly that replacement.

use std::collections::HashMap;

use chrono::Utc;

use crate::models::ClaimEntry;

/// Maximum successful claims per user per calendar date.
pub const DAILY_CLAIM_LIMIT: u32 = 2;

/// Today's date in JS `Date.toDateString()` form, e.g. `"Mon Jan 01 2024"`.
///
/// The ledger and the page compare these strings exactly; a stale date
/// simply never matches today and resets the count on the next claim.
pub fn today_string() -> String {
    Utc::now().format("%a %b %d %Y").to_string()
}

/// Error returned when a user is already at the daily cap.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Daily claim limit reached (max {DAILY_CLAIM_LIMIT} per day)")]
pub struct DailyCapReached;

#[derive(Default)]
pub struct ClaimLedger {
    claims: HashMap<String, ClaimEntry>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `fid`, or the zero entry if the user never claimed.
    pub fn get(&self, fid: &str) -> ClaimEntry {
        self.claims.get(fid).cloned().unwrap_or_default()
    }

    /// Overwrite the entry for `fid`.
    pub fn set(&mut self, fid: &str, entry: ClaimEntry) {
        self.claims.insert(fid.to_string(), entry);
    }

    /// Derive the successor entry for a claim made on `today`.
    ///
    /// Counts reset whenever the stored date is not `today` (exact string
    /// match); otherwise the count increments up to [`DAILY_CLAIM_LIMIT`].
    /// The caller stores the returned entry only after the transfer
    /// succeeds, so a failed transfer leaves the ledger untouched.
    pub fn next_claim(&self, fid: &str, today: &str) -> Result<ClaimEntry, DailyCapReached> {
        let current = self.get(fid);

        let claim_count = if current.last_claim_date == today {
            if current.claim_count >= DAILY_CLAIM_LIMIT {
                return Err(DailyCapReached);
            }
            current.claim_count + 1
        } else {
            1
        };

        Ok(ClaimEntry {
            claim_count,
            last_claim_date: today.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "Mon Jan 01 2024";

    #[test]
    fn unknown_fid_returns_zero_entry() {
        let ledger = ClaimLedger::new();
        assert_eq!(ledger.get("42"), ClaimEntry::zero());
    }

    #[test]
    fn first_claim_starts_at_one() {
        let ledger = ClaimLedger::new();
        let entry = ledger.next_claim("42", TODAY).unwrap();
        assert_eq!(entry.claim_count, 1);
        assert_eq!(entry.last_claim_date, TODAY);
    }

    #[test]
    fn second_claim_same_day_increments() {
        let mut ledger = ClaimLedger::new();
        ledger.set("42", ledger.next_claim("42", TODAY).unwrap());

        let entry = ledger.next_claim("42", TODAY).unwrap();
        assert_eq!(entry.claim_count, 2);
    }

    #[test]
    fn third_claim_same_day_hits_cap() {
        let mut ledger = ClaimLedger::new();
        ledger.set(
            "42",
            ClaimEntry {
                claim_count: DAILY_CLAIM_LIMIT,
                last_claim_date: TODAY.into(),
            },
        );

        assert_eq!(ledger.next_claim("42", TODAY), Err(DailyCapReached));
    }

    #[test]
    fn new_day_resets_count() {
        let mut ledger = ClaimLedger::new();
        ledger.set(
            "42",
            ClaimEntry {
                claim_count: DAILY_CLAIM_LIMIT,
                last_claim_date: "Sun Dec 31 2023".into(),
            },
        );

        let entry = ledger.next_claim("42", TODAY).unwrap();
        assert_eq!(entry.claim_count, 1);
        assert_eq!(entry.last_claim_date, TODAY);
    }

    #[test]
    fn cap_check_does_not_mutate() {
        let mut ledger = ClaimLedger::new();
        ledger.set(
            "42",
            ClaimEntry {
                claim_count: DAILY_CLAIM_LIMIT,
                last_claim_date: TODAY.into(),
            },
        );

        let _ = ledger.next_claim("42", TODAY);
        assert_eq!(ledger.get("42").claim_count, DAILY_CLAIM_LIMIT);
    }

    #[test]
    fn today_string_matches_js_to_date_string_shape() {
        let today = today_string();
        // "Mon Jan 01 2024" - four space-separated fields, day zero-padded
        let parts: Vec<&str> = today.split(' ').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 2);
        assert_eq!(parts[3].len(), 4);
    }
}
