//! # Referrals
//!
//! A participant may name a registered referrer when joining. The link
//! progresses with the referee's first tour:
//!
//! ```text
//! Pending ──(tour 1 paid)──► Active ──(tour 1 complete)──► CompletedTourOne
//! ```
//!
//! Reaching `CompletedTourOne` credits the configured bonus to the referrer,
//! exactly once.

use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::types::{Referral, ReferralStatus};

pub fn new_referral(referrer: Address, referee: Address, joined_at: u64) -> Referral {
    Referral {
        referrer,
        referee,
        bonus_earned: 0,
        status: ReferralStatus::Pending,
        joined_at,
    }
}

/// `Pending -> Active`. Returns `None` when there is nothing to change.
pub fn activate(referral: &Referral) -> Option<Referral> {
    if referral.status != ReferralStatus::Pending {
        return None;
    }
    let mut next = referral.clone();
    next.status = ReferralStatus::Active;
    Some(next)
}

/// Move to `CompletedTourOne` and record `bonus`. Returns `None` if the bonus
/// was already granted.
pub fn complete_tour_one(referral: &Referral, bonus: i128) -> Option<Referral> {
    if referral.status == ReferralStatus::CompletedTourOne {
        return None;
    }
    let mut next = referral.clone();
    next.status = ReferralStatus::CompletedTourOne;
    next.bonus_earned = bonus;
    Some(next)
}

/// All referral links created by `referrer`, in join order.
pub fn referrals_of(env: &Env, referrer: &Address) -> Vec<Referral> {
    let mut out = Vec::new(env);
    for referee in storage::referees_of(env, referrer).iter() {
        if let Some(r) = storage::load_referral(env, &referee) {
            out.push_back(r);
        }
    }
    out
}
