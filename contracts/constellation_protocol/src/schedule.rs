//! # Payout schedules
//!
//! Static per-constellation-size payout tables. Each table has exactly seven
//! rows, tour 1 through tour 7, in ascending order.
//!
//! The amounts are financial constants. They are never recomputed at runtime;
//! a wrong digit here changes the whole payout chain and must be treated as a
//! data-correctness defect.
//!
//! | Field              | Relation                                            |
//! |--------------------|-----------------------------------------------------|
//! | `amount_received`  | `amount_offered * member_count`                     |
//! | `next_payment_due` | `amount_offered` of the next tour, 0 on tour 7      |
//! | `amount_kept`      | `amount_received - next_payment_due`                |
//! | `cumulative_total` | tour 1 only; hardcoded projection of the full chain |

use soroban_sdk::{Env, Vec};

use crate::types::{ConstellationType, PayoutScheduleEntry, TOUR_COUNT};
use crate::Error;

const fn row(
    tour_number: u32,
    amount_offered: i128,
    amount_received: i128,
    amount_kept: i128,
    next_payment_due: i128,
) -> PayoutScheduleEntry {
    PayoutScheduleEntry {
        tour_number,
        amount_offered,
        amount_received,
        amount_kept,
        next_payment_due,
        cumulative_total: None,
    }
}

pub const TRIANGULUM_TOTAL: i128 = 7_789;
pub const PLEIADES_TOTAL: i128 = 1_575_747;

pub const TRIANGULUM_SCHEDULE: [PayoutScheduleEntry; 7] = [
    PayoutScheduleEntry {
        tour_number: 1,
        amount_offered: 21,
        amount_received: 63,
        amount_kept: 0,
        next_payment_due: 63,
        cumulative_total: Some(TRIANGULUM_TOTAL),
    },
    row(2, 63, 189, 89, 100),
    row(3, 100, 300, 100, 200),
    row(4, 200, 600, 100, 500),
    row(5, 500, 1_500, 500, 1_000),
    row(6, 1_000, 3_000, 1_000, 2_000),
    row(7, 2_000, 6_000, 6_000, 0),
];

pub const PLEIADES_SCHEDULE: [PayoutScheduleEntry; 7] = [
    PayoutScheduleEntry {
        tour_number: 1,
        amount_offered: 21,
        amount_received: 147,
        amount_kept: 47,
        next_payment_due: 100,
        cumulative_total: Some(PLEIADES_TOTAL),
    },
    row(2, 100, 700, 200, 500),
    row(3, 500, 3_500, 1_500, 2_000),
    row(4, 2_000, 14_000, 4_000, 10_000),
    row(5, 10_000, 70_000, 20_000, 50_000),
    row(6, 50_000, 350_000, 150_000, 200_000),
    row(7, 200_000, 1_400_000, 1_400_000, 0),
];

/// The full schedule for `kind`, tour 1 first.
pub fn schedule_for(kind: ConstellationType) -> &'static [PayoutScheduleEntry; 7] {
    match kind {
        ConstellationType::Triangulum => &TRIANGULUM_SCHEDULE,
        ConstellationType::Pleiades => &PLEIADES_SCHEDULE,
    }
}

/// Returns `true` if `tour_number` names a row of every schedule.
#[inline]
pub fn is_valid_tour(tour_number: u32) -> bool {
    (1..=TOUR_COUNT).contains(&tour_number)
}

/// Look up one row. Fails with `InvalidTourNumber` outside 1..=7.
pub fn entry_for(kind: ConstellationType, tour_number: u32) -> Result<PayoutScheduleEntry, Error> {
    if !is_valid_tour(tour_number) {
        return Err(Error::InvalidTourNumber);
    }
    Ok(schedule_for(kind)[(tour_number - 1) as usize].clone())
}

/// Projected payout of the complete seven-tour chain.
pub fn projected_total(kind: ConstellationType) -> i128 {
    match kind {
        ConstellationType::Triangulum => TRIANGULUM_TOTAL,
        ConstellationType::Pleiades => PLEIADES_TOTAL,
    }
}

/// Copy the schedule into a host `Vec` for the contract surface.
pub fn schedule_vec(env: &Env, kind: ConstellationType) -> Vec<PayoutScheduleEntry> {
    let mut out = Vec::new(env);
    for entry in schedule_for(kind).iter() {
        out.push_back(entry.clone());
    }
    out
}
