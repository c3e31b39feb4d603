//! # Tour state machine
//!
//! Governs one participant's progression through the seven tours of their
//! schedule.
//!
//! ```text
//! Locked ──(PreviousTourCompleted)──► WaitingPayment
//! WaitingPayment ──(PaymentConfirmed)──► InProgress
//! InProgress ──(ContributionReceived, partial)──► InProgress
//! InProgress ──(ContributionReceived, total reached)──► Complete
//! ```
//!
//! [`advance`] never mutates its input. It returns a fresh [`Tour`] with the
//! amounts and the status updated together, or an [`Error`] and nothing else.

use soroban_sdk::{Address, Env, Vec};

use crate::schedule;
use crate::types::{ConstellationType, Tour, TourStatus, TOUR_COUNT};
use crate::Error;

/// Input to [`advance`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TourEvent {
    /// The participant's own payment of `amount_offered` was confirmed.
    PaymentConfirmed(i128),
    /// One downstream member's contribution arrived.
    ContributionReceived(i128),
    /// The preceding tour reached `Complete`.
    PreviousTourCompleted,
}

impl Tour {
    /// Fresh record for `tour_number`. Tour 1 opens in `WaitingPayment`.
    pub fn new(participant: Address, kind: ConstellationType, tour_number: u32, created_at: u64) -> Self {
        let status = if tour_number == 1 {
            TourStatus::WaitingPayment
        } else {
            TourStatus::Locked
        };
        Tour {
            participant,
            constellation_type: kind,
            tour_number,
            amount_paid: 0,
            amount_received: 0,
            amount_kept: 0,
            status,
            created_at,
            completed_at: None,
        }
    }

    /// Tour 7 complete: nothing further to progress to.
    pub fn is_terminal(&self) -> bool {
        self.tour_number == TOUR_COUNT && self.status == TourStatus::Complete
    }
}

/// All seven records created for a participant at join time.
pub fn initial_tours(env: &Env, participant: &Address, kind: ConstellationType, now: u64) -> Vec<Tour> {
    let mut tours = Vec::new(env);
    for n in 1..=TOUR_COUNT {
        tours.push_back(Tour::new(participant.clone(), kind, n, now));
    }
    tours
}

/// Apply `event` to `tour`.
///
/// - `PaymentConfirmed` needs `WaitingPayment`; the amount must equal the
///   schedule's `amount_offered` (`InsufficientFunds` below it,
///   `InvalidAmount` above it or when non-positive).
/// - `ContributionReceived` needs `InProgress`; the running total may not
///   exceed the schedule's `amount_received`. Reaching it completes the tour.
/// - `PreviousTourCompleted` needs `Locked`.
///
/// Any other combination fails with `InvalidState`.
pub fn advance(tour: &Tour, event: TourEvent) -> Result<Tour, Error> {
    let entry = schedule::entry_for(tour.constellation_type, tour.tour_number)?;
    let mut next = tour.clone();

    match (tour.status, event) {
        (TourStatus::WaitingPayment, TourEvent::PaymentConfirmed(amount)) => {
            if amount <= 0 {
                return Err(Error::InvalidAmount);
            }
            if amount < entry.amount_offered {
                return Err(Error::InsufficientFunds);
            }
            if amount > entry.amount_offered {
                return Err(Error::InvalidAmount);
            }
            next.amount_paid = amount;
            next.status = TourStatus::InProgress;
        }
        (TourStatus::InProgress, TourEvent::ContributionReceived(amount)) => {
            if amount <= 0 {
                return Err(Error::InvalidAmount);
            }
            let received = tour
                .amount_received
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            if received > entry.amount_received {
                return Err(Error::InvalidAmount);
            }
            next.amount_received = received;
            next.amount_kept = kept_after(received, entry.next_payment_due);
            if received == entry.amount_received {
                next.status = TourStatus::Complete;
            }
        }
        (TourStatus::Locked, TourEvent::PreviousTourCompleted) => {
            next.status = TourStatus::WaitingPayment;
        }
        _ => return Err(Error::InvalidState),
    }

    Ok(next)
}

/// Surplus left once the next tour's payment is set aside.
fn kept_after(received: i128, next_payment_due: i128) -> i128 {
    if received > next_payment_due {
        received - next_payment_due
    } else {
        0
    }
}

/// The tour a participant is currently working on: the first one that is
/// not complete, or tour 7 once everything is done.
pub fn current_of(tours: &Vec<Tour>) -> Option<Tour> {
    let mut last = None;
    for t in tours.iter() {
        if t.status != TourStatus::Complete {
            return Some(t);
        }
        last = Some(t);
    }
    last
}
