#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::invariants::{assert_tour_invariants, assert_valid_tour_transition};
use crate::tour::{self, advance, TourEvent};
use crate::types::{ConstellationType, Tour, TourStatus};
use crate::Error;

fn tour(env: &Env, kind: ConstellationType, n: u32) -> Tour {
    Tour::new(Address::generate(env), kind, n, 0)
}

fn paid_pleiades_tour_one(env: &Env) -> Tour {
    let t = tour(env, ConstellationType::Pleiades, 1);
    advance(&t, TourEvent::PaymentConfirmed(21)).unwrap()
}

#[test]
fn test_initial_statuses() {
    let env = Env::default();
    let participant = Address::generate(&env);
    let tours = tour::initial_tours(&env, &participant, ConstellationType::Triangulum, 42);

    assert_eq!(tours.len(), 7);
    for t in tours.iter() {
        let expected = if t.tour_number == 1 {
            TourStatus::WaitingPayment
        } else {
            TourStatus::Locked
        };
        assert_eq!(t.status, expected);
        assert_eq!(t.participant, participant);
        assert_eq!(t.created_at, 42);
        assert_tour_invariants(&t);
    }
}

#[test]
fn test_locked_tour_rejects_payment() {
    let env = Env::default();
    let locked = tour(&env, ConstellationType::Pleiades, 2);
    assert_eq!(
        advance(&locked, TourEvent::PaymentConfirmed(100)),
        Err(Error::InvalidState)
    );
}

#[test]
fn test_payment_moves_to_in_progress() {
    let env = Env::default();
    let t = tour(&env, ConstellationType::Pleiades, 1);
    let paid = advance(&t, TourEvent::PaymentConfirmed(21)).unwrap();

    assert_valid_tour_transition(&t.status, &paid.status);
    assert_eq!(paid.status, TourStatus::InProgress);
    assert_eq!(paid.amount_paid, 21);
    assert_eq!(paid.amount_received, 0);
    assert_tour_invariants(&paid);
}

#[test]
fn test_underpayment_is_insufficient_funds() {
    let env = Env::default();
    let t = tour(&env, ConstellationType::Pleiades, 1);
    assert_eq!(
        advance(&t, TourEvent::PaymentConfirmed(20)),
        Err(Error::InsufficientFunds)
    );
}

#[test]
fn test_overpayment_and_non_positive_are_invalid_amount() {
    let env = Env::default();
    let t = tour(&env, ConstellationType::Pleiades, 1);
    assert_eq!(advance(&t, TourEvent::PaymentConfirmed(22)), Err(Error::InvalidAmount));
    assert_eq!(advance(&t, TourEvent::PaymentConfirmed(0)), Err(Error::InvalidAmount));
    assert_eq!(advance(&t, TourEvent::PaymentConfirmed(-21)), Err(Error::InvalidAmount));
}

#[test]
fn test_double_payment_rejected() {
    let env = Env::default();
    let paid = paid_pleiades_tour_one(&env);
    assert_eq!(
        advance(&paid, TourEvent::PaymentConfirmed(21)),
        Err(Error::InvalidState)
    );
}

#[test]
fn test_contribution_before_payment_rejected() {
    let env = Env::default();
    let t = tour(&env, ConstellationType::Pleiades, 1);
    assert_eq!(
        advance(&t, TourEvent::ContributionReceived(21)),
        Err(Error::InvalidState)
    );
}

#[test]
fn test_contributions_complete_tour_at_schedule_total() {
    let env = Env::default();
    let mut t = paid_pleiades_tour_one(&env);

    for i in 1..=6 {
        let next = advance(&t, TourEvent::ContributionReceived(21)).unwrap();
        assert_valid_tour_transition(&t.status, &next.status);
        assert_eq!(next.status, TourStatus::InProgress);
        assert_eq!(next.amount_received, 21 * i);
        assert_tour_invariants(&next);
        t = next;
    }

    let done = advance(&t, TourEvent::ContributionReceived(21)).unwrap();
    assert_eq!(done.status, TourStatus::Complete);
    assert_eq!(done.amount_received, 147);
    assert_eq!(done.amount_kept, 47);
    assert_tour_invariants(&done);
}

#[test]
fn test_kept_amount_waits_for_next_payment_reserve() {
    let env = Env::default();
    let t = paid_pleiades_tour_one(&env);

    // 5 * 21 = 105 received, 100 reserved for tour 2.
    let mut current = t;
    for _ in 0..5 {
        current = advance(&current, TourEvent::ContributionReceived(21)).unwrap();
    }
    assert_eq!(current.amount_received, 105);
    assert_eq!(current.amount_kept, 5);

    let early = advance(
        &paid_pleiades_tour_one(&env),
        TourEvent::ContributionReceived(21),
    )
    .unwrap();
    assert_eq!(early.amount_kept, 0);
}

#[test]
fn test_contribution_past_schedule_total_rejected() {
    let env = Env::default();
    let t = paid_pleiades_tour_one(&env);
    assert_eq!(
        advance(&t, TourEvent::ContributionReceived(148)),
        Err(Error::InvalidAmount)
    );
    assert_eq!(
        advance(&t, TourEvent::ContributionReceived(0)),
        Err(Error::InvalidAmount)
    );
}

#[test]
fn test_contribution_overflow_detected() {
    let env = Env::default();
    let mut t = paid_pleiades_tour_one(&env);
    t.amount_received = i128::MAX;
    assert_eq!(
        advance(&t, TourEvent::ContributionReceived(21)),
        Err(Error::Overflow)
    );
}

#[test]
fn test_complete_tour_is_final() {
    let env = Env::default();
    let mut t = paid_pleiades_tour_one(&env);
    for _ in 0..7 {
        t = advance(&t, TourEvent::ContributionReceived(21)).unwrap();
    }
    assert_eq!(t.status, TourStatus::Complete);
    assert_eq!(advance(&t, TourEvent::ContributionReceived(21)), Err(Error::InvalidState));
    assert_eq!(advance(&t, TourEvent::PaymentConfirmed(21)), Err(Error::InvalidState));
    assert_eq!(advance(&t, TourEvent::PreviousTourCompleted), Err(Error::InvalidState));
}

#[test]
fn test_unlock_only_from_locked() {
    let env = Env::default();
    let locked = tour(&env, ConstellationType::Triangulum, 3);
    let open = advance(&locked, TourEvent::PreviousTourCompleted).unwrap();
    assert_eq!(open.status, TourStatus::WaitingPayment);
    assert_valid_tour_transition(&locked.status, &open.status);

    assert_eq!(
        advance(&open, TourEvent::PreviousTourCompleted),
        Err(Error::InvalidState)
    );
}

#[test]
fn test_failed_advance_leaves_input_untouched() {
    let env = Env::default();
    let t = paid_pleiades_tour_one(&env);
    let before = t.clone();
    let _ = advance(&t, TourEvent::ContributionReceived(1_000));
    assert_eq!(t, before);
}

#[test]
fn test_tour_seven_is_terminal() {
    let env = Env::default();
    let mut t = tour(&env, ConstellationType::Triangulum, 7);
    t = advance(&t, TourEvent::PreviousTourCompleted).unwrap();
    t = advance(&t, TourEvent::PaymentConfirmed(2_000)).unwrap();
    assert!(!t.is_terminal());
    for _ in 0..3 {
        t = advance(&t, TourEvent::ContributionReceived(2_000)).unwrap();
    }
    assert!(t.is_terminal());
    assert_eq!(t.amount_kept, 6_000);
}

#[test]
fn test_out_of_range_tour_record_rejected() {
    let env = Env::default();
    let t = tour(&env, ConstellationType::Pleiades, 8);
    assert_eq!(
        advance(&t, TourEvent::PreviousTourCompleted),
        Err(Error::InvalidTourNumber)
    );
}

#[test]
fn test_current_of_picks_first_incomplete() {
    let env = Env::default();
    let participant = Address::generate(&env);
    let mut tours = tour::initial_tours(&env, &participant, ConstellationType::Pleiades, 0);
    assert_eq!(tour::current_of(&tours).unwrap().tour_number, 1);

    let mut first = tours.get_unchecked(0);
    first.status = TourStatus::Complete;
    tours.set(0, first);
    assert_eq!(tour::current_of(&tours).unwrap().tour_number, 2);

    for i in 0..7 {
        let mut t = tours.get_unchecked(i);
        t.status = TourStatus::Complete;
        tours.set(i, t);
    }
    assert_eq!(tour::current_of(&tours).unwrap().tour_number, 7);
}
