#![allow(dead_code)]

extern crate std;

use crate::schedule;
use crate::types::{
    Constellation, ConstellationStatus, ConstellationType, ContributionStatus, Tour, TourStatus,
    TOUR_COUNT,
};

/// INV-1: A schedule has seven rows, numbered 1..=7 in order.
pub fn assert_schedule_shape(kind: ConstellationType) {
    let rows = schedule::schedule_for(kind);
    assert_eq!(rows.len() as u32, TOUR_COUNT, "INV-1 violated: {:?} row count", kind);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.tour_number,
            i as u32 + 1,
            "INV-1 violated: {:?} row {} has tour_number {}",
            kind,
            i,
            row.tour_number
        );
    }
}

/// INV-2: Received is offered times the member count, on every row.
pub fn assert_receive_matches_offer(kind: ConstellationType) {
    for row in schedule::schedule_for(kind).iter() {
        assert_eq!(
            row.amount_received,
            row.amount_offered * kind.member_count() as i128,
            "INV-2 violated: {:?} tour {}: {} != {} * {}",
            kind,
            row.tour_number,
            row.amount_received,
            row.amount_offered,
            kind.member_count()
        );
    }
}

/// INV-3: The next payment is the next row's offer; kept is received minus it.
pub fn assert_chain_consistent(kind: ConstellationType) {
    let rows = schedule::schedule_for(kind);
    for (i, row) in rows.iter().enumerate() {
        let expected_next = rows.get(i + 1).map(|n| n.amount_offered).unwrap_or(0);
        assert_eq!(
            row.next_payment_due, expected_next,
            "INV-3 violated: {:?} tour {} next_payment_due",
            kind, row.tour_number
        );
        assert_eq!(
            row.amount_kept,
            row.amount_received - row.next_payment_due,
            "INV-3 violated: {:?} tour {} amount_kept",
            kind,
            row.tour_number
        );
    }
}

/// INV-4: Offered and received strictly increase; kept never decreases.
pub fn assert_monotonic(kind: ConstellationType) {
    let rows = schedule::schedule_for(kind);
    for pair in rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.amount_offered < b.amount_offered, "INV-4 violated: offered at tour {}", b.tour_number);
        assert!(a.amount_received < b.amount_received, "INV-4 violated: received at tour {}", b.tour_number);
        assert!(a.amount_kept <= b.amount_kept, "INV-4 violated: kept at tour {}", b.tour_number);
    }
}

pub fn assert_all_schedule_invariants(kind: ConstellationType) {
    assert_schedule_shape(kind);
    assert_receive_matches_offer(kind);
    assert_chain_consistent(kind);
    assert_monotonic(kind);
}

/// INV-5: Tour amounts stay within the schedule and agree with the status.
pub fn assert_tour_invariants(tour: &Tour) {
    let row = schedule::entry_for(tour.constellation_type, tour.tour_number)
        .expect("INV-5 violated: tour number outside the schedule");
    assert!(tour.amount_paid >= 0 && tour.amount_paid <= row.amount_offered, "INV-5 violated: amount_paid");
    assert!(
        tour.amount_received >= 0 && tour.amount_received <= row.amount_received,
        "INV-5 violated: amount_received {} exceeds {}",
        tour.amount_received,
        row.amount_received
    );
    assert!(tour.amount_kept <= tour.amount_received, "INV-5 violated: kept exceeds received");
    match tour.status {
        TourStatus::Locked | TourStatus::WaitingPayment => {
            assert_eq!(tour.amount_paid, 0, "INV-5 violated: unpaid tour has amount_paid");
            assert_eq!(tour.amount_received, 0, "INV-5 violated: unpaid tour has receipts");
        }
        TourStatus::InProgress => {
            assert_eq!(tour.amount_paid, row.amount_offered, "INV-5 violated: in-progress tour not fully paid");
            assert!(tour.amount_received < row.amount_received, "INV-5 violated: in-progress tour already full");
        }
        TourStatus::Complete => {
            assert_eq!(tour.amount_received, row.amount_received, "INV-5 violated: complete tour short");
            assert_eq!(tour.amount_kept, row.amount_kept, "INV-5 violated: complete tour kept mismatch");
        }
    }
}

/// INV-6: Only forward, single-step status transitions are allowed.
pub fn assert_valid_tour_transition(from: &TourStatus, to: &TourStatus) {
    let valid = matches!(
        (from, to),
        (TourStatus::Locked, TourStatus::WaitingPayment)
            | (TourStatus::WaitingPayment, TourStatus::InProgress)
            | (TourStatus::InProgress, TourStatus::InProgress)
            | (TourStatus::InProgress, TourStatus::Complete)
    );
    assert!(valid, "INV-6 violated: invalid tour transition from {:?} to {:?}", from, to);
}

/// INV-7: Cohort size, unique positions, and completion only at tour 7 fully paid.
pub fn assert_constellation_invariants(c: &Constellation) {
    let count = c.constellation_type.member_count();
    assert!(c.members.len() <= count, "INV-7 violated: {} members > {}", c.members.len(), count);
    assert!((1..=TOUR_COUNT).contains(&c.current_tour), "INV-7 violated: current_tour {}", c.current_tour);

    let mut seen = std::vec::Vec::new();
    for m in c.members.iter() {
        assert!(m.position >= 1 && m.position <= count, "INV-7 violated: position {}", m.position);
        assert!(!seen.contains(&m.position), "INV-7 violated: duplicate position {}", m.position);
        seen.push(m.position);
    }

    if c.status == ConstellationStatus::Completed {
        assert_eq!(c.current_tour, TOUR_COUNT, "INV-7 violated: completed before tour 7");
        assert!(
            c.members.iter().all(|m| m.contribution_status == ContributionStatus::Paid),
            "INV-7 violated: completed with unpaid members"
        );
    }
}
