//! # Constellation membership tracker
//!
//! Aggregates the contribution status of each cohort member into the
//! tour-completion signal for the Alcyone.
//!
//! Every function takes the current [`ConstellationState`] by reference and
//! returns a new one, so a rejected call leaves the stored state exactly as it
//! was.

use soroban_sdk::{Address, Vec};

use crate::types::{
    ConstellationMember, ConstellationState, ConstellationStatus, ConstellationType,
    ContributionStatus, TOUR_COUNT,
};
use crate::Error;

/// Initial state for a freshly created constellation.
pub fn new_state(members: Vec<ConstellationMember>) -> ConstellationState {
    ConstellationState {
        current_tour: 1,
        status: ConstellationStatus::Pending,
        members,
    }
}

fn find_position(state: &ConstellationState, position: u32) -> Option<u32> {
    for (i, m) in state.members.iter().enumerate() {
        if m.position == position {
            return Some(i as u32);
        }
    }
    None
}

fn is_member(state: &ConstellationState, address: &Address) -> bool {
    state.members.iter().any(|m| &m.member == address)
}

/// Seat `member` at the next free position.
///
/// Filling the last seat moves a `Pending` constellation to `Active`.
pub fn add_member(
    state: &ConstellationState,
    kind: ConstellationType,
    member: Address,
    joined_at: u64,
) -> Result<(ConstellationState, ConstellationMember), Error> {
    if state.status == ConstellationStatus::Completed {
        return Err(Error::InvalidState);
    }
    let count = kind.member_count();
    if state.members.len() >= count {
        return Err(Error::ConstellationFull);
    }
    if is_member(state, &member) {
        return Err(Error::AlreadyMember);
    }

    let seat = ConstellationMember {
        position: state.members.len() + 1,
        member,
        contribution_status: ContributionStatus::Pending,
        joined_at,
    };

    let mut next = state.clone();
    next.members.push_back(seat.clone());
    if next.members.len() == count {
        next.status = ConstellationStatus::Active;
    }
    Ok((next, seat))
}

/// Mark the member at `position` as paid for the current tour.
pub fn record_contribution(state: &ConstellationState, position: u32) -> Result<ConstellationState, Error> {
    let index = find_position(state, position).ok_or(Error::UnknownMember)?;
    let mut seat = state.members.get_unchecked(index);
    if seat.contribution_status == ContributionStatus::Paid {
        return Err(Error::AlreadyPaid);
    }
    seat.contribution_status = ContributionStatus::Paid;

    let mut next = state.clone();
    next.members.set(index, seat);
    Ok(next)
}

/// Number of members marked paid for the current tour.
pub fn paid_count(state: &ConstellationState) -> u32 {
    state
        .members
        .iter()
        .filter(|m| m.contribution_status == ContributionStatus::Paid)
        .count() as u32
}

/// True iff the cohort is full and every member has paid.
pub fn is_tour_complete(state: &ConstellationState, kind: ConstellationType) -> bool {
    state.members.len() == kind.member_count() && paid_count(state) == kind.member_count()
}

/// Close the last tour: the constellation is done for good.
pub fn finish(state: &ConstellationState) -> ConstellationState {
    let mut next = state.clone();
    next.status = ConstellationStatus::Completed;
    next
}

/// Move the cohort on to `next_tour`.
///
/// With `retain_members` the same members stay seated and their statuses
/// reset to `Pending`; otherwise the seats are emptied for a new cohort and
/// the constellation falls back to `Pending` until it fills again.
pub fn roll_over(
    state: &ConstellationState,
    kind: ConstellationType,
    next_tour: u32,
    retain_members: bool,
) -> Result<ConstellationState, Error> {
    if next_tour <= state.current_tour || next_tour > TOUR_COUNT {
        return Err(Error::InvalidTourNumber);
    }
    if state.status == ConstellationStatus::Completed {
        return Err(Error::InvalidState);
    }

    let mut members = Vec::new(state.members.env());
    if retain_members {
        for mut m in state.members.iter() {
            m.contribution_status = ContributionStatus::Pending;
            members.push_back(m);
        }
    }

    let status = if members.len() == kind.member_count() {
        ConstellationStatus::Active
    } else {
        ConstellationStatus::Pending
    };

    Ok(ConstellationState {
        current_tour: next_tour,
        status,
        members,
    })
}
