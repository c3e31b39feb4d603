//! # Types
//!
//! Shared data structures used across all modules of the constellation
//! protocol.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Constellation` is internally stored as two separate ledger entries:
//!
//! - [`ConstellationConfig`]: written once at creation; never mutated.
//! - [`ConstellationState`]: written on every join, contribution and
//!   tour roll-over.
//!
//! The public API exposes the reconstructed [`Constellation`] struct.
//!
//! ### Tour status as a Finite-State Machine
//!
//! [`TourStatus`] enforces a strict forward-only lifecycle per tour:
//!
//! ```text
//! Locked ──► WaitingPayment ──► InProgress ──► Complete
//! ```
//!
//! Tour 1 is created directly in `WaitingPayment`; tours 2..=7 start
//! `Locked`. See [`crate::tour`] for the guards.
//!
//! ### Amounts
//!
//! Every amount is an `i128` of whole currency units. There are no fractional
//! units and no floating point anywhere in the crate.

use soroban_sdk::{contracttype, Address, Vec};

/// Number of tours in every schedule.
pub const TOUR_COUNT: u32 = 7;

/// The two supported constellation sizes.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstellationType {
    /// Three members feed the Alcyone.
    Triangulum,
    /// Seven members feed the Alcyone.
    Pleiades,
}

impl ConstellationType {
    pub const fn member_count(&self) -> u32 {
        match self {
            ConstellationType::Triangulum => 3,
            ConstellationType::Pleiades => 7,
        }
    }
}

/// One row of a payout schedule.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutScheduleEntry {
    pub tour_number: u32,
    /// Paid upstream to the participant's Alcyone when the tour starts.
    pub amount_offered: i128,
    /// Collected once every downstream member has contributed.
    pub amount_received: i128,
    /// Disposable surplus once the next tour's payment is set aside.
    pub amount_kept: i128,
    /// Amount required to unlock the following tour; 0 on tour 7.
    pub next_payment_due: i128,
    /// Projected payout of the full seven-tour chain. Tour 1 only.
    pub cumulative_total: Option<i128>,
}

/// Lifecycle of one participant's occupancy of one schedule row.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TourStatus {
    /// Previous tour not yet complete.
    Locked,
    /// Unlocked; the participant must pay `amount_offered`.
    WaitingPayment,
    /// Paid; downstream contributions are being collected.
    InProgress,
    /// Full `amount_received` collected.
    Complete,
}

/// A participant's record for one tour number.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tour {
    pub participant: Address,
    pub constellation_type: ConstellationType,
    pub tour_number: u32,
    pub amount_paid: i128,
    pub amount_received: i128,
    pub amount_kept: i128,
    pub status: TourStatus,
    pub created_at: u64,
    pub completed_at: Option<u64>,
}

/// Account standing, set by an Admin. Only `Active` participants may start
/// new activity; confirmations of money already moved still go through.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParticipantStatus {
    Active,
    Inactive,
    Suspended,
}

/// Registered participant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub address: Address,
    pub constellation_type: ConstellationType,
    pub referrer: Option<Address>,
    pub joined_at: u64,
    pub status: ParticipantStatus,
}

impl Participant {
    pub fn is_active(&self) -> bool {
        self.status == ParticipantStatus::Active
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContributionStatus {
    Pending,
    Paid,
}

/// A downstream participant feeding one Alcyone's current tour.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstellationMember {
    /// 1..=member_count, unique within the cohort.
    pub position: u32,
    pub member: Address,
    pub contribution_status: ContributionStatus,
    pub joined_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstellationStatus {
    /// Cohort not yet full.
    Pending,
    /// Cohort full, tours running.
    Active,
    /// Tour 7 collected in full. Terminal.
    Completed,
}

/// Immutable constellation configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstellationConfig {
    pub id: u64,
    pub constellation_type: ConstellationType,
    pub alcyone: Address,
    pub created_at: u64,
}

/// Mutable constellation state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstellationState {
    pub current_tour: u32,
    pub status: ConstellationStatus,
    pub members: Vec<ConstellationMember>,
}

/// Full representation of a constellation returned by the public API.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constellation {
    /// Auto-incremented unique ID.
    pub id: u64,
    pub constellation_type: ConstellationType,
    /// Centre participant receiving the cohort's contributions.
    pub alcyone: Address,
    /// Tour of the Alcyone the cohort is currently feeding (1..=7).
    pub current_tour: u32,
    pub status: ConstellationStatus,
    pub members: Vec<ConstellationMember>,
    pub created_at: u64,
}

impl Constellation {
    pub fn from_parts(config: ConstellationConfig, state: ConstellationState) -> Self {
        Constellation {
            id: config.id,
            constellation_type: config.constellation_type,
            alcyone: config.alcyone,
            current_tour: state.current_tour,
            status: state.status,
            members: state.members,
            created_at: config.created_at,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionKind {
    /// Tour payment sent upstream.
    Sent,
    /// Contribution received from a cohort member.
    Received,
    /// Referral bonus credited.
    Bonus,
    /// Withdrawal of the available balance.
    Withdrawal,
    /// Balance moved between a cohort member and their Alcyone.
    Transfer,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionStatus {
    Pending,
    Done,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub participant: Address,
    pub kind: TransactionKind,
    pub amount: i128,
    pub status: TransactionStatus,
    /// Tour the movement belongs to; 0 when it is not tour-bound.
    pub tour_number: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReferralStatus {
    /// Referee registered.
    Pending,
    /// Referee paid tour 1.
    Active,
    /// Referee's tour 1 completed; bonus credited.
    CompletedTourOne,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Referral {
    pub referrer: Address,
    pub referee: Address,
    pub bonus_earned: i128,
    pub status: ReferralStatus,
    pub joined_at: u64,
}

/// Protocol parameters, set at `init` and adjustable by admins.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolConfig {
    /// Smallest amount a participant may withdraw.
    pub minimum_withdrawal: i128,
    /// Credited to a referrer when the referee completes tour 1.
    pub referral_bonus: i128,
    /// Keep the same cohort between tours (statuses reset to `Pending`)
    /// instead of clearing it for a new cohort.
    pub retain_members_between_tours: bool,
}

impl ProtocolConfig {
    pub const DEFAULT_MINIMUM_WITHDRAWAL: i128 = 50;
    pub const DEFAULT_REFERRAL_BONUS: i128 = 5;

    pub fn standard() -> Self {
        ProtocolConfig {
            minimum_withdrawal: Self::DEFAULT_MINIMUM_WITHDRAWAL,
            referral_bonus: Self::DEFAULT_REFERRAL_BONUS,
            retain_members_between_tours: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.minimum_withdrawal >= 0 && self.referral_bonus >= 0
    }
}

/// Aggregate counters returned by `stats`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProtocolStats {
    pub participants: u64,
    pub constellations: u64,
    pub transactions: u64,
    /// Sum of confirmed tour payments.
    pub total_paid: i128,
    /// Sum of requested withdrawals.
    pub total_withdrawn: i128,
}
