//! # Constellation Protocol Contract
//!
//! Root crate of the **constellation payout protocol**. A participant joins
//! with a constellation type, Triangulum (3 members) or Pléiades (7 members),
//! and climbs seven tours. At each tour they pay a fixed amount upstream and
//! collect the same amount from every member of their own constellation, in
//! which they sit as the *Alcyone*.
//!
//! The single Soroban contract `ConstellationProtocol` exposes:
//!
//! | Phase          | Entry Point(s)                                                  |
//! |----------------|-----------------------------------------------------------------|
//! | Bootstrap      | [`ConstellationProtocol::init`], `update_config`, `get_config`  |
//! | Role admin     | `grant_role`, `revoke_role`, `transfer_super_admin`, `set_treasurer` |
//! | Emergency      | `pause`, `unpause`, `is_paused`                                 |
//! | Schedules      | `schedule`, `schedule_entry`                                    |
//! | Participants   | [`ConstellationProtocol::join`], `confirm_payment`              |
//! | Constellations | `create_constellation`, `join_constellation`, [`ConstellationProtocol::record_contribution`] |
//! | Ledger         | `withdraw`, `settle_withdrawal`, `transfer_to_alcyone`          |
//! | Moderation     | `set_participant_status`                                        |
//! | Queries        | `get_tour(s)`, `current_tour`, `get_constellation`, `is_tour_complete`, `balance_of`, `transactions_of`, `referrals_of`, `stats` |
//!
//! ## Architecture
//!
//! The payout rules live in pure modules: [`schedule`] (the static tables),
//! [`tour`] (the per-tour state machine) and [`membership`] (cohort
//! contribution tracking). They take values and return new values or an
//! [`Error`]. Authorization is delegated to [`rbac`], persistence to
//! `storage`. This file only wires them together and emits events.
//!
//! Every entry point runs as one host transaction: a failure aborts the
//! invocation and discards every write it made, so a rejected call never
//! leaves partial state behind.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, Vec};

pub mod events;
pub mod ledger;
pub mod membership;
pub mod rbac;
pub mod referral;
pub mod schedule;
mod storage;
pub mod tour;
pub mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_tour;

pub use rbac::Role;
pub use tour::TourEvent;
pub use types::{
    Constellation, ConstellationMember, ConstellationStatus, ConstellationType, ContributionStatus,
    Participant, ParticipantStatus, PayoutScheduleEntry, ProtocolConfig, ProtocolStats, Referral, ReferralStatus,
    Tour, TourStatus, Transaction, TransactionKind, TransactionStatus,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidTourNumber = 1,
    /// The requested transition's precondition does not hold.
    InvalidState = 2,
    UnknownMember = 3,
    AlreadyPaid = 4,
    InsufficientFunds = 5,
    ConstellationFull = 6,
    NotAuthorized = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    ProtocolPaused = 10,
    InvalidAmount = 11,
    Overflow = 12,
    ParticipantNotFound = 13,
    AlreadyRegistered = 14,
    ConstellationNotFound = 15,
    AlreadyMember = 16,
    AlcyoneAlreadyAssigned = 17,
    ReferrerNotFound = 18,
    BelowMinimumWithdrawal = 19,
    TransactionNotFound = 20,
    TransactionAlreadySettled = 21,
    InvalidConfig = 22,
    /// A cohort only seats participants on the constellation's own schedule.
    ConstellationTypeMismatch = 23,
    ParticipantNotActive = 24,
}

#[contract]
pub struct ConstellationProtocol;

#[contractimpl]
impl ConstellationProtocol {
    // ─────────────────────────────────────────────────────────
    // Initialisation & configuration
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract, set the first SuperAdmin and the protocol
    /// parameters.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, super_admin: Address, config: ProtocolConfig) {
        super_admin.require_auth();
        if !config.is_valid() {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        check(&env, rbac::init_super_admin(&env, &super_admin));
        storage::set_config(&env, &config);
    }

    pub fn get_config(env: Env) -> ProtocolConfig {
        require_config(&env)
    }

    /// Replace the protocol parameters. `caller` must hold `SuperAdmin` or `Admin`.
    pub fn update_config(env: Env, caller: Address, config: ProtocolConfig) {
        caller.require_auth();
        require_config(&env);
        check(&env, rbac::require_admin_or_above(&env, &caller));
        if !config.is_valid() {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        storage::set_config(&env, &config);
        events::emit_config_updated(&env, caller, config);
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant `role` to `target`. Only `SuperAdmin` can grant `SuperAdmin`.
    pub fn grant_role(env: Env, caller: Address, target: Address, role: Role) {
        caller.require_auth();
        check(&env, rbac::grant_role(&env, &caller, &target, role));
    }

    /// Revoke any role from `target`. Cannot remove the SuperAdmin.
    pub fn revoke_role(env: Env, caller: Address, target: Address) {
        caller.require_auth();
        check(&env, rbac::revoke_role(&env, &caller, &target));
    }

    /// Transfer SuperAdmin to `new_super_admin`.
    pub fn transfer_super_admin(env: Env, current_super_admin: Address, new_super_admin: Address) {
        current_super_admin.require_auth();
        check(
            &env,
            rbac::transfer_super_admin(&env, &current_super_admin, &new_super_admin),
        );
    }

    /// Grant the Treasurer role to `treasurer`.
    pub fn set_treasurer(env: Env, caller: Address, treasurer: Address) {
        caller.require_auth();
        check(&env, rbac::require_admin_or_above(&env, &caller));
        check(&env, rbac::grant_role(&env, &caller, &treasurer, Role::Treasurer));
    }

    pub fn role_of(env: Env, address: Address) -> Option<Role> {
        rbac::get_role(&env, &address)
    }

    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, &address, &role)
    }

    // ─────────────────────────────────────────────────────────
    // Emergency control
    // ─────────────────────────────────────────────────────────

    /// Halt every mutating participant, constellation and ledger operation.
    pub fn pause(env: Env, caller: Address) {
        caller.require_auth();
        check(&env, rbac::require_admin_or_above(&env, &caller));
        storage::set_paused(&env, true);
        events::emit_protocol_paused(&env, caller);
    }

    pub fn unpause(env: Env, caller: Address) {
        caller.require_auth();
        check(&env, rbac::require_admin_or_above(&env, &caller));
        storage::set_paused(&env, false);
        events::emit_protocol_unpaused(&env, caller);
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Payout schedules
    // ─────────────────────────────────────────────────────────

    /// The seven rows of `kind`'s schedule, tour 1 first.
    pub fn schedule(env: Env, kind: ConstellationType) -> Vec<PayoutScheduleEntry> {
        schedule::schedule_vec(&env, kind)
    }

    /// One schedule row. Fails with `InvalidTourNumber` outside 1..=7.
    pub fn schedule_entry(env: Env, kind: ConstellationType, tour_number: u32) -> PayoutScheduleEntry {
        check(&env, schedule::entry_for(kind, tour_number))
    }

    /// Projected payout of the full seven-tour chain for `kind`.
    pub fn projected_total(_env: Env, kind: ConstellationType) -> i128 {
        schedule::projected_total(kind)
    }

    // ─────────────────────────────────────────────────────────
    // Participants & tours
    // ─────────────────────────────────────────────────────────

    /// Register `participant` on a `kind` schedule.
    ///
    /// Creates all seven tour records: tour 1 `WaitingPayment`, the rest
    /// `Locked`. An optional `referrer` must already be registered.
    pub fn join(
        env: Env,
        participant: Address,
        kind: ConstellationType,
        referrer: Option<Address>,
    ) -> Participant {
        require_live(&env);
        participant.require_auth();

        if storage::has_participant(&env, &participant) {
            panic_with_error!(&env, Error::AlreadyRegistered);
        }
        if let Some(r) = &referrer {
            if r == &participant {
                panic_with_error!(&env, Error::NotAuthorized);
            }
            match storage::load_participant(&env, r) {
                None => panic_with_error!(&env, Error::ReferrerNotFound),
                Some(p) if !p.is_active() => panic_with_error!(&env, Error::ParticipantNotActive),
                Some(_) => {}
            }
        }

        let now = env.ledger().timestamp();
        let record = Participant {
            address: participant.clone(),
            constellation_type: kind,
            referrer: referrer.clone(),
            joined_at: now,
            status: ParticipantStatus::Active,
        };
        let tours = tour::initial_tours(&env, &participant, kind, now);
        storage::save_new_participant(&env, &record, &tours);

        if let Some(r) = &referrer {
            storage::save_referral(&env, &referral::new_referral(r.clone(), participant.clone(), now));
            storage::index_referral(&env, r, &participant);
        }

        events::emit_participant_joined(&env, participant, kind, referrer);
        record
    }

    pub fn get_participant(env: Env, participant: Address) -> Participant {
        load_participant(&env, &participant)
    }

    /// Change a participant's standing. `caller` must hold `SuperAdmin` or `Admin`.
    ///
    /// Anything but `Active` blocks the participant from opening or joining
    /// a constellation, from referring, and from moving their balance.
    pub fn set_participant_status(env: Env, caller: Address, participant: Address, status: ParticipantStatus) {
        require_config(&env);
        caller.require_auth();
        check(&env, rbac::require_admin_or_above(&env, &caller));

        let mut record = load_participant(&env, &participant);
        record.status = status;
        storage::save_participant(&env, &record);
        events::emit_participant_status(&env, participant, status, caller);
    }

    pub fn get_tour(env: Env, participant: Address, tour_number: u32) -> Tour {
        load_tour(&env, &participant, tour_number)
    }

    /// All seven tour records of `participant`, tour 1 first.
    pub fn get_tours(env: Env, participant: Address) -> Vec<Tour> {
        load_participant(&env, &participant);
        let mut tours = Vec::new(&env);
        for n in 1..=types::TOUR_COUNT {
            tours.push_back(load_tour(&env, &participant, n));
        }
        tours
    }

    /// The first tour of `participant` that is not complete, or tour 7 once
    /// the whole chain is done.
    pub fn current_tour(env: Env, participant: Address) -> Tour {
        let tours = Self::get_tours(env.clone(), participant);
        check(&env, tour::current_of(&tours).ok_or(Error::ParticipantNotFound))
    }

    /// Confirm `participant`'s payment of `amount` for `tour_number`.
    ///
    /// The tour moves `WaitingPayment -> InProgress`. When the participant
    /// centres a constellation that is still on an earlier tour, the cohort
    /// rolls over to `tour_number` so contributions for it can be collected.
    ///
    /// `treasurer` must hold the `Treasurer` role and may not confirm their
    /// own payment.
    pub fn confirm_payment(
        env: Env,
        treasurer: Address,
        participant: Address,
        tour_number: u32,
        amount: i128,
    ) -> Tour {
        let config = require_live(&env);
        treasurer.require_auth();
        check(&env, rbac::require_treasurer(&env, &treasurer));
        if treasurer == participant {
            panic_with_error!(&env, Error::NotAuthorized);
        }

        let current = load_tour(&env, &participant, tour_number);
        let paid = check(&env, tour::advance(&current, TourEvent::PaymentConfirmed(amount)));

        let rolled = match storage::constellation_of(&env, &participant) {
            Some(id) => {
                let (cfg, state) = load_constellation_pair(&env, id);
                if tour_number > state.current_tour {
                    let next = membership::roll_over(
                        &state,
                        cfg.constellation_type,
                        tour_number,
                        config.retain_members_between_tours,
                    );
                    Some((id, state, check(&env, next)))
                } else {
                    None
                }
            }
            None => None,
        };

        check(&env, storage::add_total_paid(&env, amount).ok_or(Error::Overflow));
        storage::save_tour(&env, &paid);
        ledger::record(
            &env,
            &participant,
            TransactionKind::Sent,
            amount,
            TransactionStatus::Done,
            tour_number,
        );

        if tour_number == 1 {
            if let Some(active) = storage::load_referral(&env, &participant)
                .as_ref()
                .and_then(referral::activate)
            {
                storage::save_referral(&env, &active);
            }
        }

        if let Some((id, previous, state)) = rolled {
            if state.members.is_empty() {
                for m in previous.members.iter() {
                    storage::clear_seat(&env, &m.member);
                }
            }
            storage::save_constellation_state(&env, id, &state);
        }

        events::emit_tour_paid(&env, participant, tour_number, amount);
        paid
    }

    // ─────────────────────────────────────────────────────────
    // Constellations
    // ─────────────────────────────────────────────────────────

    /// Open a constellation centred on `alcyone`, on the Alcyone's own
    /// schedule type. A participant centres at most one constellation.
    pub fn create_constellation(env: Env, alcyone: Address) -> Constellation {
        require_live(&env);
        alcyone.require_auth();

        let participant = load_active_participant(&env, &alcyone);
        if storage::constellation_of(&env, &alcyone).is_some() {
            panic_with_error!(&env, Error::AlcyoneAlreadyAssigned);
        }

        let config = types::ConstellationConfig {
            id: storage::get_and_increment_constellation_id(&env),
            constellation_type: participant.constellation_type,
            alcyone: alcyone.clone(),
            created_at: env.ledger().timestamp(),
        };
        let state = membership::new_state(Vec::new(&env));
        storage::save_constellation(&env, &config, &state);

        events::emit_constellation_created(&env, config.id, alcyone, config.constellation_type);
        Constellation::from_parts(config, state)
    }

    /// Seat `member` at the next free position of `constellation_id`.
    ///
    /// The member must be an active participant on the constellation's own
    /// schedule type, and holds at most one seat at a time.
    pub fn join_constellation(env: Env, constellation_id: u64, member: Address) -> ConstellationMember {
        require_live(&env);
        member.require_auth();

        let (config, state) = load_constellation_pair(&env, constellation_id);
        let participant = load_active_participant(&env, &member);
        if participant.constellation_type != config.constellation_type {
            panic_with_error!(&env, Error::ConstellationTypeMismatch);
        }
        if member == config.alcyone || storage::seat_of(&env, &member).is_some() {
            panic_with_error!(&env, Error::AlreadyMember);
        }

        let (next, seat) = check(
            &env,
            membership::add_member(
                &state,
                config.constellation_type,
                member.clone(),
                env.ledger().timestamp(),
            ),
        );
        storage::save_constellation_state(&env, constellation_id, &next);
        storage::set_seat(&env, &member, constellation_id);

        events::emit_member_joined(&env, constellation_id, seat.position, member);
        seat
    }

    /// Record the current-tour contribution of the member at `position`.
    ///
    /// The member pays the schedule's `amount_offered` for the constellation's
    /// current tour, which is credited to the Alcyone's tour. The last
    /// contribution completes that tour: the Alcyone's kept amount goes to
    /// their balance, their next tour unlocks, and on tour 7 the
    /// constellation is completed.
    ///
    /// Recording a position twice fails with `AlreadyPaid` and changes nothing.
    /// `treasurer` must hold the `Treasurer` role and may not be the Alcyone.
    pub fn record_contribution(
        env: Env,
        treasurer: Address,
        constellation_id: u64,
        position: u32,
    ) -> Constellation {
        let config = require_live(&env);
        treasurer.require_auth();
        check(&env, rbac::require_treasurer(&env, &treasurer));

        let (cfg, state) = load_constellation_pair(&env, constellation_id);
        if treasurer == cfg.alcyone {
            panic_with_error!(&env, Error::NotAuthorized);
        }
        let tour_number = state.current_tour;
        let entry = check(&env, schedule::entry_for(cfg.constellation_type, tour_number));

        let mut next_state = check(&env, membership::record_contribution(&state, position));
        let alcyone_tour = load_tour(&env, &cfg.alcyone, tour_number);
        let mut credited = check(
            &env,
            tour::advance(&alcyone_tour, TourEvent::ContributionReceived(entry.amount_offered)),
        );

        let now = env.ledger().timestamp();
        let mut unlocked = None;
        if credited.status == TourStatus::Complete {
            credited.completed_at = Some(now);
            if credited.is_terminal() {
                next_state = membership::finish(&next_state);
            } else {
                let following = load_tour(&env, &cfg.alcyone, tour_number + 1);
                unlocked = Some(check(
                    &env,
                    tour::advance(&following, TourEvent::PreviousTourCompleted),
                ));
            }
        }

        storage::save_tour(&env, &credited);
        storage::save_constellation_state(&env, constellation_id, &next_state);
        ledger::record(
            &env,
            &cfg.alcyone,
            TransactionKind::Received,
            entry.amount_offered,
            TransactionStatus::Done,
            tour_number,
        );
        events::emit_contribution(&env, constellation_id, position, tour_number, entry.amount_offered);

        if credited.status == TourStatus::Complete {
            if credited.amount_kept > 0 {
                check(&env, ledger::credit(&env, &cfg.alcyone, credited.amount_kept));
            }
            events::emit_tour_completed(
                &env,
                cfg.alcyone.clone(),
                tour_number,
                credited.amount_received,
                credited.amount_kept,
            );
            if let Some(next_tour) = unlocked {
                storage::save_tour(&env, &next_tour);
                events::emit_tour_unlocked(&env, cfg.alcyone.clone(), next_tour.tour_number);
            }
            if tour_number == 1 {
                settle_referral_bonus(&env, &config, &cfg.alcyone);
            }
        }

        Constellation::from_parts(cfg, next_state)
    }

    /// True iff the cohort is full and every member paid the current tour.
    pub fn is_tour_complete(env: Env, constellation_id: u64) -> bool {
        let (cfg, state) = load_constellation_pair(&env, constellation_id);
        membership::is_tour_complete(&state, cfg.constellation_type)
    }

    pub fn get_constellation(env: Env, constellation_id: u64) -> Constellation {
        check(
            &env,
            storage::load_constellation(&env, constellation_id).ok_or(Error::ConstellationNotFound),
        )
    }

    /// ID of the constellation centred on `alcyone`, if any.
    pub fn constellation_of(env: Env, alcyone: Address) -> Option<u64> {
        storage::constellation_of(&env, &alcyone)
    }

    /// ID of the constellation `member` is seated in, if any.
    pub fn seat_of(env: Env, member: Address) -> Option<u64> {
        storage::seat_of(&env, &member)
    }

    // ─────────────────────────────────────────────────────────
    // Ledger
    // ─────────────────────────────────────────────────────────

    pub fn balance_of(env: Env, participant: Address) -> i128 {
        storage::get_balance(&env, &participant)
    }

    /// Request a withdrawal of `amount` from the available balance.
    ///
    /// The balance is debited immediately; the transaction stays `Pending`
    /// until a Treasurer settles it.
    pub fn withdraw(env: Env, participant: Address, amount: i128) -> Transaction {
        let config = require_live(&env);
        participant.require_auth();
        load_active_participant(&env, &participant);

        let balance = storage::get_balance(&env, &participant);
        check(&env, ledger::check_withdrawal(&config, balance, amount));
        check(&env, ledger::debit(&env, &participant, amount));
        check(&env, storage::add_total_withdrawn(&env, amount).ok_or(Error::Overflow));

        let tx = ledger::record(
            &env,
            &participant,
            TransactionKind::Withdrawal,
            amount,
            TransactionStatus::Pending,
            0,
        );
        events::emit_withdrawal_requested(&env, &tx);
        tx
    }

    /// Send `amount` of `participant`'s balance to the Alcyone of the
    /// constellation they are seated in. No minimum applies.
    ///
    /// Returns the sender-side `Transfer` transaction.
    pub fn transfer_to_alcyone(env: Env, participant: Address, amount: i128) -> Transaction {
        require_live(&env);
        participant.require_auth();
        load_active_participant(&env, &participant);

        let id = check(
            &env,
            storage::seat_of(&env, &participant).ok_or(Error::UnknownMember),
        );
        let (cfg, _) = load_constellation_pair(&env, id);
        let (sent, _) = check(&env, ledger::transfer(&env, &participant, &cfg.alcyone, amount));

        events::emit_transfer(&env, id, participant, cfg.alcyone, amount);
        sent
    }

    /// Mark a pending withdrawal as paid out. `treasurer` must hold `Treasurer`.
    pub fn settle_withdrawal(env: Env, treasurer: Address, tx_id: u64) -> Transaction {
        require_live(&env);
        treasurer.require_auth();
        check(&env, rbac::require_treasurer(&env, &treasurer));

        let tx = Self::get_transaction(env.clone(), tx_id);
        let settled = check(&env, ledger::settle(&tx));
        storage::save_transaction(&env, &settled);

        events::emit_withdrawal_settled(&env, tx_id, treasurer);
        settled
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Transaction {
        check(
            &env,
            storage::load_transaction(&env, tx_id).ok_or(Error::TransactionNotFound),
        )
    }

    /// Every transaction of `participant`, oldest first.
    pub fn transactions_of(env: Env, participant: Address) -> Vec<Transaction> {
        ledger::history(&env, &participant)
    }

    // ─────────────────────────────────────────────────────────
    // Referrals & statistics
    // ─────────────────────────────────────────────────────────

    pub fn get_referral(env: Env, referee: Address) -> Option<Referral> {
        storage::load_referral(&env, &referee)
    }

    pub fn referrals_of(env: Env, referrer: Address) -> Vec<Referral> {
        referral::referrals_of(&env, &referrer)
    }

    pub fn stats(env: Env) -> ProtocolStats {
        ProtocolStats {
            participants: storage::participant_count(&env),
            constellations: storage::constellation_count(&env),
            transactions: storage::transaction_count(&env),
            total_paid: storage::total_paid(&env),
            total_withdrawn: storage::total_withdrawn(&env),
        }
    }
}

// ─────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────

/// Unwrap `result` or abort the invocation with its error.
fn check<T>(env: &Env, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}

fn require_config(env: &Env) -> ProtocolConfig {
    check(env, storage::get_config(env).ok_or(Error::NotInitialized))
}

/// Initialised and not paused. Returns the active configuration.
fn require_live(env: &Env) -> ProtocolConfig {
    let config = require_config(env);
    if storage::is_paused(env) {
        panic_with_error!(env, Error::ProtocolPaused);
    }
    config
}

fn load_participant(env: &Env, participant: &Address) -> Participant {
    check(
        env,
        storage::load_participant(env, participant).ok_or(Error::ParticipantNotFound),
    )
}

fn load_active_participant(env: &Env, participant: &Address) -> Participant {
    let record = load_participant(env, participant);
    if !record.is_active() {
        panic_with_error!(env, Error::ParticipantNotActive);
    }
    record
}

fn load_tour(env: &Env, participant: &Address, tour_number: u32) -> Tour {
    if !schedule::is_valid_tour(tour_number) {
        panic_with_error!(env, Error::InvalidTourNumber);
    }
    check(
        env,
        storage::load_tour(env, participant, tour_number).ok_or(Error::ParticipantNotFound),
    )
}

fn load_constellation_pair(
    env: &Env,
    id: u64,
) -> (types::ConstellationConfig, types::ConstellationState) {
    check(
        env,
        storage::load_constellation_pair(env, id).ok_or(Error::ConstellationNotFound),
    )
}

/// Credit the referrer of `referee` once the referee's tour 1 completes.
fn settle_referral_bonus(env: &Env, config: &ProtocolConfig, referee: &Address) {
    let Some(link) = storage::load_referral(env, referee) else {
        return;
    };
    let Some(done) = referral::complete_tour_one(&link, config.referral_bonus) else {
        return;
    };
    storage::save_referral(env, &done);

    if done.bonus_earned > 0 {
        check(env, ledger::credit(env, &done.referrer, done.bonus_earned));
        let tx = ledger::record(
            env,
            &done.referrer,
            TransactionKind::Bonus,
            done.bonus_earned,
            TransactionStatus::Done,
            1,
        );
        events::emit_bonus_credited(env, &tx);
    }
}
