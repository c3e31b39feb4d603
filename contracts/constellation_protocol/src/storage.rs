//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers. This module is the only
//! place that touches `env.storage()` outside of [`crate::rbac`].
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                  | Type             | Description                        |
//! |----------------------|------------------|------------------------------------|
//! | `Config`             | `ProtocolConfig` | Protocol parameters                |
//! | `Paused`             | `bool`           | Emergency stop flag                |
//! | `ParticipantCount`   | `u64`            | Registered participants            |
//! | `ConstellationCount` | `u64`            | Auto-increment constellation ID    |
//! | `TransactionCount`   | `u64`            | Auto-increment transaction ID      |
//! | `TotalPaid`          | `i128`           | Sum of confirmed tour payments     |
//! | `TotalWithdrawn`     | `i128`           | Sum of requested withdrawals       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type                  | Description                        |
//! |-----------------------|-----------------------|------------------------------------|
//! | `Participant(addr)`   | `Participant`         | Registration record                |
//! | `Tour(addr, n)`       | `Tour`                | One record per participant & tour  |
//! | `ConstConfig(id)`     | `ConstellationConfig` | Immutable constellation config     |
//! | `ConstState(id)`      | `ConstellationState`  | Mutable cohort / tour state        |
//! | `AlcyoneOf(addr)`     | `u64`                 | Constellation centred on `addr`    |
//! | `SeatOf(addr)`        | `u64`                 | Constellation `addr` is seated in  |
//! | `Balance(addr)`       | `i128`                | Available balance                  |
//! | `Tx(id)`              | `Transaction`         | Ledger movement                    |
//! | `TxIndex(addr)`       | `Vec<u64>`            | Transaction IDs of a participant   |
//! | `Referral(referee)`   | `Referral`            | Referral link of a referee         |
//! | `Referrals(referrer)` | `Vec<Address>`        | Referees brought in by `referrer`  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Why split Config and State?
//!
//! Contributions are the high-frequency write. Only the cohort state changes
//! on each of them, so the Alcyone address and type are kept out of that entry.

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::types::{
    Constellation, ConstellationConfig, ConstellationState, Participant, ProtocolConfig,
    Referral, Tour, Transaction,
};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Paused,
    ParticipantCount,
    ConstellationCount,
    TransactionCount,
    TotalPaid,
    TotalWithdrawn,
    Participant(Address),
    Tour(Address, u32),
    ConstConfig(u64),
    ConstState(u64),
    AlcyoneOf(Address),
    SeatOf(Address),
    Balance(Address),
    Tx(u64),
    TxIndex(Address),
    Referral(Address),
    Referrals(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Option<ProtocolConfig> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ProtocolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

fn get_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Read and increment the counter at `key`.
/// Returns the value before the increment.
fn get_and_increment(env: &Env, key: &DataKey) -> u64 {
    bump_instance(env);
    let current = get_counter(env, key);
    env.storage().instance().set(key, &(current + 1));
    current
}

pub fn participant_count(env: &Env) -> u64 {
    get_counter(env, &DataKey::ParticipantCount)
}

pub fn constellation_count(env: &Env) -> u64 {
    get_counter(env, &DataKey::ConstellationCount)
}

pub fn transaction_count(env: &Env) -> u64 {
    get_counter(env, &DataKey::TransactionCount)
}

fn get_total(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn total_paid(env: &Env) -> i128 {
    get_total(env, &DataKey::TotalPaid)
}

pub fn total_withdrawn(env: &Env) -> i128 {
    get_total(env, &DataKey::TotalWithdrawn)
}

/// Add `amount` to the running total at `key`. Returns `None` on overflow.
fn add_to_total(env: &Env, key: &DataKey, amount: i128) -> Option<i128> {
    let next = get_total(env, key).checked_add(amount)?;
    env.storage().instance().set(key, &next);
    bump_instance(env);
    Some(next)
}

pub fn add_total_paid(env: &Env, amount: i128) -> Option<i128> {
    add_to_total(env, &DataKey::TotalPaid, amount)
}

pub fn add_total_withdrawn(env: &Env, amount: i128) -> Option<i128> {
    add_to_total(env, &DataKey::TotalWithdrawn, amount)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn load<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value: Option<V> = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn store<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ─────────────────────────────────────────────────────────
// Participants & tours
// ─────────────────────────────────────────────────────────

pub fn has_participant(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Participant(address.clone()))
}

pub fn load_participant(env: &Env, address: &Address) -> Option<Participant> {
    load(env, &DataKey::Participant(address.clone()))
}

/// Save a new participant and all of their tour records.
pub fn save_new_participant(env: &Env, participant: &Participant, tours: &Vec<Tour>) {
    save_participant(env, participant);
    for tour in tours.iter() {
        save_tour(env, &tour);
    }
    get_and_increment(env, &DataKey::ParticipantCount);
}

pub fn save_participant(env: &Env, participant: &Participant) {
    store(env, &DataKey::Participant(participant.address.clone()), participant);
}

pub fn load_tour(env: &Env, participant: &Address, tour_number: u32) -> Option<Tour> {
    load(env, &DataKey::Tour(participant.clone(), tour_number))
}

pub fn save_tour(env: &Env, tour: &Tour) {
    store(
        env,
        &DataKey::Tour(tour.participant.clone(), tour.tour_number),
        tour,
    );
}

// ─────────────────────────────────────────────────────────
// Constellations
// ─────────────────────────────────────────────────────────

/// Atomically read and increment the constellation counter.
pub fn get_and_increment_constellation_id(env: &Env) -> u64 {
    get_and_increment(env, &DataKey::ConstellationCount)
}

/// Save both the immutable config and initial state of a new constellation.
pub fn save_constellation(env: &Env, config: &ConstellationConfig, state: &ConstellationState) {
    store(env, &DataKey::ConstConfig(config.id), config);
    store(env, &DataKey::ConstState(config.id), state);
    store(env, &DataKey::AlcyoneOf(config.alcyone.clone()), &config.id);
}

pub fn load_constellation_config(env: &Env, id: u64) -> Option<ConstellationConfig> {
    load(env, &DataKey::ConstConfig(id))
}

pub fn load_constellation_state(env: &Env, id: u64) -> Option<ConstellationState> {
    load(env, &DataKey::ConstState(id))
}

/// Read config and state together.
pub fn load_constellation_pair(env: &Env, id: u64) -> Option<(ConstellationConfig, ConstellationState)> {
    let config = load_constellation_config(env, id)?;
    let state = load_constellation_state(env, id)?;
    Some((config, state))
}

/// Load the full `Constellation` by combining config and state.
pub fn load_constellation(env: &Env, id: u64) -> Option<Constellation> {
    let (config, state) = load_constellation_pair(env, id)?;
    Some(Constellation::from_parts(config, state))
}

/// Save only the mutable state (joins, contributions, roll-overs).
pub fn save_constellation_state(env: &Env, id: u64, state: &ConstellationState) {
    store(env, &DataKey::ConstState(id), state);
}

pub fn constellation_of(env: &Env, alcyone: &Address) -> Option<u64> {
    load(env, &DataKey::AlcyoneOf(alcyone.clone()))
}

/// The constellation `member` currently holds a seat in.
pub fn seat_of(env: &Env, member: &Address) -> Option<u64> {
    load(env, &DataKey::SeatOf(member.clone()))
}

pub fn set_seat(env: &Env, member: &Address, id: u64) {
    store(env, &DataKey::SeatOf(member.clone()), &id);
}

pub fn clear_seat(env: &Env, member: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::SeatOf(member.clone()));
}

// ─────────────────────────────────────────────────────────
// Balances & transactions
// ─────────────────────────────────────────────────────────

pub fn get_balance(env: &Env, participant: &Address) -> i128 {
    load(env, &DataKey::Balance(participant.clone())).unwrap_or(0)
}

pub fn set_balance(env: &Env, participant: &Address, balance: i128) {
    store(env, &DataKey::Balance(participant.clone()), &balance);
}

pub fn get_and_increment_transaction_id(env: &Env) -> u64 {
    get_and_increment(env, &DataKey::TransactionCount)
}

pub fn load_transaction(env: &Env, id: u64) -> Option<Transaction> {
    load(env, &DataKey::Tx(id))
}

pub fn save_transaction(env: &Env, tx: &Transaction) {
    store(env, &DataKey::Tx(tx.id), tx);
}

/// Append `tx_id` to the participant's history index.
pub fn index_transaction(env: &Env, participant: &Address, tx_id: u64) {
    let key = DataKey::TxIndex(participant.clone());
    let mut ids: Vec<u64> = load(env, &key).unwrap_or_else(|| Vec::new(env));
    ids.push_back(tx_id);
    store(env, &key, &ids);
}

pub fn transaction_ids_of(env: &Env, participant: &Address) -> Vec<u64> {
    load(env, &DataKey::TxIndex(participant.clone())).unwrap_or_else(|| Vec::new(env))
}

// ─────────────────────────────────────────────────────────
// Referrals
// ─────────────────────────────────────────────────────────

pub fn load_referral(env: &Env, referee: &Address) -> Option<Referral> {
    load(env, &DataKey::Referral(referee.clone()))
}

pub fn save_referral(env: &Env, referral: &Referral) {
    store(env, &DataKey::Referral(referral.referee.clone()), referral);
}

/// Record `referee` under `referrer`'s list.
pub fn index_referral(env: &Env, referrer: &Address, referee: &Address) {
    let key = DataKey::Referrals(referrer.clone());
    let mut referees: Vec<Address> = load(env, &key).unwrap_or_else(|| Vec::new(env));
    referees.push_back(referee.clone());
    store(env, &key, &referees);
}

pub fn referees_of(env: &Env, referrer: &Address) -> Vec<Address> {
    load(env, &DataKey::Referrals(referrer.clone())).unwrap_or_else(|| Vec::new(env))
}
