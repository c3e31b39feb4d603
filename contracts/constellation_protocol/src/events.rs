use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{
    ConstellationType, ParticipantStatus, ProtocolConfig, Transaction, TransactionKind,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantJoined {
    pub participant: Address,
    pub constellation_type: ConstellationType,
    pub referrer: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TourPaid {
    pub participant: Address,
    pub tour_number: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecorded {
    pub constellation_id: u64,
    pub position: u32,
    pub tour_number: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TourCompleted {
    pub participant: Address,
    pub tour_number: u32,
    pub amount_received: i128,
    pub amount_kept: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstellationCreated {
    pub constellation_id: u64,
    pub alcyone: Address,
    pub constellation_type: ConstellationType,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoined {
    pub constellation_id: u64,
    pub position: u32,
    pub member: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerMovement {
    pub tx_id: u64,
    pub participant: Address,
    pub kind: TransactionKind,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlcyoneTransfer {
    pub constellation_id: u64,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_participant_joined(
    env: &Env,
    participant: Address,
    constellation_type: ConstellationType,
    referrer: Option<Address>,
) {
    let topics = (symbol_short!("joined"), participant.clone());
    let data = ParticipantJoined {
        participant,
        constellation_type,
        referrer,
    };
    env.events().publish(topics, data);
}

pub fn emit_tour_paid(env: &Env, participant: Address, tour_number: u32, amount: i128) {
    let topics = (symbol_short!("paid"), participant.clone());
    let data = TourPaid {
        participant,
        tour_number,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution(env: &Env, constellation_id: u64, position: u32, tour_number: u32, amount: i128) {
    let topics = (symbol_short!("contrib"), constellation_id);
    let data = ContributionRecorded {
        constellation_id,
        position,
        tour_number,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_tour_completed(
    env: &Env,
    participant: Address,
    tour_number: u32,
    amount_received: i128,
    amount_kept: i128,
) {
    let topics = (symbol_short!("tour_done"), participant.clone());
    let data = TourCompleted {
        participant,
        tour_number,
        amount_received,
        amount_kept,
    };
    env.events().publish(topics, data);
}

pub fn emit_tour_unlocked(env: &Env, participant: Address, tour_number: u32) {
    env.events()
        .publish((symbol_short!("unlocked"), participant), tour_number);
}

pub fn emit_constellation_created(
    env: &Env,
    constellation_id: u64,
    alcyone: Address,
    constellation_type: ConstellationType,
) {
    let topics = (symbol_short!("created"), constellation_id);
    let data = ConstellationCreated {
        constellation_id,
        alcyone,
        constellation_type,
    };
    env.events().publish(topics, data);
}

pub fn emit_member_joined(env: &Env, constellation_id: u64, position: u32, member: Address) {
    let topics = (symbol_short!("member"), constellation_id);
    let data = MemberJoined {
        constellation_id,
        position,
        member,
    };
    env.events().publish(topics, data);
}

impl From<&Transaction> for LedgerMovement {
    fn from(tx: &Transaction) -> Self {
        LedgerMovement {
            tx_id: tx.id,
            participant: tx.participant.clone(),
            kind: tx.kind,
            amount: tx.amount,
        }
    }
}

/// Topic: `(withdraw, tx_id)`.
pub fn emit_withdrawal_requested(env: &Env, tx: &Transaction) {
    env.events()
        .publish((symbol_short!("withdraw"), tx.id), LedgerMovement::from(tx));
}

/// Topic: `(bonus, tx_id)`.
pub fn emit_bonus_credited(env: &Env, tx: &Transaction) {
    env.events()
        .publish((symbol_short!("bonus"), tx.id), LedgerMovement::from(tx));
}

pub fn emit_transfer(env: &Env, constellation_id: u64, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from.clone());
    let data = AlcyoneTransfer {
        constellation_id,
        from,
        to,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_participant_status(env: &Env, participant: Address, status: ParticipantStatus, caller: Address) {
    env.events()
        .publish((symbol_short!("status"), participant, status), caller);
}

pub fn emit_withdrawal_settled(env: &Env, tx_id: u64, treasurer: Address) {
    env.events()
        .publish((symbol_short!("settled"), tx_id), treasurer);
}

pub fn emit_protocol_paused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("paused"),), caller);
}

pub fn emit_protocol_unpaused(env: &Env, caller: Address) {
    env.events().publish((symbol_short!("unpaused"),), caller);
}

pub fn emit_config_updated(env: &Env, caller: Address, config: ProtocolConfig) {
    env.events()
        .publish((symbol_short!("cfg_set"), caller), config);
}
