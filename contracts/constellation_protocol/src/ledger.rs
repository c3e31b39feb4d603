//! # Ledger
//!
//! Participant balances and the transaction history behind them.
//!
//! The balance only ever holds *kept* money: the `amount_kept` of each
//! completed tour plus referral bonuses, minus withdrawals. The part of a
//! tour's receipts that funds the next tour never reaches it.
//!
//! Money also moves sideways: a cohort member may pass part of their balance
//! to the Alcyone they are seated under. A transfer has no minimum.

use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::types::{ProtocolConfig, Transaction, TransactionKind, TransactionStatus};
use crate::Error;

/// Append a transaction to the ledger and the participant's history.
pub fn record(
    env: &Env,
    participant: &Address,
    kind: TransactionKind,
    amount: i128,
    status: TransactionStatus,
    tour_number: u32,
) -> Transaction {
    let tx = Transaction {
        id: storage::get_and_increment_transaction_id(env),
        participant: participant.clone(),
        kind,
        amount,
        status,
        tour_number,
        created_at: env.ledger().timestamp(),
    };
    storage::save_transaction(env, &tx);
    storage::index_transaction(env, participant, tx.id);
    tx
}

/// Add `amount` to the balance. Returns the new balance.
pub fn credit(env: &Env, participant: &Address, amount: i128) -> Result<i128, Error> {
    let balance = storage::get_balance(env, participant)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_balance(env, participant, balance);
    Ok(balance)
}

/// Remove `amount` from the balance. Returns the new balance.
pub fn debit(env: &Env, participant: &Address, amount: i128) -> Result<i128, Error> {
    let current = storage::get_balance(env, participant);
    if amount > current {
        return Err(Error::InsufficientFunds);
    }
    let balance = current - amount;
    storage::set_balance(env, participant, balance);
    Ok(balance)
}

/// Check a withdrawal request against the configured minimum and the balance.
pub fn check_withdrawal(config: &ProtocolConfig, balance: i128, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if amount < config.minimum_withdrawal {
        return Err(Error::BelowMinimumWithdrawal);
    }
    if amount > balance {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}

pub fn check_transfer(balance: i128, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if amount > balance {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}

/// Move `amount` from `from` to `to`, recording a `Transfer` on each side.
/// Returns the sender's and the recipient's transaction, in that order.
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(Transaction, Transaction), Error> {
    check_transfer(storage::get_balance(env, from), amount)?;
    debit(env, from, amount)?;
    credit(env, to, amount)?;
    let sent = record(env, from, TransactionKind::Transfer, amount, TransactionStatus::Done, 0);
    let received = record(env, to, TransactionKind::Transfer, amount, TransactionStatus::Done, 0);
    Ok((sent, received))
}

/// Mark a pending withdrawal as paid out.
pub fn settle(tx: &Transaction) -> Result<Transaction, Error> {
    if tx.kind != TransactionKind::Withdrawal {
        return Err(Error::InvalidState);
    }
    if tx.status == TransactionStatus::Done {
        return Err(Error::TransactionAlreadySettled);
    }
    let mut settled = tx.clone();
    settled.status = TransactionStatus::Done;
    Ok(settled)
}

/// Every transaction of `participant`, oldest first.
pub fn history(env: &Env, participant: &Address) -> Vec<Transaction> {
    let mut out = Vec::new(env);
    for id in storage::transaction_ids_of(env, participant).iter() {
        if let Some(tx) = storage::load_transaction(env, id) {
            out.push_back(tx);
        }
    }
    out
}
