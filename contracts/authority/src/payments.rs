//! Payment records and the fee/levy ledgers.
//!
//! Three pools of value live here: the module-wide registration fee pool
//! (credited by `pay_verification_fee`, drawn down by the admin), and the
//! per-authority fee and levy balances (credited by resolver dispatch,
//! swept by the authority). Credits use checked arithmetic and fail
//! `Overflow` instead of wrapping; sweeps zero the balance in the same
//! invocation as the outbound transfer.

use soroban_sdk::{token, Address, Env, String};

use crate::errors::Error;
use crate::events;
use crate::ownership;
use crate::state::{DataKey, PaymentRecord};

pub fn token_id(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenId)
        .ok_or(Error::NotInitialized)
}

pub fn registration_fee(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&DataKey::RegistrationFee)
        .ok_or(Error::NotInitialized)
}

// ── Payment records ─────────────────────────────────────────────────

pub fn get_payment_record(env: &Env, payer: &Address) -> Option<PaymentRecord> {
    let key = (DataKey::PaymentRecord, payer.clone());
    env.storage().instance().get(&key)
}

pub fn has_confirmed_payment(env: &Env, payer: &Address) -> bool {
    let key = (DataKey::PaymentRecord, payer.clone());
    env.storage().instance().has(&key)
}

/// Collect the registration fee from `payer` and record the payment.
///
/// The token transfer and the record write commit together; if the transfer
/// fails the host rolls the invocation back and no record survives, so a
/// failed payment is always safe to retry.
pub fn pay_verification_fee(
    env: &Env,
    payer: &Address,
    ref_id: &String,
    token_address: &Address,
) -> Result<(), Error> {
    payer.require_auth();

    let configured = token_id(env)?;
    if *token_address != configured {
        return Err(Error::InvalidToken);
    }

    let key = (DataKey::PaymentRecord, payer.clone());
    if env.storage().instance().has(&key) {
        return Err(Error::PaymentAlreadyExists);
    }

    let fee = registration_fee(env)?;
    let token_client = token::Client::new(env, &configured);
    token_client.transfer(payer, &env.current_contract_address(), &fee);

    let pool: i128 = env
        .storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0);
    let pool = pool.checked_add(fee).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CollectedFees, &pool);

    let record = PaymentRecord {
        recipient: payer.clone(),
        ref_id: ref_id.clone(),
        amount_paid: fee,
        timestamp: env.ledger().timestamp(),
    };
    env.storage().instance().set(&key, &record);

    events::emit_payment_recorded(env, payer, ref_id, fee);
    Ok(())
}

/// Remove a payment record once the registration it funds has committed.
pub fn consume_payment(env: &Env, payer: &Address) {
    let key = (DataKey::PaymentRecord, payer.clone());
    env.storage().instance().remove(&key);
}

// ── Per-authority ledgers ───────────────────────────────────────────

pub fn collected_fees(env: &Env, authority: &Address) -> i128 {
    let key = (DataKey::CollFees, authority.clone());
    env.storage().instance().get(&key).unwrap_or(0)
}

pub fn collected_levies(env: &Env, authority: &Address) -> i128 {
    let key = (DataKey::CollLevies, authority.clone());
    env.storage().instance().get(&key).unwrap_or(0)
}

pub fn total_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn total_levied(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedLevies)
        .unwrap_or(0)
}

pub fn credit_fees(env: &Env, authority: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let key = (DataKey::CollFees, authority.clone());
    let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
    let balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
    env.storage().instance().set(&key, &balance);
    Ok(())
}

pub fn credit_levies(env: &Env, authority: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let key = (DataKey::CollLevies, authority.clone());
    let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
    let balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
    env.storage().instance().set(&key, &balance);

    let total: i128 = env
        .storage()
        .instance()
        .get(&DataKey::CollectedLevies)
        .unwrap_or(0);
    let total = total.checked_add(amount).ok_or(Error::Overflow)?;
    env.storage()
        .instance()
        .set(&DataKey::CollectedLevies, &total);
    Ok(())
}

// ── Withdrawals ─────────────────────────────────────────────────────

/// Sweep the caller's collected fee balance to zero and pay it out.
pub fn withdraw_fees(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let balance = collected_fees(env, caller);
    if balance == 0 {
        return Err(Error::NothingToWithdraw);
    }

    let token_client = token::Client::new(env, &token_id(env)?);
    token_client.transfer(&env.current_contract_address(), caller, &balance);

    let key = (DataKey::CollFees, caller.clone());
    env.storage().instance().set(&key, &0i128);

    events::emit_fees_withdrawn(env, caller, balance);
    Ok(())
}

/// Sweep the caller's collected levy balance to zero and pay it out.
pub fn withdraw_levies(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let balance = collected_levies(env, caller);
    if balance == 0 {
        return Err(Error::NothingToWithdraw);
    }

    let token_client = token::Client::new(env, &token_id(env)?);
    token_client.transfer(&env.current_contract_address(), caller, &balance);

    let key = (DataKey::CollLevies, caller.clone());
    env.storage().instance().set(&key, &0i128);

    events::emit_levies_withdrawn(env, caller, balance);
    Ok(())
}

/// Admin-only partial withdrawal from the registration fee pool.
pub fn admin_withdraw_fees(
    env: &Env,
    admin: &Address,
    token_address: &Address,
    amount: i128,
) -> Result<(), Error> {
    ownership::require_admin(env, admin)?;

    let configured = token_id(env)?;
    if *token_address != configured {
        return Err(Error::InvalidToken);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let pool = total_collected(env);
    if amount > pool {
        return Err(Error::InsufficientBalance);
    }

    let token_client = token::Client::new(env, &configured);
    token_client.transfer(&env.current_contract_address(), admin, &amount);

    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &(pool - amount));

    events::emit_admin_fees_withdrawn(env, admin, amount);
    Ok(())
}
