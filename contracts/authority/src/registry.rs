//! Authority registry: who may issue attestations.
//!
//! Admission is either paid (a confirmed verification payment by the caller,
//! consumed atomically with the registry write) or admin-granted. Entries
//! are written once and never deleted; re-registration is rejected.

use soroban_sdk::{Address, Env, String};

use crate::errors::Error;
use crate::events;
use crate::ownership;
use crate::payments;
use crate::state::{DataKey, RegisteredAuthorityData};

pub fn is_authority(env: &Env, authority: &Address) -> bool {
    let key = (DataKey::Authority, authority.clone());
    env.storage().instance().has(&key)
}

fn write_authority(
    env: &Env,
    authority: &Address,
    metadata: &String,
    ref_id: &String,
) {
    let key = (DataKey::Authority, authority.clone());
    let data = RegisteredAuthorityData {
        address: authority.clone(),
        metadata: metadata.clone(),
        ref_id: ref_id.clone(),
        registration_time: env.ledger().timestamp(),
    };
    env.storage().instance().set(&key, &data);
}

/// Paid registration. The caller's payment record funds the registration and
/// is removed in the same invocation, so one payment can never admit two
/// authorities.
pub fn register(
    env: &Env,
    caller: &Address,
    authority_to_reg: &Address,
    metadata: &String,
) -> Result<(), Error> {
    caller.require_auth();

    if is_authority(env, authority_to_reg) {
        return Err(Error::AuthorityAlreadyExists);
    }

    let record = payments::get_payment_record(env, caller).ok_or(Error::PaymentRequired)?;
    if record.amount_paid < payments::registration_fee(env)? {
        return Err(Error::PaymentRequired);
    }

    write_authority(env, authority_to_reg, metadata, &record.ref_id);
    payments::consume_payment(env, caller);

    events::emit_authority_registered(env, authority_to_reg, caller);
    Ok(())
}

/// Admin bypass: admit an authority without a payment.
pub fn admin_register(
    env: &Env,
    admin: &Address,
    auth_to_reg: &Address,
    metadata: &String,
) -> Result<(), Error> {
    ownership::require_admin(env, admin)?;

    if is_authority(env, auth_to_reg) {
        return Err(Error::AuthorityAlreadyExists);
    }

    let ref_id = String::from_str(env, "admin");
    write_authority(env, auth_to_reg, metadata, &ref_id);

    events::emit_authority_registered(env, auth_to_reg, admin);
    Ok(())
}
