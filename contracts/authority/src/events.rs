//! Event emission helpers. One topic constant per lifecycle event, payloads
//! kept to the identities and amounts an indexer needs.

use soroban_sdk::{symbol_short, Address, BytesN, Env, String, Symbol};

const TOPIC_INITIALIZED: Symbol = symbol_short!("init");
const TOPIC_OWNER_TRANSFERRED: Symbol = symbol_short!("own_xfer");
const TOPIC_OWNER_RENOUNCED: Symbol = symbol_short!("own_ren");
const TOPIC_PAYMENT_RECORDED: Symbol = symbol_short!("pay_rec");
const TOPIC_AUTHORITY_REGISTERED: Symbol = symbol_short!("auth_reg");
const TOPIC_ATTESTED: Symbol = symbol_short!("attest");
const TOPIC_REVOKED: Symbol = symbol_short!("revoke");
const TOPIC_LEVY_CREDITED: Symbol = symbol_short!("levy");
const TOPIC_FEES_WITHDRAWN: Symbol = symbol_short!("fee_wd");
const TOPIC_LEVIES_WITHDRAWN: Symbol = symbol_short!("levy_wd");
const TOPIC_ADMIN_WITHDRAWN: Symbol = symbol_short!("adm_wd");

pub fn emit_initialized(env: &Env, admin: &Address, token_id: &Address) {
    env.events()
        .publish((TOPIC_INITIALIZED,), (admin.clone(), token_id.clone()));
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events()
        .publish((TOPIC_OWNER_TRANSFERRED, previous.clone()), new.clone());
}

pub fn emit_ownership_renounced(env: &Env, previous: &Address) {
    env.events()
        .publish((TOPIC_OWNER_RENOUNCED,), previous.clone());
}

pub fn emit_payment_recorded(env: &Env, payer: &Address, ref_id: &String, amount: i128) {
    env.events()
        .publish((TOPIC_PAYMENT_RECORDED, payer.clone()), (ref_id.clone(), amount));
}

pub fn emit_authority_registered(env: &Env, authority: &Address, registered_by: &Address) {
    env.events().publish(
        (TOPIC_AUTHORITY_REGISTERED, authority.clone()),
        registered_by.clone(),
    );
}

pub fn emit_attested(env: &Env, uid: &BytesN<32>, attester: &Address) {
    env.events()
        .publish((TOPIC_ATTESTED, attester.clone()), uid.clone());
}

pub fn emit_revoked(env: &Env, uid: &BytesN<32>, attester: &Address) {
    env.events()
        .publish((TOPIC_REVOKED, attester.clone()), uid.clone());
}

pub fn emit_levy_credited(env: &Env, authority: &Address, uid: &BytesN<32>, amount: i128) {
    env.events()
        .publish((TOPIC_LEVY_CREDITED, authority.clone()), (uid.clone(), amount));
}

pub fn emit_fees_withdrawn(env: &Env, authority: &Address, amount: i128) {
    env.events()
        .publish((TOPIC_FEES_WITHDRAWN, authority.clone()), amount);
}

pub fn emit_levies_withdrawn(env: &Env, authority: &Address, amount: i128) {
    env.events()
        .publish((TOPIC_LEVIES_WITHDRAWN, authority.clone()), amount);
}

pub fn emit_admin_fees_withdrawn(env: &Env, admin: &Address, amount: i128) {
    env.events()
        .publish((TOPIC_ADMIN_WITHDRAWN, admin.clone()), amount);
}
