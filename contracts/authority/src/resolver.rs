//! Attestation lifecycle dispatch.
//!
//! `attest`/`revoke` drive the stored per-uid state machine
//! (active → revoked, no way back). `onattest`/`onresolve` are the hook
//! forms the attestation protocol calls: `onattest` validates without
//! storing anything, `onresolve` re-checks the registry and credits the
//! levy carried by the resolve event.

use soroban_sdk::{token, Env};

use attestry_resolvers::{ResolverAttestationData, ResolverError};

use crate::errors::Error;
use crate::events;
use crate::ownership;
use crate::payments;
use crate::registry;
use crate::state::{Attestation, AttestationRecord, DataKey};

/// Expiration consistency: when set, the expiration must lie after the
/// attestation's own timestamp and after the current ledger time.
fn check_expiration(
    env: &Env,
    time: u64,
    expiration_time: Option<u64>,
) -> Result<(), Error> {
    if let Some(expiration) = expiration_time {
        if expiration <= time {
            return Err(Error::InvalidAttestation);
        }
        if expiration <= env.ledger().timestamp() {
            return Err(Error::ExpiredAttestation);
        }
    }
    Ok(())
}

pub fn attest(env: &Env, attestation: &Attestation) -> Result<bool, Error> {
    if !ownership::is_initialized(env) {
        return Err(Error::NotInitialized);
    }

    attestation.attester.require_auth();

    if !registry::is_authority(env, &attestation.attester) {
        return Err(Error::AuthorityNotRegistered);
    }

    check_expiration(env, attestation.time, attestation.expiration_time)?;

    if let Some(value) = attestation.value {
        if value < 0 {
            return Err(Error::InvalidAttestation);
        }
    }

    let key = (DataKey::Attestation, attestation.uid.clone());
    if env.storage().instance().has(&key) {
        return Err(Error::AttestationExists);
    }

    // Attestation fee: the attester escrows the declared value with the
    // module; it accrues to the authority's sweepable fee balance.
    if let Some(value) = attestation.value {
        if value > 0 {
            let token_client = token::Client::new(env, &payments::token_id(env)?);
            token_client.transfer(
                &attestation.attester,
                &env.current_contract_address(),
                &value,
            );
            payments::credit_fees(env, &attestation.attester, value)?;
        }
    }

    let record = AttestationRecord {
        attester: attestation.attester.clone(),
        schema_uid: attestation.schema_uid.clone(),
        recipient: attestation.recipient.clone(),
        time: attestation.time,
        expiration_time: attestation.expiration_time,
        revocable: attestation.revocable,
        revoked: false,
        revocation_time: None,
    };
    env.storage().instance().set(&key, &record);

    events::emit_attested(env, &attestation.uid, &attestation.attester);
    Ok(true)
}

pub fn revoke(env: &Env, attestation: &Attestation) -> Result<bool, Error> {
    if !ownership::is_initialized(env) {
        return Err(Error::NotInitialized);
    }

    let key = (DataKey::Attestation, attestation.uid.clone());
    let mut record: AttestationRecord = env
        .storage()
        .instance()
        .get(&key)
        .ok_or(Error::AttestationNotFound)?;

    if attestation.attester != record.attester {
        return Err(Error::Unauthorized);
    }
    attestation.attester.require_auth();

    if !record.revocable {
        return Err(Error::NotRevocable);
    }
    if record.revoked {
        return Err(Error::InvalidAttestation);
    }

    record.revoked = true;
    record.revocation_time = Some(env.ledger().timestamp());
    env.storage().instance().set(&key, &record);

    events::emit_revoked(env, &attestation.uid, &attestation.attester);
    Ok(true)
}

pub fn onattest(env: &Env, attestation: &ResolverAttestationData) -> Result<bool, ResolverError> {
    if !ownership::is_initialized(env) {
        return Err(ResolverError::NotInitialized);
    }

    if !registry::is_authority(env, &attestation.attester) {
        return Err(ResolverError::AuthorityNotRegistered);
    }

    if attestation.expiration_time != 0 {
        if attestation.expiration_time <= attestation.time {
            return Err(ResolverError::InvalidAttestation);
        }
        if attestation.expiration_time <= env.ledger().timestamp() {
            return Err(ResolverError::ExpiredAttestation);
        }
    }
    if attestation.value < 0 {
        return Err(ResolverError::InvalidAttestation);
    }

    Ok(true)
}

pub fn onresolve(env: &Env, attestation: &ResolverAttestationData) -> Result<(), ResolverError> {
    if !ownership::is_initialized(env) {
        return Err(ResolverError::NotInitialized);
    }

    // Registry state is re-checked at resolve time, not cached from attest.
    if !registry::is_authority(env, &attestation.attester) {
        return Err(ResolverError::AuthorityNotRegistered);
    }

    // Revocation resolutions carry no levy.
    if attestation.revocation_time != 0 {
        return Ok(());
    }

    if attestation.value < 0 {
        return Err(ResolverError::InvalidAttestation);
    }
    if attestation.value > 0 {
        payments::credit_levies(env, &attestation.attester, attestation.value)
            .map_err(|_| ResolverError::Overflow)?;
        events::emit_levy_credited(env, &attestation.attester, &attestation.uid, attestation.value);
    }

    Ok(())
}
