#![no_std]

//! # Authority Resolver
//!
//! Registry of authorities permitted to issue attestations, with a paid
//! verification step, per-authority fee/levy ledgers, and the resolver hook
//! surface (`onattest`/`onresolve`) the attestation protocol drives.
//!
//! Admission flow: a prospective authority (or a sponsor) pays the fixed
//! registration fee with `pay_verification_fee`, then `register_authority`
//! consumes that payment and admits the authority. From then on the
//! protocol's hook calls validate attestations against the registry, and
//! levies carried by resolve events accrue to the authority's withdrawable
//! balance.

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, String};

use attestry_resolvers::{
    ResolverAttestationData, ResolverError, ResolverInterface, ResolverMetadata, ResolverType,
};

mod errors;
mod events;
mod ownership;
mod payments;
mod registry;
mod resolver;
mod state;

pub use errors::Error;
pub use state::{Attestation, AttestationRecord, DataKey, PaymentRecord, RegisteredAuthorityData};

/// Fee required to register an authority, in the token's smallest units.
/// Fixed at initialization; there is deliberately no setter.
pub const REGISTRATION_FEE: i128 = 100_0000000;

#[contract]
pub struct AuthorityResolver;

#[contractimpl]
impl AuthorityResolver {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time setup: admin, fee token identity, and zeroed ledgers.
    ///
    /// The token contract is probed (`decimals`) so initialization with a
    /// non-token address traps here instead of at the first payment.
    pub fn initialize(
        env: Env,
        admin: Address,
        token_contract_id: Address,
        token_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if ownership::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let token_client = token::Client::new(&env, &token_contract_id);
        let _ = token_client.decimals();

        ownership::set_admin(&env, &admin);
        env.storage()
            .instance()
            .set(&DataKey::TokenId, &token_contract_id);
        env.storage()
            .instance()
            .set(&DataKey::TokenWasmHash, &token_wasm_hash);
        env.storage()
            .instance()
            .set(&DataKey::RegistrationFee, &REGISTRATION_FEE);
        env.storage().instance().set(&DataKey::CollectedFees, &0i128);
        env.storage()
            .instance()
            .set(&DataKey::CollectedLevies, &0i128);
        env.storage().instance().set(&DataKey::Initialized, &true);

        events::emit_initialized(&env, &admin, &token_contract_id);
        Ok(())
    }

    // ── Ownership ───────────────────────────────────────────────────

    /// True if `address` is the current admin. Never fails.
    pub fn is_owner(env: Env, address: Address) -> bool {
        ownership::is_owner(&env, &address)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        ownership::get_admin(&env)
    }

    pub fn get_admin_address(env: Env) -> Result<Address, Error> {
        ownership::get_admin(&env)
    }

    /// Replace the admin. Requires the current owner's authorization.
    pub fn transfer_ownership(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), Error> {
        ownership::transfer(&env, &current_owner, &new_owner)
    }

    /// Give up the admin role permanently. There is no recovery path:
    /// every admin-gated call fails from this point on.
    pub fn renounce_ownership(env: Env, current_owner: Address) -> Result<(), Error> {
        ownership::renounce(&env, &current_owner)
    }

    // ── Payments ────────────────────────────────────────────────────

    /// Pay the registration fee. One unconsumed payment per payer; the
    /// record is later consumed by `register_authority`.
    pub fn pay_verification_fee(
        env: Env,
        payer: Address,
        ref_id: String,
        token_address: Address,
    ) -> Result<(), Error> {
        payments::pay_verification_fee(&env, &payer, &ref_id, &token_address)
    }

    pub fn has_confirmed_payment(env: Env, payer: Address) -> bool {
        payments::has_confirmed_payment(&env, &payer)
    }

    pub fn get_payment_record(env: Env, payer: Address) -> Option<PaymentRecord> {
        payments::get_payment_record(&env, &payer)
    }

    // ── Authority registry ──────────────────────────────────────────

    /// Admit `authority_to_reg`, funded by `caller`'s confirmed payment.
    /// The payer and the authority may differ (sponsored registration).
    pub fn register_authority(
        env: Env,
        caller: Address,
        authority_to_reg: Address,
        metadata: String,
    ) -> Result<(), Error> {
        registry::register(&env, &caller, &authority_to_reg, &metadata)
    }

    /// Admin-only admission that skips the payment check.
    pub fn admin_register_authority(
        env: Env,
        admin: Address,
        auth_to_reg: Address,
        metadata: String,
    ) -> Result<(), Error> {
        registry::admin_register(&env, &admin, &auth_to_reg, &metadata)
    }

    pub fn is_authority(env: Env, authority: Address) -> bool {
        registry::is_authority(&env, &authority)
    }

    // ── Attestation lifecycle ───────────────────────────────────────

    /// Record an attestation from a registered authority. Rejects
    /// malformed or expired data and uids that were ever attested before.
    pub fn attest(env: Env, attestation: Attestation) -> Result<bool, Error> {
        resolver::attest(&env, &attestation)
    }

    /// Revoke a revocable attestation. Only the original attester may
    /// revoke; revocation is terminal for the uid.
    pub fn revoke(env: Env, attestation: Attestation) -> Result<bool, Error> {
        resolver::revoke(&env, &attestation)
    }

    // ── Balances and withdrawals ────────────────────────────────────

    pub fn get_collected_fees(env: Env, authority: Address) -> i128 {
        payments::collected_fees(&env, &authority)
    }

    pub fn get_collected_levies(env: Env, authority: Address) -> i128 {
        payments::collected_levies(&env, &authority)
    }

    /// Balance of the module-wide registration fee pool.
    pub fn get_total_collected(env: Env) -> i128 {
        payments::total_collected(&env)
    }

    /// Total levies ever credited across all authorities.
    pub fn get_total_levied(env: Env) -> i128 {
        payments::total_levied(&env)
    }

    /// Sweep the caller's collected fee balance.
    pub fn withdraw_fees(env: Env, caller: Address) -> Result<(), Error> {
        payments::withdraw_fees(&env, &caller)
    }

    /// Sweep the caller's collected levy balance.
    pub fn withdraw_levies(env: Env, caller: Address) -> Result<(), Error> {
        payments::withdraw_levies(&env, &caller)
    }

    /// Admin-only partial withdrawal from the registration fee pool.
    pub fn admin_withdraw_fees(
        env: Env,
        admin: Address,
        token_address: Address,
        amount: i128,
    ) -> Result<(), Error> {
        payments::admin_withdraw_fees(&env, &admin, &token_address, amount)
    }

    pub fn get_token_id(env: Env) -> Result<Address, Error> {
        payments::token_id(&env)
    }
}

#[contractimpl]
impl ResolverInterface for AuthorityResolver {
    /// Attest-time policy check for the attestation protocol: the attester
    /// must be a registered authority and the data well formed. Validation
    /// only; nothing is stored or charged here.
    fn onattest(env: Env, attestation: ResolverAttestationData) -> Result<bool, ResolverError> {
        resolver::onattest(&env, &attestation)
    }

    /// Post-resolution accounting: re-checks the registry and credits the
    /// levy carried by an attest-resolution to the attesting authority.
    fn onresolve(env: Env, attestation: ResolverAttestationData) -> Result<(), ResolverError> {
        resolver::onresolve(&env, &attestation)
    }

    fn metadata(env: Env) -> ResolverMetadata {
        ResolverMetadata {
            name: String::from_str(&env, "Authority Resolver"),
            version: String::from_str(&env, "1.0.0"),
            description: String::from_str(
                &env,
                "Gates attestations behind paid authority registration and collects levies",
            ),
            resolver_type: ResolverType::Authority,
        }
    }
}

#[cfg(test)]
mod test;
