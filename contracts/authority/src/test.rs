#![cfg(test)]

extern crate std;

use crate::{AuthorityResolver, AuthorityResolverClient, Error, REGISTRATION_FEE};
use soroban_sdk::{
    testutils::{Address as _, BytesN as _, Ledger, LedgerInfo},
    token, Address, BytesN, Env, String,
};

struct TestEnv {
    env: Env,
    admin: Address,
    contract_id: Address,
    fee_token: Address,
}

fn setup_env() -> TestEnv {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 22,
        sequence_number: 0,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 16 * 60 * 60 * 24,
        min_persistent_entry_ttl: 30 * 60 * 60 * 24,
        max_entry_ttl: 365 * 60 * 60 * 24,
    });

    let admin = Address::generate(&env);

    let fee_token_contract = env.register_stellar_asset_contract_v2(admin.clone());
    let fee_token = fee_token_contract.address();

    let contract_id = env.register(AuthorityResolver, ());
    let client = AuthorityResolverClient::new(&env, &contract_id);
    client.initialize(&admin, &fee_token, &BytesN::random(&env));

    TestEnv {
        env,
        admin,
        contract_id,
        fee_token,
    }
}

fn mint(env: &Env, tok: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, tok).mint(to, &amount);
}

fn pay_and_register(setup: &TestEnv, payer: &Address, authority: &Address) {
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);
    mint(&setup.env, &setup.fee_token, payer, REGISTRATION_FEE);
    client.pay_verification_fee(payer, &String::from_str(&setup.env, "ref"), &setup.fee_token);
    client.register_authority(payer, authority, &String::from_str(&setup.env, "meta"));
}

// ════════════════════════════════════════════════════════════════════
//  Initialization Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_initialize() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    assert_eq!(client.get_owner(), setup.admin);
    assert_eq!(client.get_admin_address(), setup.admin);
    assert_eq!(client.get_token_id(), setup.fee_token);
    assert_eq!(client.get_total_collected(), 0);
    assert!(client.is_owner(&setup.admin));
}

#[test]
fn test_double_initialize_fails() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    let new_admin = Address::generate(&setup.env);
    let result = client.try_initialize(&new_admin, &setup.fee_token, &BytesN::random(&setup.env));
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_queries_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuthorityResolver, ());
    let client = AuthorityResolverClient::new(&env, &contract_id);

    let someone = Address::generate(&env);
    assert_eq!(client.try_get_owner(), Err(Ok(Error::NotInitialized)));
    assert_eq!(client.try_get_token_id(), Err(Ok(Error::NotInitialized)));

    // Reads on absent entities return false/absent, never an error.
    assert!(!client.is_owner(&someone));
    assert!(!client.is_authority(&someone));
    assert!(!client.has_confirmed_payment(&someone));
    assert_eq!(client.get_payment_record(&someone), None);
}

// ════════════════════════════════════════════════════════════════════
//  Ownership Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_transfer_ownership() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    let new_owner = Address::generate(&setup.env);
    client.transfer_ownership(&setup.admin, &new_owner);

    assert_eq!(client.get_owner(), new_owner);
    assert!(client.is_owner(&new_owner));
    assert!(!client.is_owner(&setup.admin));
}

#[test]
fn test_transfer_ownership_non_owner_fails() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    let intruder = Address::generate(&setup.env);
    let target = Address::generate(&setup.env);
    let result = client.try_transfer_ownership(&intruder, &target);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    assert_eq!(client.get_owner(), setup.admin);
}

#[test]
fn test_renounce_ownership_is_terminal() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    client.renounce_ownership(&setup.admin);

    assert_eq!(client.try_get_owner(), Err(Ok(Error::NotInitialized)));
    assert!(!client.is_owner(&setup.admin));

    // Every admin-gated operation fails from now on.
    let authority = Address::generate(&setup.env);
    let meta = String::from_str(&setup.env, "meta");
    assert_eq!(
        client.try_admin_register_authority(&setup.admin, &authority, &meta),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        client.try_admin_withdraw_fees(&setup.admin, &setup.fee_token, &1),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        client.try_transfer_ownership(&setup.admin, &authority),
        Err(Ok(Error::NotInitialized))
    );
}

// ════════════════════════════════════════════════════════════════════
//  Payment Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_pay_verification_fee() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);

    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);

    let token_client = token::Client::new(env, &setup.fee_token);
    assert_eq!(token_client.balance(&payer), 0);
    assert_eq!(token_client.balance(&setup.contract_id), REGISTRATION_FEE);
    assert_eq!(client.get_total_collected(), REGISTRATION_FEE);

    assert!(client.has_confirmed_payment(&payer));
    let record = client.get_payment_record(&payer).unwrap();
    assert_eq!(record.recipient, payer);
    assert_eq!(record.ref_id, String::from_str(env, "r1"));
    assert_eq!(record.amount_paid, REGISTRATION_FEE);
    assert_eq!(record.timestamp, 1000);
}

#[test]
fn test_pay_verification_fee_twice_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE * 2);

    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);
    let result = client.try_pay_verification_fee(
        &payer,
        &String::from_str(env, "r2"),
        &setup.fee_token,
    );
    assert_eq!(result, Err(Ok(Error::PaymentAlreadyExists)));

    // Only the first payment was collected.
    let token_client = token::Client::new(env, &setup.fee_token);
    assert_eq!(token_client.balance(&setup.contract_id), REGISTRATION_FEE);
}

#[test]
fn test_pay_verification_fee_wrong_token_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let other_token = env
        .register_stellar_asset_contract_v2(setup.admin.clone())
        .address();
    let payer = Address::generate(env);
    mint(env, &other_token, &payer, REGISTRATION_FEE);

    let result =
        client.try_pay_verification_fee(&payer, &String::from_str(env, "r1"), &other_token);
    assert_eq!(result, Err(Ok(Error::InvalidToken)));
    assert!(!client.has_confirmed_payment(&payer));
}

#[test]
fn test_pay_verification_fee_insufficient_funds_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    // Payer holds no tokens; the transfer fails and no record survives.
    let payer = Address::generate(env);
    let result =
        client.try_pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);
    assert!(result.is_err());
    assert!(!client.has_confirmed_payment(&payer));
    assert_eq!(client.get_total_collected(), 0);
}

// ════════════════════════════════════════════════════════════════════
//  Registration Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_register_authority_flow() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    let authority = payer.clone();
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);

    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);
    client.register_authority(&payer, &authority, &String::from_str(env, "meta"));

    assert!(client.is_authority(&authority));
    // The funding payment is consumed by the registration.
    assert_eq!(client.get_payment_record(&payer), None);
    assert!(!client.has_confirmed_payment(&payer));
}

#[test]
fn test_register_authority_without_payment_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let caller = Address::generate(env);
    let authority = Address::generate(env);
    let result =
        client.try_register_authority(&caller, &authority, &String::from_str(env, "meta"));
    assert_eq!(result, Err(Ok(Error::PaymentRequired)));
    assert!(!client.is_authority(&authority));
}

#[test]
fn test_register_authority_already_registered_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let authority = Address::generate(env);
    pay_and_register(&setup, &authority, &authority);

    let second_payer = Address::generate(env);
    mint(env, &setup.fee_token, &second_payer, REGISTRATION_FEE);
    client.pay_verification_fee(&second_payer, &String::from_str(env, "r2"), &setup.fee_token);

    let result =
        client.try_register_authority(&second_payer, &authority, &String::from_str(env, "meta"));
    assert_eq!(result, Err(Ok(Error::AuthorityAlreadyExists)));
    // The second payer's record was not consumed by the failed attempt.
    assert!(client.has_confirmed_payment(&second_payer));
}

#[test]
fn test_consumed_payment_cannot_register_twice() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    let first = Address::generate(env);
    let second = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);

    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);
    client.register_authority(&payer, &first, &String::from_str(env, "meta"));

    // One payment admits exactly one authority.
    let result = client.try_register_authority(&payer, &second, &String::from_str(env, "meta"));
    assert_eq!(result, Err(Ok(Error::PaymentRequired)));
    assert!(!client.is_authority(&second));
}

#[test]
fn test_sponsored_registration() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let sponsor = Address::generate(env);
    let authority = Address::generate(env);
    mint(env, &setup.fee_token, &sponsor, REGISTRATION_FEE);

    client.pay_verification_fee(&sponsor, &String::from_str(env, "r1"), &setup.fee_token);
    client.register_authority(&sponsor, &authority, &String::from_str(env, "meta"));

    assert!(client.is_authority(&authority));
    assert!(!client.is_authority(&sponsor));
}

#[test]
fn test_admin_register_authority() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let authority = Address::generate(env);
    client.admin_register_authority(&setup.admin, &authority, &String::from_str(env, "meta"));

    assert!(client.is_authority(&authority));
}

#[test]
fn test_admin_register_authority_non_admin_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let intruder = Address::generate(env);
    let authority = Address::generate(env);
    let result =
        client.try_admin_register_authority(&intruder, &authority, &String::from_str(env, "meta"));
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert!(!client.is_authority(&authority));
}

#[test]
fn test_admin_register_authority_existing_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let authority = Address::generate(env);
    client.admin_register_authority(&setup.admin, &authority, &String::from_str(env, "meta"));

    let result = client.try_admin_register_authority(
        &setup.admin,
        &authority,
        &String::from_str(env, "meta"),
    );
    assert_eq!(result, Err(Ok(Error::AuthorityAlreadyExists)));
}

// ════════════════════════════════════════════════════════════════════
//  Admin Withdrawal Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_admin_withdraw_fees_partial() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);
    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);

    let half = REGISTRATION_FEE / 2;
    client.admin_withdraw_fees(&setup.admin, &setup.fee_token, &half);

    let token_client = token::Client::new(env, &setup.fee_token);
    assert_eq!(token_client.balance(&setup.admin), half);
    assert_eq!(client.get_total_collected(), REGISTRATION_FEE - half);

    // The remainder can be withdrawn, after which the pool is empty.
    client.admin_withdraw_fees(&setup.admin, &setup.fee_token, &(REGISTRATION_FEE - half));
    assert_eq!(client.get_total_collected(), 0);
    assert_eq!(
        client.try_admin_withdraw_fees(&setup.admin, &setup.fee_token, &1),
        Err(Ok(Error::InsufficientBalance))
    );
}

#[test]
fn test_admin_withdraw_fees_exceeding_pool_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);
    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);

    let result =
        client.try_admin_withdraw_fees(&setup.admin, &setup.fee_token, &(REGISTRATION_FEE + 1));
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    assert_eq!(client.get_total_collected(), REGISTRATION_FEE);
}

#[test]
fn test_admin_withdraw_fees_wrong_token_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let other_token = env
        .register_stellar_asset_contract_v2(setup.admin.clone())
        .address();
    let result = client.try_admin_withdraw_fees(&setup.admin, &other_token, &1);
    assert_eq!(result, Err(Ok(Error::InvalidToken)));
}

#[test]
fn test_admin_withdraw_fees_invalid_amount_fails() {
    let setup = setup_env();
    let client = AuthorityResolverClient::new(&setup.env, &setup.contract_id);

    assert_eq!(
        client.try_admin_withdraw_fees(&setup.admin, &setup.fee_token, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        client.try_admin_withdraw_fees(&setup.admin, &setup.fee_token, &-5),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_admin_withdraw_fees_non_admin_fails() {
    let setup = setup_env();
    let env = &setup.env;
    let client = AuthorityResolverClient::new(env, &setup.contract_id);

    let payer = Address::generate(env);
    mint(env, &setup.fee_token, &payer, REGISTRATION_FEE);
    client.pay_verification_fee(&payer, &String::from_str(env, "r1"), &setup.fee_token);

    let intruder = Address::generate(env);
    let result = client.try_admin_withdraw_fees(&intruder, &setup.fee_token, &1);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}
