use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

/// Storage keys. Unit variants address singletons directly; the collection
/// variants are used as tuple prefixes, e.g.
/// `(DataKey::PaymentRecord, payer)`, so each payer's or authority's entry
/// is independently addressable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Initialized,
    RegistrationFee,
    TokenId,
    TokenWasmHash,
    /// Module-wide registration fee pool (withdrawable by the admin).
    CollectedFees,
    /// Module-wide total of levies ever credited.
    CollectedLevies,
    /// Prefix: per-payer verification payment record.
    PaymentRecord,
    /// Prefix: per-address registered authority data.
    Authority,
    /// Prefix: per-authority collected fee balance.
    CollFees,
    /// Prefix: per-authority collected levy balance.
    CollLevies,
    /// Prefix: per-uid attestation record.
    Attestation,
}

/// A verification payment awaiting consumption by `register_authority`.
/// Keyed by the payer; removed when the registration that it funds commits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub recipient: Address,
    pub ref_id: String,
    pub amount_paid: i128,
    pub timestamp: u64,
}

/// Registration metadata for an admitted authority. Written once; never
/// deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisteredAuthorityData {
    pub address: Address,
    pub metadata: String,
    pub ref_id: String,
    pub registration_time: u64,
}

/// An attestation as submitted to `attest`/`revoke`. Optional fields are
/// `Option` rather than zero sentinels so "unset" and "zero" stay distinct.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attestation {
    pub uid: BytesN<32>,
    pub schema_uid: BytesN<32>,
    pub recipient: Address,
    pub attester: Address,
    pub time: u64,
    pub expiration_time: Option<u64>,
    pub revocable: bool,
    pub ref_uid: Option<Bytes>,
    pub data: Bytes,
    pub value: Option<i128>,
}

/// What the contract persists per attestation uid. Revocation flips
/// `revoked` and stamps `revocation_time`; the record itself is kept so a
/// revoked uid can never be attested again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttestationRecord {
    pub attester: Address,
    pub schema_uid: BytesN<32>,
    pub recipient: Address,
    pub time: u64,
    pub expiration_time: Option<u64>,
    pub revocable: bool,
    pub revoked: bool,
    pub revocation_time: Option<u64>,
}
