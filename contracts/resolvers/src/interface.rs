use soroban_sdk::{contracterror, contracttype, Address, Bytes, BytesN, Env, String};

/// Errors a resolver may surface to the attestation protocol.
///
/// The protocol treats any error as "do not commit": a failing `onattest`
/// rejects the attestation, a failing `onresolve` rolls it back.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ResolverError {
    NotAuthorized = 1,
    NotInitialized = 2,
    AuthorityNotRegistered = 3,
    InvalidAttestation = 4,
    ExpiredAttestation = 5,
    Overflow = 6,
    TokenTransferFailed = 7,
    CustomError = 8,
}

/// Classification a resolver reports about itself during discovery.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolverType {
    Default,
    Authority,
    TokenReward,
    FeeCollection,
    Hybrid,
    Staking,
    Custom,
}

/// Static self-description returned by `metadata`. Read by the attestation
/// protocol at resolver registration time for compatibility negotiation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub resolver_type: ResolverType,
}

/// Attestation data as the protocol hands it to resolver hooks.
///
/// Unset scalar fields are zero here (`expiration_time`, `revocation_time`,
/// `value`); the protocol-side record uses `Option` for these, but the hook
/// ABI flattens them. A `revocation_time` greater than zero marks the event
/// as a revocation resolution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverAttestationData {
    pub uid: BytesN<32>,
    pub schema_uid: BytesN<32>,
    pub recipient: Address,
    pub attester: Address,
    pub time: u64,
    pub expiration_time: u64,
    pub revocation_time: u64,
    pub revocable: bool,
    pub ref_uid: Bytes,
    pub data: Bytes,
    pub value: i128,
}

/// The hook surface every resolver exposes to the attestation protocol.
///
/// `onattest` runs before an attestation is committed and decides whether it
/// may become active. `onresolve` runs after the protocol accepts or revokes
/// an attestation; returning an error instructs the protocol to roll the
/// attestation back. `metadata` is a pure description used at discovery.
pub trait ResolverInterface {
    /// Validate an inbound attestation before the protocol commits it.
    fn onattest(env: Env, attestation: ResolverAttestationData) -> Result<bool, ResolverError>;

    /// Account for a resolved (accepted or revoked) attestation.
    fn onresolve(env: Env, attestation: ResolverAttestationData) -> Result<(), ResolverError>;

    /// Static resolver self-description.
    fn metadata(env: Env) -> ResolverMetadata;
}
