use soroban_sdk::contracterror;

/// Errors surfaced by the authority resolver's own operation surface.
///
/// The resolver hooks (`onattest`/`onresolve`) report through
/// `attestry_resolvers::ResolverError` instead, so the attestation protocol
/// only ever has to branch on that smaller set.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    AuthorityAlreadyExists = 4,
    AuthorityNotRegistered = 5,
    PaymentRequired = 6,
    PaymentAlreadyExists = 7,
    InvalidToken = 8,
    InvalidAmount = 9,
    InsufficientBalance = 10,
    NothingToWithdraw = 11,
    Overflow = 12,
    InvalidAttestation = 13,
    ExpiredAttestation = 14,
    AttestationExists = 15,
    AttestationNotFound = 16,
    NotRevocable = 17,
}
