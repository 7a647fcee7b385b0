//! # Resolvers Library
//!
//! Resolver interface for the Attestry attestation service. The
//! `ResolverInterface` trait defines the contract between the attestation
//! protocol and resolver implementations, enabling modular business logic
//! for attestation validation and accounting.
#![no_std]

/// Core interface definitions and types shared across all resolver
/// implementations: the `ResolverInterface` trait and the common data
/// structures `ResolverAttestationData`, `ResolverMetadata`, and the
/// standardized error set.
pub mod interface;

pub use interface::{
    ResolverAttestationData, ResolverError, ResolverInterface, ResolverMetadata, ResolverType,
};
