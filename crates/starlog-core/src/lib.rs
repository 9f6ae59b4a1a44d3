//! # starlog-core
//!
//! Pure primitives for the starlog ledger: blocks, star claims,
//! canonical digest encoding, and chain integrity auditing.
//!
//! This crate contains no I/O, no storage, no clocks. It is pure
//! computation over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - sealed, hash-linked unit of the chain
//! - [`BlockHash`] - a block's identity (Blake3 digest)
//! - [`StarClaim`] - owner + star payload carried by non-genesis blocks
//! - [`Violation`] - one integrity failure found by an audit
//!
//! ## Canonical Encoding
//!
//! Block digests are computed over a deterministic CBOR encoding of the
//! block's identity fields. See [`canonical`].

pub mod audit;
pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;

pub use audit::{audit_block, audit_chain, audit_link, Violation, ViolationKind};
pub use block::Block;
pub use canonical::{block_digest, DIGEST_DOMAIN};
pub use crypto::{Ed25519Signature, Ed25519Verifier, Keypair, SignatureVerifier};
pub use error::CoreError;
pub use payload::{decode_payload, DecodedPayload, StarClaim, StarData, GENESIS_PAYLOAD};
pub use types::{Address, BlockHash};
