//! # starlog
//!
//! An append-only ledger of star-ownership claims: a hash-linked chain
//! whose insertion path is gated by a time-boxed, signed challenge.
//!
//! ## Overview
//!
//! - **Chain**: genesis initialization, audited hash-linked appends,
//!   full-chain integrity audits, and block queries.
//! - **StarRegistry**: the ownership-proof protocol — challenge
//!   message, 5-minute window, signature check, conditional append —
//!   plus the owner-scan read side.
//! - **Storage seam**: blocks live behind [`store::ChainStore`];
//!   durability belongs to the caller's backend. The bundled
//!   [`store::MemoryStore`] keeps the chain in process memory.
//!
//! ## Key Properties
//!
//! - A block is sealed once; any later alteration is caught by audit.
//! - Heights advance by exactly one per append; appends are serialized.
//! - A challenge is stateless: its validity is re-derived from the
//!   timestamp embedded in the message.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use starlog::{RegistryConfig, StarRegistry, SystemClock};
//! use starlog::core::{Ed25519Verifier, Keypair, StarData};
//! use starlog::store::MemoryStore;
//!
//! async fn example() {
//!     let registry = StarRegistry::open(
//!         MemoryStore::new(),
//!         Ed25519Verifier,
//!         SystemClock,
//!         RegistryConfig::default(),
//!     )
//!     .await
//!     .unwrap();
//!
//!     let wallet = Keypair::generate();
//!     let address = wallet.address();
//!
//!     let message = registry.challenge(&address);
//!     let signature = wallet.sign(&message).to_hex();
//!
//!     let star = StarData {
//!         ra: "16h 29m 1.0s".into(),
//!         dec: "-26 29 24.9".into(),
//!         story: None,
//!     };
//!     let block = registry.submit(&address, &message, &signature, star).await.unwrap();
//!     assert_eq!(block.height, 1);
//! }
//! ```

pub mod chain;
pub mod clock;
pub mod error;
pub mod registry;

// Re-export component crates
pub use starlog_core as core;
pub use starlog_store as store;

// Re-export main types for convenience
pub use chain::{Chain, ChainConfig};
pub use clock::{Clock, SystemClock};
pub use error::{LedgerError, Result};
pub use registry::{
    RegistryConfig, StarRecord, StarRegistry, CHALLENGE_TAG, DEFAULT_CHALLENGE_WINDOW_SECS,
};

// Re-export commonly used core types
pub use starlog_core::{
    Address, Block, BlockHash, StarClaim, StarData, Violation, ViolationKind,
};
