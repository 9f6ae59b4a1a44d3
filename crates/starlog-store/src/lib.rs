//! # starlog-store
//!
//! Storage seam for the starlog ledger: the [`ChainStore`] trait and
//! the in-memory reference implementation.
//!
//! The chain core keeps no durable state of its own. Durability belongs
//! to whichever backend a caller supplies behind [`ChainStore`]; the
//! bundled [`MemoryStore`] keeps the chain in process memory for the
//! lifetime of the instance.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::ChainStore;
