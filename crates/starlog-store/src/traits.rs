//! ChainStore trait: the abstract interface for block persistence.
//!
//! This trait keeps the chain storage-agnostic. The bundled
//! implementation is in-memory; callers that need durability supply
//! their own backend.

use async_trait::async_trait;
use starlog_core::{Block, BlockHash};

use crate::error::Result;

/// Async interface for an append-only block sequence.
///
/// # Design Notes
///
/// - **Append-only**: no deletion, no in-place edits of committed
///   blocks.
/// - **Ordered**: `append` rejects a block whose height is not exactly
///   the current length. This is a backstop beneath the chain's writer
///   lock, not a substitute for it.
/// - **A miss is not an error**: lookups return `None` for absent
///   blocks.
/// - **No partial visibility**: a block handed to `append` is already
///   sealed; readers either see it whole or not at all.
#[async_trait]
pub trait ChainStore: Send + Sync {
    /// Append a sealed block at the tail.
    async fn append(&self, block: Block) -> Result<()>;

    /// Number of committed blocks.
    async fn len(&self) -> Result<u64>;

    /// The current tail block, if any.
    async fn tip(&self) -> Result<Option<Block>>;

    /// Get the block at the given height.
    async fn block_at(&self, height: u64) -> Result<Option<Block>>;

    /// Get the first block whose hash matches, scanning in height
    /// order.
    async fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>>;

    /// A stable copy of the whole chain in height order.
    async fn snapshot(&self) -> Result<Vec<Block>>;
}
