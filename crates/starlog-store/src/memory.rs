//! In-memory implementation of the ChainStore trait.
//!
//! The reference backend: the chain lives in process memory for the
//! lifetime of the instance. Thread-safe via RwLock.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use starlog_core::{Block, BlockHash};

use crate::error::{Result, StoreError};
use crate::traits::ChainStore;

/// In-memory block store.
///
/// All data is lost when the store is dropped.
pub struct MemoryStore {
    blocks: RwLock<Vec<Block>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
        }
    }

    /// Seed a store with previously committed blocks, e.g. rehydrated
    /// from a caller's durability layer.
    ///
    /// The blocks are taken as-is; run an audit over the chain to check
    /// their integrity.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks: RwLock::new(blocks),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainStore for MemoryStore {
    async fn append(&self, block: Block) -> Result<()> {
        let mut blocks = self.blocks.write().unwrap();

        let expected = blocks.len() as u64;
        if block.height != expected {
            return Err(StoreError::OutOfOrder {
                expected,
                got: block.height,
            });
        }

        debug!(height = block.height, hash = %block.hash, "block committed");
        blocks.push(block);
        Ok(())
    }

    async fn len(&self) -> Result<u64> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.len() as u64)
    }

    async fn tip(&self) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.last().cloned())
    }

    async fn block_at(&self, height: u64) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.get(height as usize).cloned())
    }

    async fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.iter().find(|b| &b.hash == hash).cloned())
    }

    async fn snapshot(&self) -> Result<Vec<Block>> {
        let blocks = self.blocks.read().unwrap();
        Ok(blocks.clone())
    }
}
