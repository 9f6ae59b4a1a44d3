//! The chain: genesis, audited hash-linked appends, and block queries.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::debug;

use starlog_core::{audit_block, audit_chain, audit_link, Block, BlockHash, Violation};
use starlog_store::{ChainStore, StoreError};

use crate::clock::Clock;
use crate::error::{LedgerError, Result};

/// Configuration for a chain instance.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Re-audit the entire chain before committing each append.
    ///
    /// When disabled, an append checks only the candidate's own digest
    /// and its link to the tail; [`Chain::audit`] remains available for
    /// the full walk. Both modes detect the same violations.
    pub audit_on_append: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            audit_on_append: true,
        }
    }
}

/// An append-only, hash-linked block sequence over a storage backend.
///
/// Appends are serialized: at most one is in flight at a time, so
/// heights advance by exactly one and audits never observe a chain that
/// is mid-mutation. Reads run concurrently against stable snapshots.
/// Each instance owns its store, so independent ledgers coexist in one
/// process.
pub struct Chain<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    config: ChainConfig,
    /// Single-writer lock over the assign-seal-audit-commit sequence.
    append_lock: Mutex<()>,
}

impl<S: ChainStore> Chain<S> {
    /// Open a chain over the given store, creating the genesis block if
    /// the store is empty.
    ///
    /// Idempotent: opening over a populated store changes nothing, so a
    /// chain is never observable without its genesis block.
    pub async fn open(store: S, clock: impl Clock + 'static, config: ChainConfig) -> Result<Self> {
        let chain = Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
            config,
            append_lock: Mutex::new(()),
        };
        chain.init_genesis().await?;
        Ok(chain)
    }

    async fn init_genesis(&self) -> Result<()> {
        let _guard = self.append_lock.lock().await;

        if self.store.len().await? > 0 {
            return Ok(());
        }

        let genesis = Block::genesis(self.clock.now_secs());
        debug!(hash = %genesis.hash, "genesis block created");
        self.store.append(genesis).await?;
        Ok(())
    }

    /// Current height: the index of the tail block.
    pub async fn height(&self) -> Result<u64> {
        let len = self.store.len().await?;
        Ok(len.saturating_sub(1))
    }

    /// Append a new block carrying the given payload.
    ///
    /// Assigns height, time, and the link to the tail, seals the block,
    /// audits, and only then commits. On any violation the candidate is
    /// dropped and [`LedgerError::ChainCorrupted`] reports the full
    /// list.
    pub(crate) async fn add_block(&self, payload: Bytes) -> Result<Block> {
        let _guard = self.append_lock.lock().await;

        let committed = self.store.snapshot().await?;
        let tip = committed
            .last()
            .cloned()
            .ok_or_else(|| StoreError::InvalidData("chain has no genesis block".into()))?;

        let block = Block::seal(
            committed.len() as u64,
            self.clock.now_secs(),
            Some(tip.hash),
            payload,
        );

        let violations = if self.config.audit_on_append {
            let mut prospective = committed;
            prospective.push(block.clone());
            audit_chain(&prospective)
        } else {
            audit_block(&block)
                .into_iter()
                .chain(audit_link(&tip, &block))
                .collect()
        };

        if !violations.is_empty() {
            return Err(LedgerError::ChainCorrupted(violations));
        }

        self.store.append(block.clone()).await?;
        debug!(height = block.height, hash = %block.hash, "block appended");
        Ok(block)
    }

    /// Walk the whole chain and report every integrity violation.
    ///
    /// Empty means intact. The list is advisory; nothing is mutated.
    pub async fn audit(&self) -> Result<Vec<Violation>> {
        let snapshot = self.store.snapshot().await?;
        Ok(audit_chain(&snapshot))
    }

    /// Get the block with the given hash, or `None`.
    pub async fn block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        Ok(self.store.block_by_hash(hash).await?)
    }

    /// Get the block at the given height, or `None`.
    pub async fn block_by_height(&self, height: u64) -> Result<Option<Block>> {
        Ok(self.store.block_at(height).await?)
    }

    /// A stable copy of the whole chain in height order.
    pub async fn snapshot(&self) -> Result<Vec<Block>> {
        Ok(self.store.snapshot().await?)
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
