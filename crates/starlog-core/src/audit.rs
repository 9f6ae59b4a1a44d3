//! Chain integrity audit.
//!
//! Walks a chain in height order and reports every violation found. The
//! list is advisory: callers decide whether a non-empty result is fatal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::block::Block;
use crate::types::BlockHash;

/// The kind of an integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Stored hash does not match the digest recomputed from the
    /// block's current fields.
    HashMismatch,
    /// `previous_hash` does not match the actual predecessor's hash.
    LinkMismatch,
}

/// A single integrity violation, tagged with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Height of the offending block.
    pub height: u64,
    /// Stored hash of the offending block.
    pub hash: BlockHash,
    /// What failed.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::HashMismatch => {
                write!(f, "hash mismatch at height {} ({})", self.height, self.hash)
            }
            ViolationKind::LinkMismatch => {
                write!(f, "broken link at height {} ({})", self.height, self.hash)
            }
        }
    }
}

/// Check a block's stored hash against its recomputed digest.
pub fn audit_block(block: &Block) -> Option<Violation> {
    if block.verify_hash() {
        None
    } else {
        Some(Violation {
            height: block.height,
            hash: block.hash,
            kind: ViolationKind::HashMismatch,
        })
    }
}

/// Check a block's link against its actual predecessor.
pub fn audit_link(previous: &Block, block: &Block) -> Option<Violation> {
    if block.previous_hash == Some(previous.hash) {
        None
    } else {
        Some(Violation {
            height: block.height,
            hash: block.hash,
            kind: ViolationKind::LinkMismatch,
        })
    }
}

/// Walk a chain in height order and collect every violation.
///
/// Both checks run for each block even when one has already failed, so a
/// single block can contribute a hash violation and a link violation at
/// once. The genesis block must carry no link at all. An empty result
/// means the chain is intact.
pub fn audit_chain(blocks: &[Block]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        if let Some(v) = audit_block(block) {
            violations.push(v);
        }

        if i == 0 {
            if block.previous_hash.is_some() {
                violations.push(Violation {
                    height: block.height,
                    hash: block.hash,
                    kind: ViolationKind::LinkMismatch,
                });
            }
        } else if let Some(v) = audit_link(&blocks[i - 1], block) {
            violations.push(v);
        }
    }

    violations
}
