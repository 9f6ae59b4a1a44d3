//! Block: the unit of the chain.
//!
//! A block is sealed once: height, time, link, and payload go in, the
//! digest comes out, and none of them change afterwards. Alterations
//! show up as a digest mismatch on the next audit.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::block_digest;
use crate::payload::{decode_payload, DecodedPayload, GENESIS_PAYLOAD};
use crate::types::BlockHash;

/// A sealed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; equals the block's index.
    pub height: u64,

    /// Seconds since epoch, assigned from the chain's time source.
    pub time: i64,

    /// Hash of the block at `height - 1`; `None` only for genesis.
    pub previous_hash: Option<BlockHash>,

    /// Digest over the other fields; the block's identity.
    pub hash: BlockHash,

    /// Opaque encoded payload.
    pub payload: Bytes,
}

impl Block {
    /// Seal a block: populate every field and compute its digest.
    ///
    /// The only constructor; there is no unsealed state.
    pub fn seal(
        height: u64,
        time: i64,
        previous_hash: Option<BlockHash>,
        payload: impl Into<Bytes>,
    ) -> Self {
        let payload = payload.into();
        let hash = block_digest(height, time, previous_hash.as_ref(), &payload);
        Self {
            height,
            time,
            previous_hash,
            hash,
            payload,
        }
    }

    /// Seal the genesis block for a fresh chain.
    pub fn genesis(time: i64) -> Self {
        Self::seal(0, time, None, GENESIS_PAYLOAD)
    }

    /// Recompute the digest from the current fields and compare it to
    /// the stored hash. `false` means the block was altered after
    /// sealing.
    pub fn verify_hash(&self) -> bool {
        block_digest(self.height, self.time, self.previous_hash.as_ref(), &self.payload)
            == self.hash
    }

    /// Whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_none()
    }

    /// Decode the payload.
    ///
    /// Total: the genesis sentinel and undecodable bytes come back as
    /// their own variants rather than errors.
    pub fn decode_payload(&self) -> DecodedPayload {
        decode_payload(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{StarClaim, StarData};
    use crate::types::Address;

    #[test]
    fn test_genesis_shape() {
        let genesis = Block::genesis(1_700_000_000);
        assert_eq!(genesis.height, 0);
        assert_eq!(genesis.previous_hash, None);
        assert!(genesis.is_genesis());
        assert!(genesis.verify_hash());
        assert_eq!(genesis.decode_payload(), DecodedPayload::Genesis);
    }

    #[test]
    fn test_seal_deterministic() {
        let prev = BlockHash::from_bytes([0x11; 32]);
        let b1 = Block::seal(1, 1_700_000_000, Some(prev), b"payload".to_vec());
        let b2 = Block::seal(1, 1_700_000_000, Some(prev), b"payload".to_vec());
        assert_eq!(b1.hash, b2.hash);
    }

    #[test]
    fn test_tampered_payload_fails_hash_check() {
        let mut block = Block::seal(1, 0, Some(BlockHash::ZERO), b"honest".to_vec());
        assert!(block.verify_hash());

        block.payload = Bytes::from_static(b"tampered");
        assert!(!block.verify_hash());
    }

    #[test]
    fn test_tampered_link_fails_hash_check() {
        let mut block = Block::seal(1, 0, Some(BlockHash::ZERO), b"honest".to_vec());
        block.previous_hash = Some(BlockHash::from_bytes([0x99; 32]));
        assert!(!block.verify_hash());
    }

    #[test]
    fn test_claim_block_decodes() {
        let claim = StarClaim {
            owner: Address::new("addr1"),
            star: StarData {
                ra: "2".to_string(),
                dec: "1".to_string(),
                story: None,
            },
        };
        let block = Block::seal(1, 0, Some(BlockHash::ZERO), claim.encode().unwrap());
        assert_eq!(block.decode_payload(), DecodedPayload::Claim(claim));
        assert!(!block.is_genesis());
    }
}
