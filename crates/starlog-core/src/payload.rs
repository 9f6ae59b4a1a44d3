//! Block payload encoding.
//!
//! Payloads are opaque bytes at the chain layer. The genesis block
//! carries a fixed sentinel; every other block carries a CBOR-encoded
//! star claim. Decoding is total: bytes that match neither are reported
//! as malformed instead of failing a caller's scan.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Address;

/// Sentinel payload carried by the genesis block. Carries no owner.
pub const GENESIS_PAYLOAD: &[u8] = b"Genesis Block";

/// Coordinates and story for a claimed star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarData {
    /// Right ascension, e.g. `"16h 29m 1.0s"`.
    pub ra: String,
    /// Declination, e.g. `"-26 29 24.9"`.
    pub dec: String,
    /// Optional free-text story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
}

/// An ownership claim: the payload of every non-genesis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarClaim {
    /// The claiming wallet address.
    pub owner: Address,
    /// The claimed star.
    pub star: StarData,
}

impl StarClaim {
    /// Encode to the payload bytes carried by a block.
    pub fn encode(&self) -> Result<Bytes, CoreError> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| CoreError::Encoding(e.to_string()))?;
        Ok(buf.into())
    }

    /// Decode from payload bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::Decoding(e.to_string()))
    }
}

/// The result of decoding a block payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    /// The genesis sentinel.
    Genesis,
    /// A well-formed ownership claim.
    Claim(StarClaim),
    /// Bytes that are neither the sentinel nor a decodable claim.
    Malformed,
}

/// Decode payload bytes without ever failing the caller.
pub fn decode_payload(bytes: &[u8]) -> DecodedPayload {
    if bytes == GENESIS_PAYLOAD {
        return DecodedPayload::Genesis;
    }
    match StarClaim::decode(bytes) {
        Ok(claim) => DecodedPayload::Claim(claim),
        Err(_) => DecodedPayload::Malformed,
    }
}
