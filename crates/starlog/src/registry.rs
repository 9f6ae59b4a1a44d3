//! The star registry: challenge issuance, gated submission, and owner
//! queries.
//!
//! The ownership-proof protocol: a wallet requests a challenge message,
//! signs it out of band, and submits address + message + signature +
//! star data. The registry re-derives the challenge's age from the
//! timestamp embedded in the message (there is no pending-challenge
//! table to expire), checks the signature, and only then lets the chain
//! append the claim.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use starlog_core::{
    Address, Block, BlockHash, DecodedPayload, SignatureVerifier, StarClaim, StarData,
};
use starlog_store::ChainStore;

use crate::chain::{Chain, ChainConfig};
use crate::clock::Clock;
use crate::error::{LedgerError, Result};

/// Protocol tag closing every challenge message.
pub const CHALLENGE_TAG: &str = "starRegistry";

/// Default challenge validity window in seconds.
pub const DEFAULT_CHALLENGE_WINDOW_SECS: i64 = 300;

/// Configuration for a registry instance.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Challenge validity window in seconds. A submission whose message
    /// is this old or older is rejected.
    pub challenge_window_secs: i64,

    /// Chain configuration.
    pub chain: ChainConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            challenge_window_secs: DEFAULT_CHALLENGE_WINDOW_SECS,
            chain: ChainConfig::default(),
        }
    }
}

/// A claim returned by the owner scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Height of the block carrying the claim.
    pub height: u64,
    /// Hash of that block.
    pub hash: BlockHash,
    /// The claimed star.
    pub star: StarData,
}

/// Ownership registry layered on a [`Chain`].
pub struct StarRegistry<S, V> {
    chain: Chain<S>,
    verifier: V,
    window: i64,
}

impl<S: ChainStore, V: SignatureVerifier> StarRegistry<S, V> {
    /// Open a registry over the given store, verifier, and clock.
    ///
    /// Initializes the underlying chain (idempotently) as part of
    /// opening.
    pub async fn open(
        store: S,
        verifier: V,
        clock: impl Clock + 'static,
        config: RegistryConfig,
    ) -> Result<Self> {
        let chain = Chain::open(store, clock, config.chain).await?;
        Ok(Self {
            chain,
            verifier,
            window: config.challenge_window_secs,
        })
    }

    /// The underlying chain.
    pub fn chain(&self) -> &Chain<S> {
        &self.chain
    }

    // ─────────────────────────────────────────────────────────────────
    // Challenge & Submission
    // ─────────────────────────────────────────────────────────────────

    /// Issue a challenge message for the given address.
    ///
    /// Format: `<address>:<epoch-seconds>:starRegistry`. The registry
    /// keeps no record of issued challenges; validity is re-derived
    /// from the embedded timestamp at submission time.
    pub fn challenge(&self, address: &Address) -> String {
        format!(
            "{}:{}:{}",
            address,
            self.chain.clock().now_secs(),
            CHALLENGE_TAG
        )
    }

    /// Submit a signed ownership claim.
    ///
    /// Gates run in order, and the chain is untouched unless every one
    /// passes: message parse, challenge window, signature, then the
    /// chain's own audited append.
    pub async fn submit(
        &self,
        address: &Address,
        message: &str,
        signature: &str,
        star: StarData,
    ) -> Result<Block> {
        let issued_at = parse_message_time(message)?;

        let elapsed = self.chain.clock().now_secs() - issued_at;
        if elapsed >= self.window {
            warn!(%address, elapsed, window = self.window, "challenge expired");
            return Err(LedgerError::ChallengeExpired {
                elapsed,
                window: self.window,
            });
        }

        if !self.verifier.verify(message, address, signature) {
            warn!(%address, "signature verification failed");
            return Err(LedgerError::InvalidSignature {
                address: address.clone(),
            });
        }

        let claim = StarClaim {
            owner: address.clone(),
            star,
        };
        let payload = claim.encode()?;

        match self.chain.add_block(payload).await {
            Ok(block) => {
                debug!(%address, height = block.height, "claim committed");
                Ok(block)
            }
            Err(err) => Err(LedgerError::SubmissionRejected(Box::new(err))),
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────

    /// All claims owned by the given address, in chain order.
    ///
    /// The genesis sentinel carries no owner and is skipped. A payload
    /// that fails to decode is skipped with a warning rather than
    /// hiding the rest of the scan.
    pub async fn stars_by_owner(&self, address: &Address) -> Result<Vec<StarRecord>> {
        let blocks = self.chain.snapshot().await?;

        let mut records = Vec::new();
        for block in &blocks {
            match block.decode_payload() {
                DecodedPayload::Claim(claim) if &claim.owner == address => {
                    records.push(StarRecord {
                        height: block.height,
                        hash: block.hash,
                        star: claim.star,
                    });
                }
                DecodedPayload::Claim(_) | DecodedPayload::Genesis => {}
                DecodedPayload::Malformed => {
                    warn!(height = block.height, hash = %block.hash, "skipping undecodable payload");
                }
            }
        }

        Ok(records)
    }
}

/// Parse the issue time out of a challenge message: the second
/// colon-delimited field.
fn parse_message_time(message: &str) -> Result<i64> {
    message
        .split(':')
        .nth(1)
        .and_then(|field| field.parse::<i64>().ok())
        .ok_or_else(|| LedgerError::InvalidMessageFormat(message.to_string()))
}
