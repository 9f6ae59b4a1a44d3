//! Test fixtures and helpers.
//!
//! Common setup code for integration tests of registry consumers.

use starlog_core::{Address, Ed25519Verifier, Keypair, StarData};
use starlog_store::MemoryStore;
use starlog::{Block, RegistryConfig, Result, StarRegistry};

use crate::clock::ManualClock;

/// Epoch second every fixture clock starts at.
pub const FIXTURE_EPOCH: i64 = 1_700_000_000;

/// A wallet that can request and sign challenges.
pub struct TestWallet {
    keypair: Keypair,
}

impl TestWallet {
    /// Create a wallet with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create a wallet with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// Sign a challenge message, producing the hex signature the
    /// bundled verifier accepts.
    pub fn sign(&self, message: &str) -> String {
        self.keypair.sign(message).to_hex()
    }
}

impl Default for TestWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry over a memory store, real Ed25519 verification, and a
/// manual clock starting at [`FIXTURE_EPOCH`].
pub struct RegistryFixture {
    pub registry: StarRegistry<MemoryStore, Ed25519Verifier>,
    pub clock: ManualClock,
}

impl RegistryFixture {
    /// Open a fixture with default configuration.
    pub async fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default()).await
    }

    /// Open a fixture with the given configuration.
    pub async fn with_config(config: RegistryConfig) -> Result<Self> {
        let clock = ManualClock::at(FIXTURE_EPOCH);
        let registry =
            StarRegistry::open(MemoryStore::new(), Ed25519Verifier, clock.clone(), config).await?;
        Ok(Self { registry, clock })
    }

    /// Drive the full happy-path protocol for one claim.
    pub async fn claim(&self, wallet: &TestWallet, star: StarData) -> Result<Block> {
        let address = wallet.address();
        let message = self.registry.challenge(&address);
        let signature = wallet.sign(&message);
        self.registry.submit(&address, &message, &signature, star).await
    }
}

/// Create distinct deterministic wallets for multi-party tests.
pub fn multi_wallet_fixtures(count: usize) -> Vec<TestWallet> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestWallet::with_seed(seed)
        })
        .collect()
}

/// A small fixed star for tests.
pub fn sample_star() -> StarData {
    StarData {
        ra: "16h 29m 1.0s".to_string(),
        dec: "-26 29 24.9".to_string(),
        story: Some("found it first".to_string()),
    }
}
