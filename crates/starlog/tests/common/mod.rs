//! Shared helpers for the integration suites.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use starlog::core::{Keypair, StarData};
use starlog::store::MemoryStore;
use starlog::{Clock, RegistryConfig, StarRegistry};

pub const START: i64 = 1_700_000_000;

/// Fixed instant that only moves when told to. Clones share the same
/// instant, so a test can hand one copy to the registry and keep
/// another to advance time.
#[derive(Clone)]
pub struct TestClock(Arc<AtomicI64>);

impl TestClock {
    pub fn at(now: i64) -> Self {
        Self(Arc::new(AtomicI64::new(now)))
    }

    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now_secs(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub type TestRegistry = StarRegistry<MemoryStore, starlog::core::Ed25519Verifier>;

/// Registry over a fresh memory store with real signature checking.
pub async fn open_registry() -> (TestRegistry, TestClock) {
    open_registry_with(MemoryStore::new()).await
}

/// Same, over a pre-seeded store.
pub async fn open_registry_with(store: MemoryStore) -> (TestRegistry, TestClock) {
    init_tracing();
    let clock = TestClock::at(START);
    let registry = StarRegistry::open(
        store,
        starlog::core::Ed25519Verifier,
        clock.clone(),
        RegistryConfig::default(),
    )
    .await
    .expect("registry opens");
    (registry, clock)
}

/// Run the full happy-path protocol for one claim.
pub async fn claim(
    registry: &TestRegistry,
    wallet: &Keypair,
    star: StarData,
) -> starlog::Result<starlog::Block> {
    let address = wallet.address();
    let message = registry.challenge(&address);
    let signature = wallet.sign(&message).to_hex();
    registry.submit(&address, &message, &signature, star).await
}

pub fn star(ra: &str, dec: &str) -> StarData {
    StarData {
        ra: ra.to_string(),
        dec: dec.to_string(),
        story: None,
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}
