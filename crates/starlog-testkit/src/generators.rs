//! Proptest generators for property-based testing.

use proptest::prelude::*;

use starlog_core::{Address, Block, BlockHash, Keypair, StarData};

/// Generate a deterministic keypair from a random seed.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a wallet address.
pub fn address() -> impl Strategy<Value = Address> {
    keypair().prop_map(|kp| kp.address())
}

/// Generate a random BlockHash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a star coordinate string.
pub fn star_coord() -> impl Strategy<Value = String> {
    "[0-9]{1,2}h [0-9]{1,2}m [0-9]{1,2}\\.[0-9]s".prop_map(String::from)
}

/// Generate star data, with and without a story.
pub fn star_data() -> impl Strategy<Value = StarData> {
    (star_coord(), star_coord(), prop::option::of("[ -~]{0,64}")).prop_map(
        |(ra, dec, story)| StarData { ra, dec, story },
    )
}

/// Generate payload bytes of bounded length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a plausible epoch second.
pub fn epoch_secs() -> impl Strategy<Value = i64> {
    0i64..=4_000_000_000
}

/// Seal an honest chain out of the given payloads.
pub fn seal_chain(genesis_time: i64, payloads: &[Vec<u8>]) -> Vec<Block> {
    let mut blocks = vec![Block::genesis(genesis_time)];
    for (i, payload) in payloads.iter().enumerate() {
        let prev = blocks[i].hash;
        blocks.push(Block::seal(
            (i + 1) as u64,
            genesis_time + 1 + i as i64,
            Some(prev),
            payload.clone(),
        ));
    }
    blocks
}
