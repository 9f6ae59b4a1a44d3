//! Canonical digest encoding for blocks.
//!
//! The digest input is RFC 8949 core deterministic CBOR over the block's
//! identity fields:
//! - Integer map keys, already in sorted order (0 through 3)
//! - Integers use the smallest valid encoding
//! - Definite lengths only
//! - No floats (times are i64 seconds)
//!
//! The same fields must produce identical bytes, and thus an identical
//! digest, on every platform and across process restarts. There is no
//! ambient salt or nonce.

use crate::types::BlockHash;

/// Domain-separation prefix fed to the digest ahead of the encoded
/// fields.
pub const DIGEST_DOMAIN: &[u8] = b"starlog-block-v0:";

/// Digest-input field keys. Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const HEIGHT: u64 = 0;
    pub const TIME: u64 = 1;
    pub const PREVIOUS_HASH: u64 = 2;
    pub const PAYLOAD: u64 = 3;
}

const MAJOR_UINT: u8 = 0;
const MAJOR_NEGINT: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_MAP: u8 = 5;

/// CBOR null (absent previous hash, genesis only).
const NULL: u8 = 0xf6;

/// Encode the digest input for a block's identity fields.
///
/// A four-entry map with integer keys; `previous_hash` encodes as null
/// when absent.
pub fn digest_bytes(
    height: u64,
    time: i64,
    previous_hash: Option<&BlockHash>,
    payload: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + 64);

    encode_uint(&mut buf, MAJOR_MAP, 4);

    encode_uint(&mut buf, MAJOR_UINT, keys::HEIGHT);
    encode_uint(&mut buf, MAJOR_UINT, height);

    encode_uint(&mut buf, MAJOR_UINT, keys::TIME);
    encode_int(&mut buf, time);

    encode_uint(&mut buf, MAJOR_UINT, keys::PREVIOUS_HASH);
    match previous_hash {
        Some(hash) => encode_bytes(&mut buf, hash.as_bytes()),
        None => buf.push(NULL),
    }

    encode_uint(&mut buf, MAJOR_UINT, keys::PAYLOAD);
    encode_bytes(&mut buf, payload);

    buf
}

/// Compute a block digest: Blake3 over the domain tag and digest input.
pub fn block_digest(
    height: u64,
    time: i64,
    previous_hash: Option<&BlockHash>,
    payload: &[u8],
) -> BlockHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DIGEST_DOMAIN);
    hasher.update(&digest_bytes(height, time, previous_hash, payload));
    BlockHash(*hasher.finalize().as_bytes())
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a signed integer (major types 0 and 1).
///
/// CBOR encodes -1 as 0, -2 as 1, and so on.
fn encode_int(buf: &mut Vec<u8>, n: i64) {
    if n >= 0 {
        encode_uint(buf, MAJOR_UINT, n as u64);
    } else {
        encode_uint(buf, MAJOR_NEGINT, !(n as u64));
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, MAJOR_BYTES, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uint_smallest_encoding() {
        let mut buf = Vec::new();

        // 0-23: single byte
        encode_uint(&mut buf, MAJOR_UINT, 0);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        encode_uint(&mut buf, MAJOR_UINT, 23);
        assert_eq!(buf, vec![0x17]);

        // 24-255: two bytes
        buf.clear();
        encode_uint(&mut buf, MAJOR_UINT, 24);
        assert_eq!(buf, vec![0x18, 24]);

        // 256-65535: three bytes
        buf.clear();
        encode_uint(&mut buf, MAJOR_UINT, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        // 32-bit range
        buf.clear();
        encode_uint(&mut buf, MAJOR_UINT, 65536);
        assert_eq!(buf, vec![0x1a, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_negative_time_encoding() {
        let mut buf = Vec::new();
        encode_int(&mut buf, -1);
        assert_eq!(buf, vec![0x20]);

        buf.clear();
        encode_int(&mut buf, -25);
        assert_eq!(buf, vec![0x38, 24]);
    }

    #[test]
    fn test_genesis_encodes_null_link() {
        let bytes = digest_bytes(0, 0, None, b"");
        // a4 (map of 4), key 0, value 0, key 1, value 0, key 2, null, key 3, empty bytes
        assert_eq!(bytes, vec![0xa4, 0x00, 0x00, 0x01, 0x00, 0x02, 0xf6, 0x03, 0x40]);
    }

    #[test]
    fn test_linked_block_encodes_hash_bytes() {
        let prev = BlockHash::from_bytes([0xaa; 32]);
        let bytes = digest_bytes(1, 10, Some(&prev), b"x");

        // key 2 is followed by a 32-byte string header (0x58 0x20)
        let pos = bytes.iter().position(|&b| b == 0x02).unwrap();
        assert_eq!(&bytes[pos + 1..pos + 3], &[0x58, 0x20]);
        assert_eq!(&bytes[pos + 3..pos + 35], &[0xaa; 32]);
    }

    #[test]
    fn test_digest_covers_every_field() {
        let prev = BlockHash::from_bytes([0x11; 32]);
        let base = block_digest(1, 100, Some(&prev), b"payload");

        assert_ne!(base, block_digest(2, 100, Some(&prev), b"payload"));
        assert_ne!(base, block_digest(1, 101, Some(&prev), b"payload"));
        assert_ne!(base, block_digest(1, 100, None, b"payload"));
        assert_ne!(base, block_digest(1, 100, Some(&prev), b"other"));
    }

    proptest! {
        #[test]
        fn test_digest_deterministic(
            height in any::<u64>(),
            time in any::<i64>(),
            prev in any::<Option<[u8; 32]>>(),
            payload in prop::collection::vec(any::<u8>(), 0..256),
        ) {
            let prev = prev.map(BlockHash::from_bytes);
            let d1 = block_digest(height, time, prev.as_ref(), &payload);
            let d2 = block_digest(height, time, prev.as_ref(), &payload);
            prop_assert_eq!(d1, d2);
        }

        #[test]
        fn test_payload_feeds_digest(
            p1 in prop::collection::vec(any::<u8>(), 0..64),
            p2 in prop::collection::vec(any::<u8>(), 0..64),
        ) {
            prop_assume!(p1 != p2);
            prop_assert_ne!(
                block_digest(1, 0, None, &p1),
                block_digest(1, 0, None, &p2)
            );
        }
    }
}
