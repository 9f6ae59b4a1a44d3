//! Signing and verification primitives.
//!
//! Wraps Ed25519 with strong types. The chain itself never signs
//! anything; wallets sign challenge messages out of band, and the
//! registry checks them through the [`SignatureVerifier`] seam.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use std::fmt;

use crate::types::Address;

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; 64]);

impl Ed25519Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string, the form the registry accepts.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Sig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A keypair for signing challenge messages.
///
/// This wraps ed25519-dalek's SigningKey. Its address is the hex
/// encoding of the verifying key.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The wallet address for this keypair.
    pub fn address(&self) -> Address {
        Address::new(hex::encode(self.signing_key.verifying_key().to_bytes()))
    }

    /// Sign a challenge message.
    pub fn sign(&self, message: &str) -> Ed25519Signature {
        let sig = self.signing_key.sign(message.as_bytes());
        Ed25519Signature(sig.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.address())
    }
}

/// Opaque signature check: message, address, and signature in, bool out.
///
/// Failures inside a verifier (malformed address, undecodable signature)
/// report as `false`, never as an error.
pub trait SignatureVerifier: Send + Sync {
    /// Whether `signature` is a valid signature over `message` by the
    /// key behind `address`.
    fn verify(&self, message: &str, address: &Address, signature: &str) -> bool;
}

/// Verifier for hex-encoded Ed25519 addresses and signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    fn try_verify(message: &str, address: &Address, signature: &str) -> Option<()> {
        let pk: [u8; 32] = hex::decode(address.as_str()).ok()?.try_into().ok()?;
        let key = VerifyingKey::from_bytes(&pk).ok()?;
        let sig: [u8; 64] = hex::decode(signature).ok()?.try_into().ok()?;
        key.verify(message.as_bytes(), &Signature::from_bytes(&sig)).ok()
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, message: &str, address: &Address, signature: &str) -> bool {
        Self::try_verify(message, address, signature).is_some()
    }
}
