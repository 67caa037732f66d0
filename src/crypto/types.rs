//! Cryptographic types for HTLC commitments

use crate::error::{HtlcError, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash algorithms accepted for HTLC commitments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    Ripemd160,
}

impl HashAlgorithm {
    /// Fixed digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Ripemd160 => 20,
        }
    }

    /// Textual name as accepted by `resolve_algorithm`
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Ripemd160 => "ripemd160",
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HtlcError;

    fn from_str(s: &str) -> Result<Self> {
        super::resolve_algorithm(s)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Hash commitment published when an HTLC is created
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HtlcCommitment {
    algorithm: HashAlgorithm,
    #[serde(with = "hex::serde")]
    digest: Vec<u8>,
}

impl HtlcCommitment {
    /// Wrap an already computed digest, checking its length
    pub fn from_digest(algorithm: HashAlgorithm, digest: Vec<u8>) -> Result<Self> {
        if digest.len() != algorithm.digest_len() {
            return Err(HtlcError::DigestLengthMismatch {
                algorithm: algorithm.name(),
                expected: algorithm.digest_len(),
                actual: digest.len(),
            });
        }
        Ok(Self { algorithm, digest })
    }

    /// Build from a digest computed locally; length is guaranteed by the hasher
    pub(crate) fn computed(algorithm: HashAlgorithm, digest: Vec<u8>) -> Self {
        debug_assert_eq!(digest.len(), algorithm.digest_len());
        Self { algorithm, digest }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }

    /// Get digest as hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.digest)
    }
}

/// Secret preimage revealed to redeem an HTLC
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preimage(#[serde(with = "hex::serde")] pub Vec<u8>);

impl Preimage {
    /// Generate a random secret of `len` bytes
    pub fn random(len: usize) -> Self {
        let mut secret = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut secret);
        Preimage(secret)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get secret as hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Create secret from hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Ok(Preimage(hex::decode(hex_str)?))
    }
}

impl From<Vec<u8>> for Preimage {
    fn from(bytes: Vec<u8>) -> Self {
        Preimage(bytes)
    }
}

impl From<&[u8]> for Preimage {
    fn from(bytes: &[u8]) -> Self {
        Preimage(bytes.to_vec())
    }
}

impl From<&str> for Preimage {
    fn from(text: &str) -> Self {
        Preimage(text.as_bytes().to_vec())
    }
}

/// Hex digest and its size, as shown before creating a contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedHash {
    pub hash: String,
    pub size: usize,
}
