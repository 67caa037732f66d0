//! Hash policy and commitment computation for HTLCs

use crate::error::{HtlcError, Result};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::types::{CalculatedHash, HashAlgorithm, HtlcCommitment};

/// Wire code the ledger uses for RIPEMD160 commitments
pub const RIPEMD160_WIRE_CODE: u8 = 0;

/// Wire code the ledger uses for SHA256 commitments
pub const SHA256_WIRE_CODE: u8 = 2;

/// Resolve a cipher name to a hash algorithm.
///
/// Names are case-sensitive. `sha1` is recognized but always refused.
pub fn resolve_algorithm(cipher: &str) -> Result<HashAlgorithm> {
    match cipher {
        "sha256" => Ok(HashAlgorithm::Sha256),
        "ripemd160" => Ok(HashAlgorithm::Ripemd160),
        "sha1" => Err(HtlcError::UnsafeAlgorithm(cipher.to_string())),
        other => Err(HtlcError::UnknownAlgorithm(other.to_string())),
    }
}

/// Hash a secret into a commitment
pub fn compute_commitment(algorithm: HashAlgorithm, secret: &[u8]) -> HtlcCommitment {
    let digest = match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(secret).to_vec(),
        HashAlgorithm::Ripemd160 => Ripemd160::digest(secret).to_vec(),
    };
    HtlcCommitment::computed(algorithm, digest)
}

/// Ledger wire code for an algorithm
pub fn algorithm_wire_code(algorithm: HashAlgorithm) -> u8 {
    match algorithm {
        HashAlgorithm::Sha256 => SHA256_WIRE_CODE,
        HashAlgorithm::Ripemd160 => RIPEMD160_WIRE_CODE,
    }
}

/// Recover the algorithm from a ledger wire code
pub fn algorithm_from_wire_code(code: u8) -> Result<HashAlgorithm> {
    match code {
        SHA256_WIRE_CODE => Ok(HashAlgorithm::Sha256),
        RIPEMD160_WIRE_CODE => Ok(HashAlgorithm::Ripemd160),
        other => Err(HtlcError::UnknownWireCode(other)),
    }
}

/// Hash a preimage under a named cipher and report the hex digest and its size
pub fn calculate_hash(preimage: &[u8], cipher: &str) -> Result<CalculatedHash> {
    let algorithm = resolve_algorithm(cipher)?;
    let commitment = compute_commitment(algorithm, preimage);

    Ok(CalculatedHash {
        hash: commitment.to_hex(),
        size: commitment.digest().len(),
    })
}
