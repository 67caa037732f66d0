//! Hash commitments for hashed timelock contracts

pub mod commitment;
pub mod types;

pub use commitment::{
    algorithm_from_wire_code, algorithm_wire_code, calculate_hash, compute_commitment,
    resolve_algorithm, RIPEMD160_WIRE_CODE, SHA256_WIRE_CODE,
};
pub use types::{CalculatedHash, HashAlgorithm, HtlcCommitment, Preimage};
