//! HTLC wallet library
//!
//! Client-side construction of hashed timelock contract operations for a
//! Graphene-style ledger:
//! - Hash commitments under SHA256 or RIPEMD160 (SHA1 is refused)
//! - `htlc_create`, `htlc_redeem` and `htlc_extend` payload assembly
//! - Submission through an injected `TransactionSubmitter`
//! - In-memory caches for gateway coins and liquidity pools

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod operations;
pub mod stores;
pub mod types;
pub mod wallet;

// Re-export commonly used types and functions
pub use config::WalletConfig;
pub use crypto::{
    algorithm_from_wire_code, algorithm_wire_code, calculate_hash, compute_commitment,
    resolve_algorithm, CalculatedHash, HashAlgorithm, HtlcCommitment, Preimage,
};
pub use error::{HtlcError, Result};
pub use operations::{
    HtlcCreateParams, HtlcExtendParams, HtlcRedeemParams, Operation, OperationBuilder,
};
pub use types::{AccountId, Asset, AssetAmount, AssetId, FeeAsset, HtlcId};
pub use wallet::{DryRunSubmitter, HtlcActions, SubmissionReceipt, TransactionSubmitter};
