//! Error types for the HTLC wallet

use thiserror::Error;

/// Main error type for the HTLC wallet
#[derive(Error, Debug)]
pub enum HtlcError {
    // Hash algorithm errors
    #[error("{0} is not considered a secure hashing algorithm, please use sha256")]
    UnsafeAlgorithm(String),

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown hash algorithm wire code: {0}")]
    UnknownWireCode(u8),

    #[error("Digest length mismatch for {algorithm}: expected {expected} bytes, got {actual}")]
    DigestLengthMismatch {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    // Operation construction errors
    #[error("Preimage must be given if preimage size is empty")]
    MissingPreimageSize,

    #[error("Either a preimage or a preimage hash must be given")]
    MissingCommitment,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid object id: {0}")]
    InvalidObjectId(String),

    // Submission errors
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Signature failure: {0}")]
    SignatureFailure(String),

    #[error("Ledger rejected operation: {0}")]
    LedgerRejected(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

impl HtlcError {
    /// True for failures raised by the submission collaborator rather than
    /// during payload construction
    pub fn is_submission_error(&self) -> bool {
        matches!(
            self,
            HtlcError::NetworkFailure(_) | HtlcError::SignatureFailure(_) | HtlcError::LedgerRejected(_)
        )
    }
}

/// Result type alias for HTLC wallet operations
pub type Result<T> = std::result::Result<T, HtlcError>;
