//! Transaction submission seam

use crate::error::Result;
use crate::operations::{Operation, OperationKind};
use futures::future::BoxFuture;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result of a successful submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub kind: OperationKind,
    pub transaction_id: String,
    pub broadcast: bool,
}

/// Signs and broadcasts operations on behalf of the wallet.
///
/// Implementations report failures as `NetworkFailure`, `SignatureFailure`
/// or `LedgerRejected`. Callers submit at most once per operation; retry
/// policy, if any, lives behind this trait.
pub trait TransactionSubmitter: Send + Sync {
    fn submit(&self, operation: Operation, broadcast: bool) -> BoxFuture<'_, Result<SubmissionReceipt>>;
}

/// Operation recorded by `DryRunSubmitter`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedOperation {
    pub operation: Operation,
    pub broadcast: bool,
    pub transaction_id: String,
}

/// Submitter that records operations instead of sending them anywhere
#[derive(Clone, Default)]
pub struct DryRunSubmitter {
    submitted: Arc<Mutex<Vec<SubmittedOperation>>>,
}

impl DryRunSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far, oldest first
    pub async fn submitted(&self) -> Vec<SubmittedOperation> {
        self.submitted.lock().await.clone()
    }
}

/// Deterministic id: SHA256 over the JSON encoding of the operation
pub fn dry_run_transaction_id(operation: &Operation) -> Result<String> {
    let encoded = serde_json::to_vec(operation)?;
    Ok(hex::encode(Sha256::digest(&encoded)))
}

impl TransactionSubmitter for DryRunSubmitter {
    fn submit(&self, operation: Operation, broadcast: bool) -> BoxFuture<'_, Result<SubmissionReceipt>> {
        Box::pin(async move {
            let transaction_id = dry_run_transaction_id(&operation)?;
            let receipt = SubmissionReceipt {
                kind: operation.kind(),
                transaction_id: transaction_id.clone(),
                broadcast,
            };

            tracing::debug!("Dry run {} recorded as {}", receipt.kind, transaction_id);

            self.submitted.lock().await.push(SubmittedOperation {
                operation,
                broadcast,
                transaction_id,
            });

            Ok(receipt)
        })
    }
}
