//! HTLC wallet actions: build, submit, report

use crate::config::WalletConfig;
use crate::crypto::{self, CalculatedHash};
use crate::error::Result;
use crate::operations::{
    HtlcCreateParams, HtlcExtendParams, HtlcRedeemParams, Operation, OperationBuilder,
};

use super::submitter::{SubmissionReceipt, TransactionSubmitter};

/// Entry points for creating, redeeming and extending HTLCs.
///
/// The submitter is injected; every action submits at most once and hands
/// the submitter's result back to the caller.
pub struct HtlcActions<S> {
    submitter: S,
    builder: OperationBuilder,
    broadcast: bool,
}

impl<S: TransactionSubmitter> HtlcActions<S> {
    pub fn new(submitter: S, config: &WalletConfig) -> Self {
        Self {
            submitter,
            builder: OperationBuilder::new(config.core_asset_id),
            broadcast: config.broadcast,
        }
    }

    pub fn builder(&self) -> &OperationBuilder {
        &self.builder
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Lock funds behind a hash commitment
    pub async fn create(&self, params: HtlcCreateParams) -> Result<SubmissionReceipt> {
        let operation = self.builder.build_create(params).map_err(|e| {
            tracing::warn!("Rejected htlc create: {}", e);
            e
        })?;
        self.submit(operation.into()).await
    }

    /// Reveal the secret to claim an HTLC
    pub async fn redeem(&self, params: HtlcRedeemParams) -> Result<SubmissionReceipt> {
        let operation = self.builder.build_redeem(params);
        self.submit(operation.into()).await
    }

    /// Push an HTLC's expiry further out
    pub async fn extend(&self, params: HtlcExtendParams) -> Result<SubmissionReceipt> {
        let operation = self.builder.build_extend(params).map_err(|e| {
            tracing::warn!("Rejected htlc extend: {}", e);
            e
        })?;
        self.submit(operation.into()).await
    }

    /// Hex digest and size of `preimage` under `cipher`
    pub fn calculate_hash(preimage: &[u8], cipher: &str) -> Result<CalculatedHash> {
        crypto::calculate_hash(preimage, cipher)
    }

    async fn submit(&self, operation: Operation) -> Result<SubmissionReceipt> {
        let kind = operation.kind();

        match self.submitter.submit(operation, self.broadcast).await {
            Ok(receipt) => {
                tracing::info!("{} success: {}", kind, receipt.transaction_id);
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!("{} error: {}", kind, e);
                Err(e)
            }
        }
    }
}
