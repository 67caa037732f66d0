//! Command execution for the CLI

use crate::config::WalletConfig;
use crate::crypto::{calculate_hash, Preimage};
use crate::error::{HtlcError, Result};
use crate::operations::{HtlcCreateParams, HtlcExtendParams, HtlcRedeemParams};
use crate::wallet::{DryRunSubmitter, HtlcActions, SubmissionReceipt};
use serde_json::{json, Value};

use super::commands::Commands;

/// Largest secret the `secret` command will generate, in bytes
pub const MAX_SECRET_LENGTH: usize = 1024;

/// CLI application wired to a dry-run submitter
pub struct WalletApp {
    actions: HtlcActions<DryRunSubmitter>,
}

impl WalletApp {
    pub fn new(config: &WalletConfig) -> Self {
        Self {
            actions: HtlcActions::new(DryRunSubmitter::new(), config),
        }
    }

    /// Run one command and return its JSON report
    pub async fn run(&self, command: Commands) -> Result<Value> {
        match command {
            Commands::Hash {
                preimage,
                cipher,
                hex,
            } => {
                let preimage = decode_preimage(&preimage, hex)?;
                let calculated = calculate_hash(preimage.as_bytes(), &cipher)?;
                Ok(serde_json::to_value(calculated)?)
            }

            Commands::Secret { length, cipher } => {
                if length == 0 || length > MAX_SECRET_LENGTH {
                    return Err(HtlcError::InvalidParameter(format!(
                        "secret length must be between 1 and {} bytes",
                        MAX_SECRET_LENGTH
                    )));
                }
                let secret = Preimage::random(length);
                let calculated = calculate_hash(secret.as_bytes(), &cipher)?;
                Ok(json!({
                    "secret": secret.to_hex(),
                    "hash": calculated.hash,
                    "size": secret.len(),
                }))
            }

            Commands::Create {
                from,
                to,
                asset,
                amount,
                lock_seconds,
                cipher,
                preimage,
                hex: is_hex,
                preimage_hash,
                preimage_size,
                fee_asset,
            } => {
                let mut params = HtlcCreateParams::new(from, to, asset, amount, lock_seconds, cipher);
                if let Some(preimage) = preimage {
                    params = params.with_preimage(decode_preimage(&preimage, is_hex)?);
                }
                if let Some(digest) = preimage_hash {
                    params = params.with_preimage_hash(hex::decode(digest)?);
                }
                if let Some(size) = preimage_size {
                    params = params.with_preimage_size(size);
                }
                if let Some(fee_asset) = fee_asset {
                    params = params.with_fee_asset(fee_asset);
                }

                let receipt = self.actions.create(params).await?;
                self.report(receipt).await
            }

            Commands::Redeem {
                htlc_id,
                redeemer,
                preimage,
                hex,
            } => {
                let receipt = self
                    .actions
                    .redeem(HtlcRedeemParams {
                        htlc_id,
                        redeemer,
                        preimage: decode_preimage(&preimage, hex)?,
                    })
                    .await?;
                self.report(receipt).await
            }

            Commands::Extend {
                htlc_id,
                issuer,
                seconds,
            } => {
                let receipt = self
                    .actions
                    .extend(HtlcExtendParams {
                        htlc_id,
                        issuer,
                        seconds_to_add: seconds,
                    })
                    .await?;
                self.report(receipt).await
            }
        }
    }

    async fn report(&self, receipt: SubmissionReceipt) -> Result<Value> {
        let operation = self
            .actions
            .submitter()
            .submitted()
            .await
            .into_iter()
            .find(|s| s.transaction_id == receipt.transaction_id)
            .map(|s| s.operation);

        Ok(json!({
            "kind": receipt.kind.as_str(),
            "transaction_id": receipt.transaction_id,
            "broadcast": receipt.broadcast,
            "operation": operation,
        }))
    }
}

fn decode_preimage(input: &str, is_hex: bool) -> Result<Preimage> {
    if is_hex {
        Preimage::from_hex(input)
    } else {
        Ok(Preimage::from(input))
    }
}
