//! HTLC operation parameters and wire payloads

use crate::crypto::Preimage;
use crate::types::{AccountId, AssetAmount, AssetId, FeeAsset, HtlcId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller input for creating an HTLC
#[derive(Clone, Debug)]
pub struct HtlcCreateParams {
    pub from: AccountId,
    pub to: AccountId,
    pub asset_id: AssetId,
    /// Locked amount in the asset's smallest unit
    pub amount: u64,
    /// Seconds until the contract expires
    pub lock_seconds: u32,
    /// Hash algorithm name, resolved with `resolve_algorithm`
    pub cipher: String,
    pub preimage: Option<Preimage>,
    /// Precomputed digest; takes precedence over hashing `preimage`
    pub preimage_hash: Option<Vec<u8>>,
    pub preimage_size: Option<u32>,
    pub fee_asset: Option<FeeAsset>,
}

impl HtlcCreateParams {
    pub fn new(
        from: AccountId,
        to: AccountId,
        asset_id: AssetId,
        amount: u64,
        lock_seconds: u32,
        cipher: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            asset_id,
            amount,
            lock_seconds,
            cipher: cipher.into(),
            preimage: None,
            preimage_hash: None,
            preimage_size: None,
            fee_asset: None,
        }
    }

    pub fn with_preimage(mut self, preimage: impl Into<Preimage>) -> Self {
        self.preimage = Some(preimage.into());
        self
    }

    pub fn with_preimage_hash(mut self, digest: Vec<u8>) -> Self {
        self.preimage_hash = Some(digest);
        self
    }

    pub fn with_preimage_size(mut self, size: u32) -> Self {
        self.preimage_size = Some(size);
        self
    }

    pub fn with_fee_asset(mut self, fee_asset: impl Into<FeeAsset>) -> Self {
        self.fee_asset = Some(fee_asset.into());
        self
    }
}

/// Caller input for redeeming an HTLC
#[derive(Clone, Debug)]
pub struct HtlcRedeemParams {
    pub htlc_id: HtlcId,
    pub redeemer: AccountId,
    pub preimage: Preimage,
}

/// Caller input for extending an HTLC
#[derive(Clone, Debug)]
pub struct HtlcExtendParams {
    pub htlc_id: HtlcId,
    pub issuer: AccountId,
    pub seconds_to_add: u32,
}

/// `[wire_code, digest]` pair carried by `htlc_create`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreimageHash(pub u8, #[serde(with = "hex::serde")] pub Vec<u8>);

impl PreimageHash {
    pub fn wire_code(&self) -> u8 {
        self.0
    }

    pub fn digest(&self) -> &[u8] {
        &self.1
    }
}

/// `htlc_create` payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtlcCreateOperation {
    pub from: AccountId,
    pub to: AccountId,
    pub fee: AssetAmount,
    pub amount: AssetAmount,
    pub preimage_hash: PreimageHash,
    pub preimage_size: u32,
    pub claim_period_seconds: u32,
}

/// `htlc_redeem` payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtlcRedeemOperation {
    /// Hex encoded secret
    pub preimage: String,
    pub fee: AssetAmount,
    pub htlc_id: HtlcId,
    pub redeemer: AccountId,
}

/// `htlc_extend` payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtlcExtendOperation {
    pub fee: AssetAmount,
    pub htlc_id: HtlcId,
    pub update_issuer: AccountId,
    pub seconds_to_add: u32,
}

/// Operation handed to the transaction submitter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    HtlcCreate(HtlcCreateOperation),
    HtlcRedeem(HtlcRedeemOperation),
    HtlcExtend(HtlcExtendOperation),
}

/// Operation kind tag understood by the submitter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    HtlcCreate,
    HtlcRedeem,
    HtlcExtend,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::HtlcCreate => "htlc_create",
            OperationKind::HtlcRedeem => "htlc_redeem",
            OperationKind::HtlcExtend => "htlc_extend",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::HtlcCreate(_) => OperationKind::HtlcCreate,
            Operation::HtlcRedeem(_) => OperationKind::HtlcRedeem,
            Operation::HtlcExtend(_) => OperationKind::HtlcExtend,
        }
    }

    pub fn fee(&self) -> &AssetAmount {
        match self {
            Operation::HtlcCreate(op) => &op.fee,
            Operation::HtlcRedeem(op) => &op.fee,
            Operation::HtlcExtend(op) => &op.fee,
        }
    }
}

impl From<HtlcCreateOperation> for Operation {
    fn from(op: HtlcCreateOperation) -> Self {
        Operation::HtlcCreate(op)
    }
}

impl From<HtlcRedeemOperation> for Operation {
    fn from(op: HtlcRedeemOperation) -> Self {
        Operation::HtlcRedeem(op)
    }
}

impl From<HtlcExtendOperation> for Operation {
    fn from(op: HtlcExtendOperation) -> Self {
        Operation::HtlcExtend(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_wire_shape() {
        let op = HtlcCreateOperation {
            from: AccountId::new(1),
            to: AccountId::new(2),
            fee: AssetAmount::zero(AssetId::core()),
            amount: AssetAmount::new(100_000, AssetId::new(121)),
            preimage_hash: PreimageHash(0, vec![0x0f; 20]),
            preimage_size: 32,
            claim_period_seconds: 3600,
        };

        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({
                "from": "1.2.1",
                "to": "1.2.2",
                "fee": {"amount": 0, "asset_id": "1.3.0"},
                "amount": {"amount": 100000, "asset_id": "1.3.121"},
                "preimage_hash": [0, "0f".repeat(20)],
                "preimage_size": 32,
                "claim_period_seconds": 3600
            })
        );
    }

    #[test]
    fn test_operation_tagging() {
        let op = Operation::from(HtlcExtendOperation {
            fee: AssetAmount::zero(AssetId::core()),
            htlc_id: HtlcId::new(7),
            update_issuer: AccountId::new(9),
            seconds_to_add: 60,
        });

        assert_eq!(op.kind().as_str(), "htlc_extend");

        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["htlc_extend"]["htlc_id"], "1.16.7");
        assert_eq!(value["htlc_extend"]["update_issuer"], "1.2.9");

        let deserialized: Operation = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, op);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OperationKind::HtlcCreate.to_string(), "htlc_create");
        assert_eq!(OperationKind::HtlcRedeem.to_string(), "htlc_redeem");
    }
}
