//! Builds HTLC operation payloads from caller parameters

use crate::crypto::{algorithm_wire_code, compute_commitment, resolve_algorithm, HtlcCommitment};
use crate::error::{HtlcError, Result};
use crate::types::{AssetAmount, AssetId};

use super::types::{
    HtlcCreateOperation, HtlcCreateParams, HtlcExtendOperation, HtlcExtendParams,
    HtlcRedeemOperation, HtlcRedeemParams, PreimageHash,
};

/// Assembles `htlc_create`, `htlc_redeem` and `htlc_extend` payloads.
///
/// Pure: nothing is submitted and no contract state is tracked. Every
/// validation failure aborts before a payload exists.
#[derive(Clone, Debug, Default)]
pub struct OperationBuilder {
    core_asset: AssetId,
}

impl OperationBuilder {
    /// Create a builder that denominates default fees in `core_asset`
    pub fn new(core_asset: AssetId) -> Self {
        Self { core_asset }
    }

    pub fn core_asset(&self) -> AssetId {
        self.core_asset
    }

    /// Build an `htlc_create` payload
    pub fn build_create(&self, params: HtlcCreateParams) -> Result<HtlcCreateOperation> {
        if params.lock_seconds == 0 {
            return Err(HtlcError::InvalidParameter(
                "lock_seconds must be positive".to_string(),
            ));
        }

        let fee_asset = params
            .fee_asset
            .as_ref()
            .map(|asset| asset.asset_id())
            .unwrap_or(self.core_asset);

        let algorithm = resolve_algorithm(&params.cipher)?;

        // A supplied digest wins over hashing the secret
        let commitment = match (&params.preimage_hash, &params.preimage) {
            (Some(digest), _) => Some(HtlcCommitment::from_digest(algorithm, digest.clone())?),
            (None, Some(secret)) => Some(compute_commitment(algorithm, secret.as_bytes())),
            (None, None) => None,
        };

        // Zero counts as absent, and so does an empty secret
        let preimage_size = match (params.preimage_size.filter(|size| *size > 0), &params.preimage) {
            (Some(size), _) => size,
            (None, Some(secret)) if secret.is_empty() => return Err(HtlcError::MissingPreimageSize),
            (None, Some(secret)) => u32::try_from(secret.len()).map_err(|_| {
                HtlcError::InvalidParameter(format!("preimage of {} bytes is too long", secret.len()))
            })?,
            (None, None) => return Err(HtlcError::MissingPreimageSize),
        };

        let commitment = commitment.ok_or(HtlcError::MissingCommitment)?;

        Ok(HtlcCreateOperation {
            from: params.from,
            to: params.to,
            fee: AssetAmount::zero(fee_asset),
            amount: AssetAmount::new(params.amount, params.asset_id),
            preimage_hash: PreimageHash(
                algorithm_wire_code(commitment.algorithm()),
                commitment.into_digest(),
            ),
            preimage_size,
            claim_period_seconds: params.lock_seconds,
        })
    }

    /// Build an `htlc_redeem` payload.
    ///
    /// The secret is forwarded as hex; checking it against the stored
    /// commitment is left to the ledger.
    pub fn build_redeem(&self, params: HtlcRedeemParams) -> HtlcRedeemOperation {
        HtlcRedeemOperation {
            preimage: params.preimage.to_hex(),
            fee: AssetAmount::zero(self.core_asset),
            htlc_id: params.htlc_id,
            redeemer: params.redeemer,
        }
    }

    /// Build an `htlc_extend` payload
    pub fn build_extend(&self, params: HtlcExtendParams) -> Result<HtlcExtendOperation> {
        if params.seconds_to_add == 0 {
            return Err(HtlcError::InvalidParameter(
                "seconds_to_add must be positive".to_string(),
            ));
        }

        Ok(HtlcExtendOperation {
            fee: AssetAmount::zero(self.core_asset),
            htlc_id: params.htlc_id,
            update_issuer: params.issuer,
            seconds_to_add: params.seconds_to_add,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{algorithm_from_wire_code, HashAlgorithm, Preimage};
    use crate::types::{AccountId, Asset, HtlcId};
    use sha2::{Digest, Sha256};

    fn create_params(cipher: &str) -> HtlcCreateParams {
        HtlcCreateParams::new(
            AccountId::new(100),
            AccountId::new(200),
            AssetId::new(121),
            50_000,
            86_400,
            cipher,
        )
    }

    #[test]
    fn test_create_from_secret() {
        let builder = OperationBuilder::default();
        let op = builder
            .build_create(create_params("sha256").with_preimage("hello"))
            .unwrap();

        assert_eq!(op.preimage_size, 5);
        assert_eq!(
            op.preimage_hash,
            PreimageHash(2, Sha256::digest(b"hello").to_vec())
        );
        assert_eq!(op.from, AccountId::new(100));
        assert_eq!(op.to, AccountId::new(200));
        assert_eq!(op.amount, AssetAmount::new(50_000, AssetId::new(121)));
        assert_eq!(op.fee, AssetAmount::zero(AssetId::core()));
        assert_eq!(op.claim_period_seconds, 86_400);
    }

    #[test]
    fn test_create_ripemd160() {
        let op = OperationBuilder::default()
            .build_create(create_params("ripemd160").with_preimage(Preimage::random(32)))
            .unwrap();

        assert_eq!(op.preimage_hash.wire_code(), 0);
        assert_eq!(op.preimage_hash.digest().len(), 20);
        assert_eq!(
            algorithm_from_wire_code(op.preimage_hash.wire_code()).unwrap(),
            HashAlgorithm::Ripemd160
        );
    }

    #[test]
    fn test_create_missing_preimage_size() {
        let result = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage_hash(vec![0u8; 32]));
        assert!(matches!(result, Err(HtlcError::MissingPreimageSize)));

        let result = OperationBuilder::default().build_create(create_params("sha256"));
        assert!(matches!(result, Err(HtlcError::MissingPreimageSize)));
    }

    #[test]
    fn test_create_empty_secret_without_size() {
        let result = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage(""));
        assert!(matches!(result, Err(HtlcError::MissingPreimageSize)));

        let result = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage("").with_preimage_size(0));
        assert!(matches!(result, Err(HtlcError::MissingPreimageSize)));

        // An explicit size still applies
        let op = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage("").with_preimage_size(32))
            .unwrap();
        assert_eq!(op.preimage_size, 32);
        assert_eq!(op.preimage_hash.digest(), Sha256::digest(b"").as_slice());
    }

    #[test]
    fn test_create_with_digest_and_size() {
        let digest = vec![0x42u8; 32];
        let op = OperationBuilder::default()
            .build_create(
                create_params("sha256")
                    .with_preimage_hash(digest.clone())
                    .with_preimage_size(64),
            )
            .unwrap();

        assert_eq!(op.preimage_hash, PreimageHash(2, digest));
        assert_eq!(op.preimage_size, 64);
    }

    #[test]
    fn test_supplied_digest_not_recomputed() {
        let digest = vec![0x11u8; 20];
        let op = OperationBuilder::default()
            .build_create(
                create_params("ripemd160")
                    .with_preimage("secret")
                    .with_preimage_hash(digest.clone()),
            )
            .unwrap();

        assert_eq!(op.preimage_hash.digest(), digest.as_slice());
        assert_eq!(op.preimage_size, 6);
    }

    #[test]
    fn test_zero_preimage_size_falls_back_to_secret() {
        let op = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage("abc").with_preimage_size(0))
            .unwrap();
        assert_eq!(op.preimage_size, 3);
    }

    #[test]
    fn test_create_size_without_commitment() {
        let result = OperationBuilder::default()
            .build_create(create_params("sha256").with_preimage_size(32));
        assert!(matches!(result, Err(HtlcError::MissingCommitment)));
    }

    #[test]
    fn test_create_digest_length_checked() {
        let result = OperationBuilder::default().build_create(
            create_params("sha256")
                .with_preimage_hash(vec![0u8; 20])
                .with_preimage_size(32),
        );
        assert!(matches!(result, Err(HtlcError::DigestLengthMismatch { .. })));
    }

    #[test]
    fn test_create_rejects_algorithms() {
        let result = OperationBuilder::default()
            .build_create(create_params("sha1").with_preimage("hello"));
        assert!(matches!(result, Err(HtlcError::UnsafeAlgorithm(_))));

        let result = OperationBuilder::default()
            .build_create(create_params("blake2b").with_preimage("hello"));
        assert!(matches!(result, Err(HtlcError::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_create_zero_lock_seconds() {
        let mut params = create_params("sha256").with_preimage("hello");
        params.lock_seconds = 0;

        let result = OperationBuilder::default().build_create(params);
        assert!(matches!(result, Err(HtlcError::InvalidParameter(_))));
    }

    #[test]
    fn test_fee_asset_normalization() {
        let builder = OperationBuilder::default();

        let op = builder
            .build_create(create_params("sha256").with_preimage("hello"))
            .unwrap();
        assert_eq!(op.fee.asset_id, AssetId::core());

        let op = builder
            .build_create(
                create_params("sha256")
                    .with_preimage("hello")
                    .with_fee_asset(AssetId::new(113)),
            )
            .unwrap();
        assert_eq!(op.fee.asset_id, AssetId::new(113));

        let asset = Asset {
            id: AssetId::new(861),
            symbol: "HONEST.USD".to_string(),
            precision: 4,
        };
        let op = builder
            .build_create(
                create_params("sha256")
                    .with_preimage("hello")
                    .with_fee_asset(asset.clone()),
            )
            .unwrap();
        assert_eq!(op.fee.asset_id, asset.id());
        assert_eq!(op.fee.amount, 0);
    }

    #[test]
    fn test_custom_core_asset() {
        let builder = OperationBuilder::new(AssetId::new(1));
        let op = builder.build_redeem(HtlcRedeemParams {
            htlc_id: HtlcId::new(3),
            redeemer: AccountId::new(200),
            preimage: Preimage(vec![1]),
        });
        assert_eq!(op.fee.asset_id, AssetId::new(1));
    }

    #[test]
    fn test_redeem_hex_preimage() {
        let op = OperationBuilder::default().build_redeem(HtlcRedeemParams {
            htlc_id: HtlcId::new(12),
            redeemer: AccountId::new(200),
            preimage: Preimage(vec![0x01, 0x02]),
        });

        assert_eq!(op.preimage, "0102");
        assert_eq!(op.fee, AssetAmount::zero(AssetId::core()));
        assert_eq!(op.htlc_id, HtlcId::new(12));
        assert_eq!(op.redeemer, AccountId::new(200));
    }

    #[test]
    fn test_extend() {
        let op = OperationBuilder::default()
            .build_extend(HtlcExtendParams {
                htlc_id: HtlcId::new(12),
                issuer: AccountId::new(100),
                seconds_to_add: 3600,
            })
            .unwrap();

        assert_eq!(op.fee, AssetAmount::zero(AssetId::core()));
        assert_eq!(op.htlc_id, HtlcId::new(12));
        assert_eq!(op.update_issuer, AccountId::new(100));
        assert_eq!(op.seconds_to_add, 3600);
    }

    #[test]
    fn test_extend_zero_seconds() {
        let result = OperationBuilder::default().build_extend(HtlcExtendParams {
            htlc_id: HtlcId::new(12),
            issuer: AccountId::new(100),
            seconds_to_add: 0,
        });
        assert!(matches!(result, Err(HtlcError::InvalidParameter(_))));
    }
}
