//! Core ledger types used throughout the wallet

use crate::error::{HtlcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the network's core asset
pub const CORE_ASSET_ID: &str = "1.3.0";

/// Protocol object type ids (space 1)
pub const ACCOUNT_TYPE: u8 = 2;
pub const ASSET_TYPE: u8 = 3;
pub const HTLC_TYPE: u8 = 16;

const PROTOCOL_SPACE: u8 = 1;

/// Ledger object id in `space.type.instance` form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    pub space: u8,
    pub type_id: u8,
    pub instance: u64,
}

impl ObjectId {
    pub fn new(space: u8, type_id: u8, instance: u64) -> Self {
        Self {
            space,
            type_id,
            instance,
        }
    }
}

impl FromStr for ObjectId {
    type Err = HtlcError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || HtlcError::InvalidObjectId(s.to_string());

        let mut parts = s.split('.');
        let space: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let type_id: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let instance: u64 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(space, type_id, instance))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.space, self.type_id, self.instance)
    }
}

/// Declares a protocol object id newtype that only accepts `1.<type>.x`
macro_rules! typed_object_id {
    ($(#[$meta:meta])* $name:ident, $type_id:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(ObjectId);

        impl $name {
            pub fn new(instance: u64) -> Self {
                Self(ObjectId::new(PROTOCOL_SPACE, $type_id, instance))
            }

            pub fn object_id(&self) -> ObjectId {
                self.0
            }

            pub fn instance(&self) -> u64 {
                self.0.instance
            }
        }

        impl FromStr for $name {
            type Err = HtlcError;

            fn from_str(s: &str) -> Result<Self> {
                let id: ObjectId = s.parse()?;
                if id.space != PROTOCOL_SPACE || id.type_id != $type_id {
                    return Err(HtlcError::InvalidObjectId(format!(
                        "{} is not a {} (expected {}.{}.x)",
                        s,
                        stringify!($name),
                        PROTOCOL_SPACE,
                        $type_id
                    )));
                }
                Ok(Self(id))
            }
        }

        impl TryFrom<String> for $name {
            type Error = HtlcError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_object_id!(
    /// Account id (`1.2.x`)
    AccountId,
    ACCOUNT_TYPE
);

typed_object_id!(
    /// Asset id (`1.3.x`)
    AssetId,
    ASSET_TYPE
);

typed_object_id!(
    /// HTLC contract id (`1.16.x`)
    HtlcId,
    HTLC_TYPE
);

impl AssetId {
    /// The network's native fee-denominating asset
    pub fn core() -> Self {
        Self::new(0)
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::core()
    }
}

/// Rich asset reference as held by asset caches
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub symbol: String,
    #[serde(default)]
    pub precision: u8,
}

impl Asset {
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Fee asset given either as a plain id or as a rich asset reference
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeAsset {
    Id(AssetId),
    Asset(Asset),
}

impl FeeAsset {
    /// Normalize to the asset identifier
    pub fn asset_id(&self) -> AssetId {
        match self {
            FeeAsset::Id(id) => *id,
            FeeAsset::Asset(asset) => asset.id(),
        }
    }
}

impl From<AssetId> for FeeAsset {
    fn from(id: AssetId) -> Self {
        FeeAsset::Id(id)
    }
}

impl From<Asset> for FeeAsset {
    fn from(asset: Asset) -> Self {
        FeeAsset::Asset(asset)
    }
}

/// Amount denominated in a given asset, in the asset's smallest unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    pub amount: u64,
    pub asset_id: AssetId,
}

impl AssetAmount {
    pub fn new(amount: u64, asset_id: AssetId) -> Self {
        Self { amount, asset_id }
    }

    /// Zero amount, used for the structurally required fee field
    pub fn zero(asset_id: AssetId) -> Self {
        Self::new(0, asset_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_parsing() {
        let id: ObjectId = "1.16.42".parse().unwrap();
        assert_eq!(id, ObjectId::new(1, 16, 42));
        assert_eq!(id.to_string(), "1.16.42");

        assert!("1.16".parse::<ObjectId>().is_err());
        assert!("1.16.42.7".parse::<ObjectId>().is_err());
        assert!("a.b.c".parse::<ObjectId>().is_err());
        assert!("".parse::<ObjectId>().is_err());
    }

    #[test]
    fn test_typed_ids_check_type() {
        let account: AccountId = "1.2.100".parse().unwrap();
        assert_eq!(account.instance(), 100);

        assert!(matches!(
            "1.3.0".parse::<AccountId>(),
            Err(HtlcError::InvalidObjectId(_))
        ));
        assert!("2.2.1".parse::<AccountId>().is_err());
        assert!("1.16.5".parse::<HtlcId>().is_ok());
    }

    #[test]
    fn test_core_asset() {
        assert_eq!(AssetId::core().to_string(), CORE_ASSET_ID);
        assert_eq!(AssetId::default(), AssetId::core());
    }

    #[test]
    fn test_fee_asset_normalization() {
        let plain = FeeAsset::Id(AssetId::new(121));
        assert_eq!(plain.asset_id().to_string(), "1.3.121");

        let rich = FeeAsset::Asset(Asset {
            id: AssetId::new(861),
            symbol: "HONEST.USD".to_string(),
            precision: 4,
        });
        assert_eq!(rich.asset_id().to_string(), "1.3.861");
    }

    #[test]
    fn test_serialization() {
        let account = AccountId::new(17);
        let serialized = serde_json::to_string(&account).unwrap();
        assert_eq!(serialized, "\"1.2.17\"");

        let deserialized: AccountId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(account, deserialized);

        assert!(serde_json::from_str::<AccountId>("\"1.3.17\"").is_err());

        let fee: FeeAsset =
            serde_json::from_str(r#"{"id":"1.3.5","symbol":"CNY","precision":4}"#).unwrap();
        assert_eq!(fee.asset_id(), AssetId::new(5));

        let fee: FeeAsset = serde_json::from_str("\"1.3.0\"").unwrap();
        assert_eq!(fee, FeeAsset::Id(AssetId::core()));
    }
}
