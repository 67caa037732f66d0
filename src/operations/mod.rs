//! HTLC operation construction

pub mod builder;
pub mod types;

pub use builder::OperationBuilder;
pub use types::{
    HtlcCreateOperation, HtlcCreateParams, HtlcExtendOperation, HtlcExtendParams,
    HtlcRedeemOperation, HtlcRedeemParams, Operation, OperationKind, PreimageHash,
};
